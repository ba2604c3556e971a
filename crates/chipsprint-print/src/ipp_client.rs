// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Async IPP client for the target printer.
//
// Uses the `ipp` crate's async API for the two operations this program
// needs:
//   - Get-Printer-Attributes  (RFC 8011 §4.2.5)
//   - Print-Job               (RFC 8011 §4.2.1)

use std::collections::HashMap;
use std::io::Cursor;

use ipp::prelude::*;
use tracing::{debug, error, info, instrument};

use chipsprint_core::error::{ChipsPrintError, Result};

/// MIME type sent as `document-format` for every job.
pub const PDF_MIME: &str = "application/pdf";

/// Attributes returned by a Get-Printer-Attributes response, flattened to a
/// map of attribute-name to a human-readable string value.
pub type PrinterAttributes = HashMap<String, String>;

/// Async IPP client bound to a single printer URI.
pub struct IppClient {
    /// The target printer URI (ipp:// or ipps://).
    uri: Uri,
}

impl IppClient {
    /// Create a new client targeting the given printer URI, typically taken
    /// from the application configuration.
    pub fn new(uri: &str) -> Result<Self> {
        let parsed: Uri = uri
            .parse()
            .map_err(|e| ChipsPrintError::IppRequest(format!("invalid URI '{uri}': {e}")))?;
        Ok(Self { uri: parsed })
    }

    /// Return the printer URI this client is targeting.
    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Query the printer for its capabilities and identity.
    #[instrument(skip(self), fields(uri = %self.uri))]
    pub async fn get_printer_attributes(&self) -> Result<PrinterAttributes> {
        let operation = IppOperationBuilder::get_printer_attributes(self.uri.clone()).build();
        let client = AsyncIppClient::new(self.uri.clone());

        debug!("sending Get-Printer-Attributes");
        let response = client
            .send(operation)
            .await
            .map_err(|e| ChipsPrintError::IppRequest(format!("Get-Printer-Attributes: {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(status = ?code, "Get-Printer-Attributes failed");
            return Err(ChipsPrintError::IppRequest(format!(
                "Get-Printer-Attributes returned status {code:?}"
            )));
        }

        let attrs = flatten_attributes(response.attributes());
        debug!(count = attrs.len(), "received printer attributes");
        Ok(attrs)
    }

    /// Submit a PDF to the printer as a Print-Job.
    ///
    /// Returns the job-id assigned by the printer on success.
    ///
    /// # Arguments
    ///
    /// * `document_bytes` — raw bytes of the PDF to print.
    /// * `job_name`       — human-readable name shown in the printer queue.
    /// * `media`          — IPP `media` keyword to request, or None to keep
    ///   the device default paper.
    /// * `media_source`   — IPP `media-source` keyword for the tray.
    #[instrument(skip(self, document_bytes), fields(uri = %self.uri, job_name = %job_name))]
    pub async fn print_job(
        &self,
        document_bytes: Vec<u8>,
        job_name: &str,
        media: Option<&str>,
        media_source: &str,
    ) -> Result<i32> {
        let payload = IppPayload::new(Cursor::new(document_bytes));

        let mut builder = IppOperationBuilder::print_job(self.uri.clone(), payload)
            .job_title(job_name)
            .document_format(PDF_MIME)
            .attribute(IppAttribute::new(
                "media-source",
                IppValue::Keyword(media_source.to_string()),
            ));
        if let Some(media) = media {
            builder = builder.attribute(IppAttribute::new(
                "media",
                IppValue::Keyword(media.to_string()),
            ));
        }
        let operation = builder.build();

        let client = AsyncIppClient::new(self.uri.clone());

        info!(media_source, media, "sending Print-Job");
        let response = client
            .send(operation)
            .await
            .map_err(|e| ChipsPrintError::IppRequest(format!("Print-Job: {e}")))?;

        if !response.header().status_code().is_success() {
            let code = response.header().status_code();
            error!(status = ?code, "Print-Job failed");
            return Err(ChipsPrintError::IppRequest(format!(
                "Print-Job returned status {code:?}"
            )));
        }

        // The job-id is in the Job Attributes group.
        let job_id = extract_job_id(response.attributes()).ok_or_else(|| {
            ChipsPrintError::IppRequest("Print-Job response missing job-id attribute".into())
        })?;

        info!(job_id, "print job accepted by printer");
        Ok(job_id)
    }
}

// ---------------------------------------------------------------------------
// Helper functions for parsing IPP responses
// ---------------------------------------------------------------------------

/// Flatten all attribute groups in an IPP response into a single map.
///
/// Multi-valued attributes are joined with `", "`. Group-level context is
/// discarded in favour of a simple lookup interface.
fn flatten_attributes(attrs: &IppAttributes) -> PrinterAttributes {
    let mut map = HashMap::new();
    for group in attrs.groups() {
        for (name, attr) in group.attributes() {
            map.insert(name.clone(), format!("{}", attr.value()));
        }
    }
    map
}

/// Extract the `job-id` integer from a response's Job Attributes group.
fn extract_job_id(attrs: &IppAttributes) -> Option<i32> {
    for group in attrs.groups_of(DelimiterTag::JobAttributes) {
        if let Some(attr) = group.attributes().get("job-id")
            && let IppValue::Integer(id) = attr.value()
        {
            return Some(*id);
        }
    }
    None
}
