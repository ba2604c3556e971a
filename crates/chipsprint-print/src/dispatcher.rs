// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// The print dispatcher: download → validate → configure → submit.
//
// One request, one linear pass on the calling task. Errors propagate as
// ChipsPrintError; exit-code policy belongs to the binary, not here.

use tracing::{debug, info, instrument, warn};

use chipsprint_core::error::Result;
use chipsprint_core::types::{PaperSize, PrintRequest, TraySelection};
use chipsprint_core::{AppConfig, Notifier};
use chipsprint_document::fetch;
use chipsprint_document::pdf::PdfDocument;

use crate::capabilities::PrinterCapabilities;
use crate::ipp_client::IppClient;

/// Drives the whole print sequence for a single decoded request.
pub struct PrintDispatcher<'a> {
    config: &'a AppConfig,
    notifier: &'a dyn Notifier,
}

impl<'a> PrintDispatcher<'a> {
    pub fn new(config: &'a AppConfig, notifier: &'a dyn Notifier) -> Self {
        Self { config, notifier }
    }

    /// Download the document and submit it to the configured printer.
    ///
    /// Returns the job-id assigned by the printer.
    #[instrument(skip_all, fields(url = %request.url, certificate = request.certificate))]
    pub async fn dispatch(&self, request: &PrintRequest) -> Result<i32> {
        self.notifier
            .debug_msg(&format!("About to download PDF from {}", request.url));

        let client = fetch::build_http_client(self.config)?;
        let bytes = fetch::fetch_document(&client, &request.url).await?;

        let document = PdfDocument::from_bytes(&bytes)?;
        debug!(pages = document.page_count(), "document validated");

        let ipp = IppClient::new(&self.config.printer_uri)?;
        let capabilities = PrinterCapabilities::query(&ipp).await?;

        let tray = select_tray(request, self.config);
        if !capabilities.advertises_source(&tray) {
            warn!(tray = %tray, "printer does not advertise the selected tray");
        }
        let media = select_media(self.config.preferred_paper, &capabilities);

        let printer_name = capabilities
            .printer_name
            .clone()
            .unwrap_or_else(|| self.config.printer_uri.clone());
        self.notifier.info(&format!(
            "Printing {} on tray {} on printer {}",
            request.url,
            tray.index(),
            printer_name
        ));

        let job_id = ipp
            .print_job(
                bytes,
                &request.job_name(),
                media,
                &tray.ipp_media_source_keyword(),
            )
            .await?;

        info!(job_id, "print job submitted");
        Ok(job_id)
    }
}

/// Tray for this request: the configured certificate tray when the cert
/// flag is set, otherwise automatic selection.
fn select_tray(request: &PrintRequest, config: &AppConfig) -> TraySelection {
    if request.certificate {
        TraySelection::Tray(config.certificate_tray)
    } else {
        TraySelection::Auto
    }
}

/// Media keyword to request, or None to leave the device default paper.
fn select_media(preferred: PaperSize, capabilities: &PrinterCapabilities) -> Option<&'static str> {
    capabilities.media_keyword_for(preferred)
}
