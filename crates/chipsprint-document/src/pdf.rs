// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF validation via the `lopdf` crate.
//
// The printer receives the raw downloaded bytes; parsing here is the gate
// that keeps non-PDF responses (error pages, truncated downloads) from
// being submitted as jobs.

use lopdf::Document;
use tracing::{debug, instrument};

use chipsprint_core::error::{ChipsPrintError, Result};

/// A PDF document parsed from downloaded bytes.
#[derive(Debug)]
pub struct PdfDocument {
    document: Document,
}

impl PdfDocument {
    /// Parse raw bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let document = Document::load_mem(data).map_err(|err| {
            ChipsPrintError::Pdf(format!("failed to load PDF from memory: {err}"))
        })?;

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self { document })
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::{Object, Stream, dictionary};

    /// Build the smallest PDF lopdf will round-trip: one empty page.
    fn one_page_pdf() -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let content_id = doc.add_object(Stream::new(dictionary! {}, Vec::new()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        });
        let pages = dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        };
        doc.objects.insert(pages_id, Object::Dictionary(pages));
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).expect("serialise test PDF");
        bytes
    }

    #[test]
    fn parses_a_valid_pdf() {
        let pdf = PdfDocument::from_bytes(&one_page_pdf()).unwrap();
        assert_eq!(pdf.page_count(), 1);
    }

    #[test]
    fn rejects_non_pdf_bytes() {
        let err = PdfDocument::from_bytes(b"<html>Not Found</html>").unwrap_err();
        assert!(matches!(err, ChipsPrintError::Pdf(_)));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(PdfDocument::from_bytes(&[]).is_err());
    }
}
