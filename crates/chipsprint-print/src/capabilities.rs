// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Printer capability parsing.
//
// Queries Get-Printer-Attributes to learn which paper sizes and trays the
// printer advertises, so the dispatcher can decide whether to request A4
// or leave the device default alone.

use std::collections::HashSet;

use tracing::debug;

use chipsprint_core::error::Result;
use chipsprint_core::types::{PaperSize, TraySelection};

use crate::ipp_client::{IppClient, PrinterAttributes};

/// Parsed printer capabilities from IPP Get-Printer-Attributes.
#[derive(Debug, Clone, Default)]
pub struct PrinterCapabilities {
    /// Supported media keywords (e.g. "iso_a4_210x297mm").
    pub media_supported: HashSet<String>,
    /// Supported media-source keywords (e.g. "auto", "tray-1").
    pub media_sources_supported: HashSet<String>,
    /// The printer's self-reported name.
    pub printer_name: Option<String>,
}

impl PrinterCapabilities {
    /// Parse capabilities from raw IPP printer attributes.
    pub fn from_attributes(attrs: &PrinterAttributes) -> Self {
        let media_supported = parse_set(attrs.get("media-supported"));
        let media_sources_supported = parse_set(attrs.get("media-source-supported"));
        let printer_name = attrs
            .get("printer-name")
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());

        debug!(
            media = media_supported.len(),
            sources = media_sources_supported.len(),
            "parsed printer capabilities"
        );

        Self {
            media_supported,
            media_sources_supported,
            printer_name,
        }
    }

    /// Query a printer's capabilities via IPP.
    pub async fn query(client: &IppClient) -> Result<Self> {
        let attrs = client.get_printer_attributes().await?;
        Ok(Self::from_attributes(&attrs))
    }

    /// The `media` keyword to request for `paper`, or None when the printer
    /// does not advertise it and the device default should stand.
    pub fn media_keyword_for(&self, paper: PaperSize) -> Option<&'static str> {
        let keyword = paper.ipp_media_keyword();
        self.media_supported.contains(keyword).then_some(keyword)
    }

    /// Whether the printer advertises the tray's media-source keyword.
    ///
    /// An empty source list means the printer didn't say; the tray is still
    /// requested in that case.
    pub fn advertises_source(&self, tray: &TraySelection) -> bool {
        if self.media_sources_supported.is_empty() {
            return true;
        }
        self.media_sources_supported
            .contains(&tray.ipp_media_source_keyword())
    }
}

/// Parse a comma-separated or multi-valued IPP attribute into a HashSet.
fn parse_set(value: Option<&String>) -> HashSet<String> {
    match value {
        Some(v) => v
            .split([',', ';'])
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        None => HashSet::new(),
    }
}
