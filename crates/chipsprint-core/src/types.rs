// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the ChipsPrint scheme handler.

use serde::{Deserialize, Serialize};
use url::Url;

/// A fully decoded print request.
///
/// Built once per process invocation by [`crate::scheme::decode`] and never
/// mutated afterwards. The URL is guaranteed to be an absolute `http` or
/// `https` address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintRequest {
    /// Where to download the PDF from.
    pub url: Url,
    /// Print on the certificate tray instead of the automatic one.
    pub certificate: bool,
    /// Show debug dialogs along the way.
    pub debug: bool,
}

impl PrintRequest {
    /// Human-readable job name: the final path segment of the URL, falling
    /// back to the full URL when the path has none (e.g. `http://host/`).
    pub fn job_name(&self) -> String {
        self.url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| self.url.to_string())
    }
}

/// Which paper source slot the printer should draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraySelection {
    /// Let the printer pick. Reported as tray index 0.
    Auto,
    /// A specific tray by index.
    Tray(u32),
}

impl TraySelection {
    /// Numeric tray index, 0 meaning automatic.
    pub fn index(&self) -> u32 {
        match self {
            Self::Auto => 0,
            Self::Tray(index) => *index,
        }
    }

    /// IPP `media-source` keyword (PWG 5100.7) for this selection.
    pub fn ipp_media_source_keyword(&self) -> String {
        match self {
            Self::Auto => "auto".to_string(),
            Self::Tray(index) => format!("tray-{index}"),
        }
    }
}

impl std::fmt::Display for TraySelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Standard paper sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaperSize {
    A4,
    A3,
    A5,
    Letter,
    Legal,
}

impl PaperSize {
    /// IPP `media` keyword (RFC 8011 §5.2.13) for this paper size.
    pub fn ipp_media_keyword(&self) -> &'static str {
        match self {
            Self::A4 => "iso_a4_210x297mm",
            Self::A3 => "iso_a3_297x420mm",
            Self::A5 => "iso_a5_148x210mm",
            Self::Letter => "na_letter_8.5x11in",
            Self::Legal => "na_legal_8.5x14in",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> PrintRequest {
        PrintRequest {
            url: Url::parse(url).unwrap(),
            certificate: false,
            debug: false,
        }
    }

    #[test]
    fn auto_tray_is_index_zero() {
        assert_eq!(TraySelection::Auto.index(), 0);
        assert_eq!(TraySelection::Auto.ipp_media_source_keyword(), "auto");
    }

    #[test]
    fn numbered_tray_keeps_its_index() {
        let tray = TraySelection::Tray(6);
        assert_eq!(tray.index(), 6);
        assert_eq!(tray.ipp_media_source_keyword(), "tray-6");
    }

    #[test]
    fn job_name_is_last_path_segment() {
        assert_eq!(request("http://example.com/docs/a.pdf").job_name(), "a.pdf");
    }

    #[test]
    fn job_name_falls_back_to_url() {
        assert_eq!(request("http://example.com/").job_name(), "http://example.com/");
    }
}
