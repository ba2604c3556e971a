// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.
//
// Settings are read from $XDG_CONFIG_HOME/chipsprint/config.toml when that
// file exists; a missing file yields the defaults below.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{ChipsPrintError, Result};
use crate::types::PaperSize;

/// Application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// IPP URI of the printer to submit jobs to.
    pub printer_uri: String,
    /// Tray index used when a request carries the certificate flag.
    pub certificate_tray: u32,
    /// Paper size to request when the printer advertises it.
    pub preferred_paper: PaperSize,
    /// Download timeout in seconds. None inherits the HTTP client default
    /// (unbounded).
    pub http_timeout_secs: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            printer_uri: "ipp://localhost:631/ipp/print".to_string(),
            certificate_tray: 6,
            preferred_paper: PaperSize::A4,
            http_timeout_secs: None,
        }
    }
}

impl AppConfig {
    /// Load the configuration file, falling back to defaults when absent.
    pub fn load() -> Result<Self> {
        let path = config_path();
        match std::fs::read_to_string(&path) {
            Ok(raw) => Self::parse(&raw)
                .map_err(|err| ChipsPrintError::Config(format!("{}: {err}", path.display()))),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn parse(raw: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}

/// Path of the configuration file.
pub fn config_path() -> PathBuf {
    config_base_dir().join("chipsprint").join("config.toml")
}

fn config_base_dir() -> PathBuf {
    // Try XDG config dir, then fallback to home
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        return PathBuf::from(xdg);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".config");
    }
    // Last resort
    PathBuf::from("/tmp")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = AppConfig::default();
        assert_eq!(config.printer_uri, "ipp://localhost:631/ipp/print");
        assert_eq!(config.certificate_tray, 6);
        assert_eq!(config.preferred_paper, PaperSize::A4);
        assert!(config.http_timeout_secs.is_none());
    }

    #[test]
    fn partial_toml_keeps_remaining_defaults() {
        let config = AppConfig::parse("printer_uri = \"ipp://10.0.0.5:631/ipp/print\"").unwrap();
        assert_eq!(config.printer_uri, "ipp://10.0.0.5:631/ipp/print");
        assert_eq!(config.certificate_tray, 6);
    }

    #[test]
    fn full_toml_overrides_everything() {
        let raw = r#"
            printer_uri = "ipps://printhost:631/printers/front-desk"
            certificate_tray = 3
            preferred_paper = "Letter"
            http_timeout_secs = 30
        "#;
        let config = AppConfig::parse(raw).unwrap();
        assert_eq!(config.certificate_tray, 3);
        assert_eq!(config.preferred_paper, PaperSize::Letter);
        assert_eq!(config.http_timeout_secs, Some(30));
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(AppConfig::parse("certificate_tray = \"six\"").is_err());
    }
}
