// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for ChipsPrint.

use thiserror::Error;

/// Top-level error type for all ChipsPrint operations.
#[derive(Debug, Error)]
pub enum ChipsPrintError {
    // -- Request decoding --
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    // -- Document errors --
    #[error("download failed: {0}")]
    Download(String),

    #[error("PDF operation failed: {0}")]
    Pdf(String),

    // -- Print errors --
    #[error("IPP request failed: {0}")]
    IppRequest(String),

    // -- Desktop integration --
    #[error("scheme registration failed: {0}")]
    Registration(String),

    // -- Configuration --
    #[error("configuration error: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ChipsPrintError>;
