// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the dialog channel.
//
// Every technical error is mapped to plain English with a clear suggestion.
// The raw error text is appended so support staff can see what actually
// happened.

use crate::error::ChipsPrintError;

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as the first line).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
}

/// Full text for an error dialog: humanized message, suggestion, and the
/// underlying error detail.
pub fn dialog_text(err: &ChipsPrintError) -> String {
    let human = humanize_error(err);
    format!("{}\n\n{}\n\n({err})", human.message, human.suggestion)
}

/// Convert a `ChipsPrintError` into a `HumanError` a front-desk user can act on.
pub fn humanize_error(err: &ChipsPrintError) -> HumanError {
    match err {
        ChipsPrintError::InvalidUrl(_) => HumanError {
            message: "That print link doesn't look right.".into(),
            suggestion: "The document address must be a full http:// or https:// link. Try clicking the print button in the application again.".into(),
        },

        ChipsPrintError::Download(detail) => humanize_download_error(detail),

        ChipsPrintError::Pdf(_) => HumanError {
            message: "The downloaded file isn't a readable PDF.".into(),
            suggestion: "The document may be damaged or still being generated. Wait a moment and try printing it again.".into(),
        },

        ChipsPrintError::IppRequest(detail) => humanize_ipp_error(detail),

        ChipsPrintError::Registration(_) => HumanError {
            message: "ChipsPrint couldn't register itself as the print handler.".into(),
            suggestion: "Check that this desktop supports xdg-mime, or ask your administrator to register the chipsprint: scheme.".into(),
        },

        ChipsPrintError::Config(_) => HumanError {
            message: "The ChipsPrint settings file has a problem.".into(),
            suggestion: "Fix or delete the config.toml under your chipsprint config directory, then try again.".into(),
        },

        ChipsPrintError::Io(_) => HumanError {
            message: "There was a problem reading or writing a file.".into(),
            suggestion: "Try again. If this keeps happening, check permissions on your home directory.".into(),
        },
    }
}

/// Parse download error details into human-readable messages.
fn humanize_download_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("404") || lower.contains("not found") {
        HumanError {
            message: "The document couldn't be found on the server.".into(),
            suggestion: "It may have been moved or removed. Go back to the application and open the document again.".into(),
        }
    } else if lower.contains("timed out") || lower.contains("connect") || lower.contains("dns") {
        HumanError {
            message: "The document server couldn't be reached.".into(),
            suggestion: "Check your network connection, then try printing again.".into(),
        }
    } else {
        HumanError {
            message: "Downloading the document failed.".into(),
            suggestion: "Try printing again. If this keeps happening, contact support.".into(),
        }
    }
}

/// Parse IPP-specific error details into human-readable messages.
fn humanize_ipp_error(detail: &str) -> HumanError {
    let lower = detail.to_ascii_lowercase();

    if lower.contains("timed out") || lower.contains("connection refused") {
        HumanError {
            message: "The printer didn't respond.".into(),
            suggestion: "Check that the printer is turned on and connected, then try again.".into(),
        }
    } else if lower.contains("media-empty") || lower.contains("out of paper") {
        HumanError {
            message: "The printer is out of paper.".into(),
            suggestion: "Add paper to the printer's tray, then print again.".into(),
        }
    } else if lower.contains("paper-jam") || lower.contains("media-jam") {
        HumanError {
            message: "Paper is stuck in the printer.".into(),
            suggestion: "Gently pull the stuck paper out and close all doors, then print again.".into(),
        }
    } else if lower.contains("client-error-document-format") {
        HumanError {
            message: "The printer doesn't accept this document type.".into(),
            suggestion: "This printer can't print PDFs directly. Ask your administrator to check the print queue settings.".into(),
        }
    } else if lower.contains("invalid uri") || lower.contains("invalid url") {
        HumanError {
            message: "The printer address doesn't look right.".into(),
            suggestion: "Check the printer_uri setting in the ChipsPrint configuration.".into(),
        }
    } else {
        HumanError {
            message: "The printer had a problem.".into(),
            suggestion: "Try again. If this keeps happening, turn the printer off and on again.".into(),
        }
    }
}
