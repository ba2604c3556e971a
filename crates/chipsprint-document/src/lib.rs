// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// chipsprint-document — Document acquisition for ChipsPrint.
//
// Downloads the PDF referenced by a print request into memory and checks
// that the bytes actually parse as a PDF before they go anywhere near a
// printer.

pub mod fetch;
pub mod pdf;

pub use pdf::PdfDocument;
