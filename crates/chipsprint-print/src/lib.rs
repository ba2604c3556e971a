// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// chipsprint-print — IPP client, printer capability parsing, and the print
// dispatcher that drives one download → configure → submit sequence.

pub mod capabilities;
pub mod dispatcher;
pub mod ipp_client;

pub use capabilities::PrinterCapabilities;
pub use dispatcher::PrintDispatcher;
pub use ipp_client::IppClient;
