// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Native modal dialogs, the program's only user-facing output.

use chipsprint_core::Notifier;

const APP_TITLE: &str = "ChipsPrint";

/// Binds the notifier capability to native message boxes.
pub struct DialogNotifier {
    debug_enabled: bool,
}

impl DialogNotifier {
    pub fn new(debug_enabled: bool) -> Self {
        Self { debug_enabled }
    }

    fn show(message: &str, level: rfd::MessageLevel) {
        rfd::MessageDialog::new()
            .set_title(APP_TITLE)
            .set_description(message)
            .set_level(level)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

impl Notifier for DialogNotifier {
    fn info(&self, message: &str) {
        Self::show(message, rfd::MessageLevel::Info);
    }

    fn debug_msg(&self, message: &str) {
        // rfd has no plain level; debug notices ride on Info.
        if self.debug_enabled {
            Self::show(message, rfd::MessageLevel::Info);
        }
    }

    fn error(&self, message: &str) {
        Self::show(message, rfd::MessageLevel::Error);
    }
}
