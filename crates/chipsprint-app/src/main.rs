// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// ChipsPrint — chipsprint: URL-scheme print handler.
//
// Entry point. Initialises logging, decodes the scheme argument the OS
// dispatcher handed over, and runs the print sequence. Exit codes:
// 1 = invalid URL, 2 = any download/print/registration failure, 0 = success.

mod notifier;
mod register;

use clap::Parser;
use tracing::{error, info};

use chipsprint_core::human_errors::dialog_text;
use chipsprint_core::scheme;
use chipsprint_core::{AppConfig, Notifier};
use chipsprint_print::PrintDispatcher;

use notifier::DialogNotifier;

/// chipsprint: URL-scheme print handler.
#[derive(Debug, Parser)]
#[command(name = "chipsprint", version, about)]
struct Cli {
    /// The chipsprint: URI handed over by the OS scheme dispatcher.
    uri: Option<String>,

    /// Register this binary as the chipsprint: scheme handler and exit.
    #[arg(long)]
    register: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    std::process::exit(run(cli).await);
}

async fn run(cli: Cli) -> i32 {
    if cli.register {
        let notifier = DialogNotifier::new(false);
        return match register::register_scheme_handler() {
            Ok(()) => {
                notifier.info("ChipsPrint is now registered for chipsprint: links.");
                0
            }
            Err(err) => {
                error!(%err, "registration failed");
                notifier.error(&dialog_text(&err));
                2
            }
        };
    }

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "configuration load failed");
            DialogNotifier::new(false).error(&dialog_text(&err));
            return 2;
        }
    };

    let raw = cli.uri.unwrap_or_default();
    let request = match scheme::decode(&raw) {
        Ok(request) => request,
        Err(err) => {
            error!(%err, "argument decoding failed");
            DialogNotifier::new(false).error(&dialog_text(&err));
            return 1;
        }
    };

    info!(
        url = %request.url,
        certificate = request.certificate,
        debug = request.debug,
        "request decoded"
    );

    let notifier = DialogNotifier::new(request.debug);
    let dispatcher = PrintDispatcher::new(&config, &notifier);
    match dispatcher.dispatch(&request).await {
        Ok(job_id) => {
            notifier.debug_msg(&format!("Print job {job_id} accepted by the printer."));
            0
        }
        Err(err) => {
            error!(%err, "printing failed");
            notifier.error(&dialog_text(&err));
            2
        }
    }
}
