// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use tablerun::{cmd::Tablerun, exit_status_from_error};

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let format = fmt::layer().pretty().with_target(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(filter).with(format).init();

    if let Err(error) = Tablerun::parse().run() {
        tracing::error!("{error:?}");
        std::process::exit(exit_status_from_error(&error));
    }

    std::process::exit(exitcode::OK);
}
