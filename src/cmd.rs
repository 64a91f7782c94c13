// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Command set implementation.
//!
//! This module is the forward facing API of the library for the `tablerun` binary. It runs suite
//! files against their target programs.

use crate::{
    runner::Runner,
    suite::Suite,
    target::CommandTarget,
    Error,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::{cell::RefCell, path::PathBuf};
use tracing::{info, instrument};

/// Tablerun public command set CLI.
#[derive(Debug, Clone, Parser)]
#[command(
    about,
    override_usage = "\n  tablerun run [options] <suite> [pattern]...\n  tablerun ls <suite>",
    subcommand_help_heading = "Commands",
    version
)]
pub struct Tablerun {
    /// Command-set interfaces.
    #[command(subcommand)]
    pub command: Command,
}

impl Tablerun {
    /// Run command based on given arguments.
    ///
    /// # Errors
    ///
    /// Will fail if given command implementation fails.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Run(opts) => run_suite(opts),
            Command::List(opts) => run_list(opts),
        }
    }
}

/// Full command-set of tablerun.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run test cases of suite against its target.
    #[command(override_usage = "tablerun run [options] <suite> [pattern]...")]
    Run(RunOptions),

    /// List test cases of suite.
    #[command(name = "ls", override_usage = "tablerun ls <suite>")]
    List(ListOptions),
}

/// Run test cases of suite.
#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
pub struct RunOptions {
    /// Path to suite file.
    #[arg(value_name = "suite")]
    pub suite: PathBuf,

    /// Only run test cases whose names match these patterns.
    #[arg(value_name = "pattern")]
    pub patterns: Vec<String>,

    /// Only report summary, not the full report table.
    #[arg(short, long)]
    pub quiet: bool,
}

/// List test cases of suite.
#[derive(Parser, Clone, Debug)]
#[command(author, about, long_about)]
pub struct ListOptions {
    /// Path to suite file.
    #[arg(value_name = "suite")]
    pub suite: PathBuf,
}

#[instrument(skip(opts), level = "debug")]
fn run_suite(opts: RunOptions) -> Result<()> {
    let suite = Suite::load(&opts.suite)
        .with_context(|| format!("Failed to load suite {:?}", opts.suite))?;
    suite.cases.lint();

    let settings = suite.target.as_ref().ok_or(Error::NoTarget { path: opts.suite.clone() })?;
    let target = CommandTarget::new(settings)?;
    info!("Run {} test cases against {:?}", suite.cases.len(), target.program());

    // INVARIANT: A target that cannot be started was never observed, so no scenario may pass on
    // its behalf.
    let unavailable = RefCell::new(None);
    let bar = ProgressBar::no_length();
    bar.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")?);
    let report = Runner::new().filter(&opts.patterns).run_with_progress(
        &suite.cases,
        |arg| {
            let result = target.call(arg);
            if let Err(Error::TargetUnavailable { message, .. }) = &result {
                unavailable.borrow_mut().get_or_insert_with(|| message.clone());
            }
            result
        },
        &bar,
    );
    bar.finish_and_clear();

    if let Some(message) = unavailable.into_inner() {
        return Err(Error::TargetUnavailable { program: target.program().into(), message }.into());
    }

    if !opts.patterns.is_empty() && report.total() == 0 {
        return Err(Error::NoCasesSelected { patterns: opts.patterns }.into());
    }

    if !opts.quiet {
        info!("Report:\n{}", report.tablize());
    }
    info!("{report}");

    report.check().context(Error::ScenariosFailed { failed: report.failed(), total: report.total() })
}

#[instrument(skip(opts), level = "debug")]
fn run_list(opts: ListOptions) -> Result<()> {
    let suite = Suite::load(&opts.suite)
        .with_context(|| format!("Failed to load suite {:?}", opts.suite))?;
    suite.cases.lint();

    let mut builder = tabled::builder::Builder::new();
    builder.push_record(["name", "arg", "expect"]);
    for case in &suite.cases {
        let expect = if case.want_err { "<error>".into() } else { format!("{:?}", case.want) };
        builder.push_record([case.name.clone(), format!("{:?}", case.arg), expect]);
    }

    let mut table = builder.build();
    table.with(tabled::settings::Style::ascii_rounded());
    info!("Test cases:\n{table}");

    Ok(())
}
