// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Table-driven test runner.
//!
//! Tablerun executes a fixed, ordered table of named test cases against a function under test.
//! Each test case pairs an input argument with either an expected output, or the expectation that
//! the function fails. The function under test is anything shaped like
//! `Fn(&str) -> Result<String, E>`, where the error only needs to be displayable.
//!
//! ```ignore
//! use tablerun::{CaseTable, Runner, TestCase};
//!
//! let cases = CaseTable::from(vec![
//!     TestCase::want("success case", "valid", "result"),
//!     TestCase::want_err("error case", "invalid"),
//! ]);
//!
//! Runner::new().run(&cases, my_function).assert_passed();
//! ```
//!
//! ## Scenarios
//!
//! A __scenario__ is one execution of the function under test against one test case. Scenarios run
//! sequentially in declaration order, and are fully isolated from each other: a failing scenario,
//! or even a panicking function under test, never prevents sibling scenarios from running. Every
//! scenario yields an [`Outcome`], and all outcomes are gathered into a [`RunReport`].
//!
//! ## Suites
//!
//! Test case tables can also be declared in TOML files called __suites__. A suite may name an
//! external program to act as the function under test, such that the `tablerun` binary can execute
//! the table without writing any Rust code. See [`suite`] for the file layout.

#![warn(
    clippy::complexity,
    clippy::correctness,
    missing_debug_implementations,
    rust_2021_compatibility
)]

pub mod case;
pub mod cmd;
pub mod report;
pub mod runner;
pub mod suite;
pub mod target;

pub use case::{CaseTable, TestCase};
pub use report::{RunReport, ScenarioReport};
pub use runner::{assess, Outcome, Runner};

/// All possible error variants of library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Generic I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Suite file could not be loaded or deserialized.
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// Suite string contains invalid TOML.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Program path of target could not be expanded.
    #[error(transparent)]
    ShellExpand(#[from] shellexpand::LookupError<std::env::VarError>),

    /// Target program was not given.
    #[error("target program is empty")]
    EmptyProgram,

    /// Suite does not define a target to run cases against.
    #[error("suite {path:?} does not define a target")]
    NoTarget { path: std::path::PathBuf },

    /// Target program could not be started.
    #[error("target {program:?} is unavailable: {message}")]
    TargetUnavailable { program: String, message: String },

    /// Filter patterns were given, but none selected a test case.
    #[error("patterns {patterns:?} select no test cases")]
    NoCasesSelected { patterns: Vec<String> },

    /// Target program exited with failure.
    #[error("target {program:?} failed: {message}")]
    TargetFailed { program: String, message: String },

    /// At least one scenario failed its assertions.
    #[error("{failed} of {total} scenarios failed")]
    ScenariosFailed { failed: usize, total: usize },
}

/// Friendly result alias :3
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Determine exit status code of binary from error.
///
/// Looks through the full error chain for the first library [`Error`] it can find. Errors that do
/// not originate from this library map to a generic failure code.
pub fn exit_status_from_error(error: &anyhow::Error) -> i32 {
    // INVARIANT: Library errors attached as context are only reachable through direct downcast.
    let found = error
        .downcast_ref::<Error>()
        .or_else(|| error.chain().find_map(|cause| cause.downcast_ref::<Error>()));
    let error = match found {
        Some(error) => error,
        None => return 1,
    };

    match error {
        Error::Io(_) | Error::TargetFailed { .. } | Error::TargetUnavailable { .. } => {
            exitcode::IOERR
        }
        Error::Config(_) | Error::Toml(_) | Error::ShellExpand(_) | Error::EmptyProgram => {
            exitcode::CONFIG
        }
        Error::NoTarget { .. } | Error::NoCasesSelected { .. } => exitcode::USAGE,
        Error::ScenariosFailed { .. } => exitcode::SOFTWARE,
    }
}
