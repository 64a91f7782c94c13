// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! External program as function under test.
//!
//! Wraps an external program such that it behaves like a function taking one string argument,
//! returning one string output, or an error.

use crate::{suite::TargetSettings, Error, Result};

use std::process::{Command, Stdio};
use tracing::{instrument, trace};

/// Function under test backed by external program.
///
/// # Invariants
///
/// - Program path is always expanded.
#[derive(Clone, Debug)]
pub struct CommandTarget {
    program: String,
    args: Vec<String>,
}

impl CommandTarget {
    /// Construct new command target from target settings.
    ///
    /// # Errors
    ///
    /// - Return [`Error::EmptyProgram`] if no program was given.
    /// - Return [`Error::ShellExpand`] if program path references an undefined variable.
    ///
    /// [`Error::EmptyProgram`]: crate::Error::EmptyProgram
    /// [`Error::ShellExpand`]: crate::Error::ShellExpand
    pub fn new(settings: &TargetSettings) -> Result<Self> {
        if settings.program.trim().is_empty() {
            return Err(Error::EmptyProgram);
        }

        let program = shellexpand::full(&settings.program)?.into_owned();
        Ok(Self { program, args: settings.args.clone() })
    }

    /// Expanded name or path of program.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Call external program non-interactively with test case argument.
    ///
    /// The argument is given after all leading arguments of target. Standard input is closed. The
    /// output is whatever the program wrote to stdout, with a single trailing newline chomped.
    ///
    /// # Errors
    ///
    /// - Return [`Error::TargetUnavailable`] if program cannot be found or spawned.
    /// - Return [`Error::TargetFailed`] if program exits with failure, with whatever it wrote to
    ///   stderr as the message.
    ///
    /// [`Error::TargetUnavailable`]: crate::Error::TargetUnavailable
    /// [`Error::TargetFailed`]: crate::Error::TargetFailed
    #[instrument(skip(self), level = "debug")]
    pub fn call(&self, arg: &str) -> Result<String> {
        trace!("Call {:?} with {:?}", self.program, self.args);
        let output = Command::new(&self.program)
            .args(&self.args)
            .arg(arg)
            .stdin(Stdio::null())
            .output()
            .map_err(|error| Error::TargetUnavailable {
                program: self.program.clone(),
                message: error.to_string(),
            })?;
        let stdout = String::from_utf8_lossy(output.stdout.as_slice()).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(output.stderr.as_slice());
            let message = match stderr.trim_end() {
                "" => output.status.to_string(),
                stderr => stderr.to_string(),
            };
            return Err(Error::TargetFailed { program: self.program.clone(), message });
        }

        // INVARIANT: Chomp trailing newline.
        let stdout = stdout
            .strip_suffix("\r\n")
            .or(stdout.strip_suffix('\n'))
            .map(ToString::to_string)
            .unwrap_or(stdout);

        Ok(stdout)
    }
}
