// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Suite file parser.
//!
//! A suite is a TOML file declaring a case table, and optionally the external program that acts as
//! the function under test:
//!
//! ```toml
//! [target]
//! program = "sh"
//! args = ["-c", "script", "target"]
//!
//! [[cases]]
//! name = "success case"
//! arg = "valid"
//! want = "result"
//!
//! [[cases]]
//! name = "error case"
//! arg = "invalid"
//! want_err = true
//! ```
//!
//! The argument of each test case is appended after `args` when the target program is invoked.

use crate::{case::CaseTable, Error, Result};

use config::{Config, File};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, instrument};

/// Case table with optional target program.
#[derive(Clone, Default, Debug, PartialEq, Eq, Deserialize)]
pub struct Suite {
    /// External program to run test cases against.
    #[serde(default)]
    pub target: Option<TargetSettings>,

    /// Test cases in declaration order.
    #[serde(default)]
    pub cases: CaseTable,
}

impl Suite {
    /// Load suite from TOML file.
    ///
    /// # Errors
    ///
    /// - Return [`Error::Config`] if file is missing, has invalid TOML, or has malformed entries.
    ///
    /// [`Error::Config`]: crate::Error::Config
    #[instrument(skip(path), level = "debug")]
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        debug!("Load suite at {:?}", path.as_ref());
        let suite: Suite = Config::builder()
            .add_source(File::from(path.as_ref()).format(config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        debug!("Loaded {} test cases", suite.cases.len());

        Ok(suite)
    }
}

impl std::str::FromStr for Suite {
    type Err = Error;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(data)?)
    }
}

/// External program settings.
#[derive(Clone, Default, Debug, PartialEq, Eq, Deserialize)]
pub struct TargetSettings {
    /// Path or name of program to execute.
    pub program: String,

    /// Leading arguments given before test case argument.
    #[serde(default)]
    pub args: Vec<String>,
}
