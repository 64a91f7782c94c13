// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Test case data model.
//!
//! A [`TestCase`] is a single named record pairing an input argument with an expected output, or
//! with the expectation that the function under test fails. Test cases are gathered into an
//! ordered [`CaseTable`] that is declared once before a run begins, and never mutated after.

use crate::{Error, Result};

use serde::Deserialize;
use std::collections::HashSet;
use tracing::{instrument, warn};

/// Single named test case.
///
/// # Invariants
///
/// - If `want_err` is true, then `want` is ignored.
#[derive(Clone, Default, Debug, PartialEq, Eq, Deserialize)]
pub struct TestCase {
    /// Human-readable identifier of test case.
    pub name: String,

    /// Input argument to give function under test.
    pub arg: String,

    /// Expected output of function under test.
    #[serde(default)]
    pub want: String,

    /// Expect function under test to fail.
    #[serde(default)]
    pub want_err: bool,
}

impl TestCase {
    /// Construct test case expecting successful output.
    pub fn want(name: impl Into<String>, arg: impl Into<String>, want: impl Into<String>) -> Self {
        Self { name: name.into(), arg: arg.into(), want: want.into(), want_err: false }
    }

    /// Construct test case expecting an error.
    pub fn want_err(name: impl Into<String>, arg: impl Into<String>) -> Self {
        Self { name: name.into(), arg: arg.into(), want: String::new(), want_err: true }
    }
}

/// Ordered sequence of test cases.
///
/// Declaration order is preserved during iteration, and thus during execution. Names should be
/// unique for diagnostic clarity, but uniqueness is not enforced. See [`CaseTable::lint`].
#[derive(Clone, Default, Debug, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct CaseTable(Vec<TestCase>);

impl CaseTable {
    /// Construct new empty case table.
    pub fn new() -> Self {
        CaseTable::default()
    }

    /// Number of test cases in table.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Determine if table has no test cases.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate through test cases in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, TestCase> {
        self.0.iter()
    }

    /// Iterate through names of all test cases in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.iter().map(|case| case.name.as_str())
    }

    /// Check test cases against unenforced conventions.
    ///
    /// Never rejects a table. Will log a warning for each duplicate name, and for each error case
    /// that also defines an expected output that will be ignored. Returns the number of warnings
    /// issued.
    #[instrument(skip(self), level = "debug")]
    pub fn lint(&self) -> usize {
        let mut seen = HashSet::new();
        let mut warnings = 0;

        for case in &self.0 {
            if !seen.insert(case.name.as_str()) {
                warn!("Test case name {:?} is not unique", case.name);
                warnings += 1;
            }

            if case.want_err && !case.want.is_empty() {
                warn!("Test case {:?} expects an error, ignoring want {:?}", case.name, case.want);
                warnings += 1;
            }
        }

        warnings
    }
}

impl From<Vec<TestCase>> for CaseTable {
    fn from(cases: Vec<TestCase>) -> Self {
        Self(cases)
    }
}

impl FromIterator<TestCase> for CaseTable {
    fn from_iter<I: IntoIterator<Item = TestCase>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'table> IntoIterator for &'table CaseTable {
    type Item = &'table TestCase;
    type IntoIter = std::slice::Iter<'table, TestCase>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::str::FromStr for CaseTable {
    type Err = Error;

    /// Parse case table from TOML string.
    ///
    /// Test cases are expected as a `[[cases]]` array of tables. An empty string yields an empty
    /// table.
    ///
    /// # Errors
    ///
    /// - Return [`Error::Toml`] if data is not valid TOML, or a test case is malformed.
    ///
    /// [`Error::Toml`]: crate::Error::Toml
    fn from_str(data: &str) -> Result<Self, Self::Err> {
        #[derive(Deserialize)]
        struct Cases {
            #[serde(default)]
            cases: CaseTable,
        }

        let cases: Cases = toml::from_str(data)?;
        Ok(cases.cases)
    }
}
