// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Scenario execution.
//!
//! Executes each test case of a [`CaseTable`] against a function under test, and judges what the
//! function produced through [`assess`]. Scenarios are run one after another in declaration order
//! on the calling thread.

use crate::{
    case::{CaseTable, TestCase},
    report::{RunReport, ScenarioReport},
};

use indicatif::ProgressBar;
use std::{
    any::Any,
    collections::HashSet,
    fmt::Display,
    panic::{catch_unwind, AssertUnwindSafe},
    time::Instant,
};
use tracing::{debug, instrument, warn};

/// Verdict of a single scenario.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// All assertions held.
    Passed,

    /// Function failed, but no error was expected.
    UnexpectedError { error: String },

    /// Error was expected, but function produced output.
    MissingError { got: String },

    /// Function produced output that does not equal expected output.
    Mismatch { want: String, got: String },

    /// Function under test panicked.
    Panicked { message: String },
}

impl Outcome {
    /// Determine if scenario passed.
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::UnexpectedError { error } => write!(f, "unexpected error: {error}"),
            Outcome::MissingError { got } => write!(f, "expected error, got {got:?}"),
            Outcome::Mismatch { want, got } => write!(f, "want {want:?}, got {got:?}"),
            Outcome::Panicked { message } => write!(f, "panicked: {message}"),
        }
    }
}

/// Judge observed result of function under test against test case.
///
/// When an error is expected, only the presence of an error is checked, and the observed output is
/// never looked at. Otherwise, the observed result must not be an error, and its output must be
/// exactly equal to the expected output.
pub fn assess<E>(case: &TestCase, observed: Result<String, E>) -> Outcome
where
    E: Display,
{
    match (case.want_err, observed) {
        (true, Err(_)) => Outcome::Passed,
        (true, Ok(got)) => Outcome::MissingError { got },
        (false, Err(error)) => Outcome::UnexpectedError { error: error.to_string() },
        (false, Ok(got)) if got == case.want => Outcome::Passed,
        (false, Ok(got)) => Outcome::Mismatch { want: case.want.clone(), got },
    }
}

/// Sequential scenario executor.
///
/// # Invariants
///
/// - Scenarios execute in declaration order.
/// - Failure of one scenario never prevents execution of the next.
#[derive(Clone, Default, Debug)]
pub struct Runner {
    patterns: Vec<String>,
}

impl Runner {
    /// Construct new runner that selects every test case.
    pub fn new() -> Self {
        Runner::default()
    }

    /// Only run test cases whose names match any of the given Unix-like glob patterns.
    ///
    /// An empty set of patterns selects every test case.
    pub fn filter(mut self, patterns: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.patterns = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Run all selected test cases against function under test.
    pub fn run<F, E>(&self, cases: &CaseTable, function: F) -> RunReport
    where
        F: Fn(&str) -> Result<String, E>,
        E: Display,
    {
        self.run_with_progress(cases, function, &ProgressBar::hidden())
    }

    /// Run all selected test cases against function under test, showing progress.
    ///
    /// Progress bar length is set to the number of selected test cases, and is ticked once per
    /// finished scenario. Caller is responsible for finishing the progress bar.
    #[instrument(skip(self, cases, function, bar), level = "debug")]
    pub fn run_with_progress<F, E>(
        &self,
        cases: &CaseTable,
        function: F,
        bar: &ProgressBar,
    ) -> RunReport
    where
        F: Fn(&str) -> Result<String, E>,
        E: Display,
    {
        let selected = self.select(cases);
        let total = cases.iter().filter(|case| is_selected(&selected, case)).count();
        bar.set_length(total as u64);

        let mut report = RunReport::new();
        for case in cases {
            if !is_selected(&selected, case) {
                debug!("Skip scenario {:?}", case.name);
                report.skip();
                continue;
            }

            bar.set_message(case.name.clone());
            let scenario = run_scenario(case, &function);
            if scenario.outcome.is_passed() {
                debug!("Scenario {:?} passed", scenario.name);
            } else {
                warn!("Scenario {:?} failed: {}", scenario.name, scenario.outcome);
            }
            report.push(scenario);
            bar.inc(1);
        }

        report
    }

    /// Select names of test cases that match filter patterns.
    ///
    /// Returns `None` if there are no filter patterns, meaning that everything is selected. Invalid
    /// patterns, or patterns with no matches, are logged and skipped.
    fn select(&self, cases: &CaseTable) -> Option<HashSet<String>> {
        if self.patterns.is_empty() {
            return None;
        }

        let mut selected = HashSet::new();
        for pattern in &self.patterns {
            let glob = match glob::Pattern::new(pattern) {
                Ok(glob) => glob,
                Err(error) => {
                    warn!("Invalid pattern {pattern:?}: {error}");
                    continue;
                }
            };

            let before = selected.len();
            let mut found = false;
            for name in cases.names().filter(|name| glob.matches(name)) {
                found = true;
                selected.insert(name.to_string());
            }

            if !found {
                warn!("Pattern {pattern:?} does not match any test case");
            } else {
                debug!("Pattern {pattern:?} selected {} new test cases", selected.len() - before);
            }
        }

        Some(selected)
    }
}

fn is_selected(selected: &Option<HashSet<String>>, case: &TestCase) -> bool {
    selected.as_ref().is_none_or(|names| names.contains(&case.name))
}

fn run_scenario<F, E>(case: &TestCase, function: &F) -> ScenarioReport
where
    F: Fn(&str) -> Result<String, E>,
    E: Display,
{
    let start = Instant::now();

    // INVARIANT: A panic is contained to the scenario that raised it.
    let outcome = match catch_unwind(AssertUnwindSafe(|| function(&case.arg))) {
        Ok(observed) => assess(case, observed),
        Err(payload) => Outcome::Panicked { message: panic_message(payload.as_ref()) },
    };

    ScenarioReport {
        name: case.name.clone(),
        arg: case.arg.clone(),
        outcome,
        elapsed: start.elapsed(),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        return (*message).to_string();
    }

    if let Some(message) = payload.downcast_ref::<String>() {
        return message.clone();
    }

    "unknown panic payload".into()
}
