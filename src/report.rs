// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

//! Test run reporting.
//!
//! Gathers the outcome of every scenario of a run, such that they can be listed by name with their
//! pass or fail status. Failed scenarios carry the expected versus actual values, or the expected
//! but absent error.

use crate::runner::Outcome;

use anyhow::anyhow;
use beau_collector::BeauCollector as _;
use std::time::Duration;

/// Result of a single scenario.
#[derive(Clone, Debug)]
pub struct ScenarioReport {
    /// Name of test case that was executed.
    pub name: String,

    /// Argument given to function under test.
    pub arg: String,

    /// Verdict of scenario.
    pub outcome: Outcome,

    /// Time spent executing function under test.
    pub elapsed: Duration,
}

impl ScenarioReport {
    /// Convert scenario verdict into error if scenario failed.
    pub fn check(&self) -> anyhow::Result<()> {
        if self.outcome.is_passed() {
            return Ok(());
        }

        Err(anyhow!("scenario {:?} with arg {:?}: {}", self.name, self.arg, self.outcome))
    }
}

/// Ordered results of a full run.
#[derive(Clone, Default, Debug)]
pub struct RunReport {
    scenarios: Vec<ScenarioReport>,
    skipped: usize,
}

impl RunReport {
    /// Construct new empty run report.
    pub fn new() -> Self {
        RunReport::default()
    }

    pub(crate) fn push(&mut self, scenario: ScenarioReport) {
        self.scenarios.push(scenario);
    }

    pub(crate) fn skip(&mut self) {
        self.skipped += 1;
    }

    /// All executed scenarios in execution order.
    pub fn scenarios(&self) -> &[ScenarioReport] {
        &self.scenarios
    }

    /// Iterate through outcomes of executed scenarios in execution order.
    pub fn outcomes(&self) -> impl Iterator<Item = &Outcome> + '_ {
        self.scenarios.iter().map(|scenario| &scenario.outcome)
    }

    /// Iterate through failed scenarios only.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioReport> + '_ {
        self.scenarios.iter().filter(|scenario| !scenario.outcome.is_passed())
    }

    /// Number of executed scenarios.
    pub fn total(&self) -> usize {
        self.scenarios.len()
    }

    /// Number of passed scenarios.
    pub fn passed(&self) -> usize {
        self.total() - self.failed()
    }

    /// Number of failed scenarios.
    pub fn failed(&self) -> usize {
        self.failures().count()
    }

    /// Number of test cases that were filtered out.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Determine if every executed scenario passed.
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    /// Convert report into a single error listing every failed scenario.
    ///
    /// # Errors
    ///
    /// - Will fail if any scenario failed.
    ///     - All failures are reported in one-shot.
    pub fn check(&self) -> anyhow::Result<()> {
        self.scenarios.iter().map(ScenarioReport::check).bcollect::<Vec<()>>().map(|_| ())
    }

    /// Panic if any scenario failed.
    ///
    /// Meant to be called at the end of a `#[test]` function. The panic message contains the full
    /// report table.
    ///
    /// # Panics
    ///
    /// Will panic if any scenario failed.
    #[track_caller]
    pub fn assert_passed(&self) {
        if !self.is_success() {
            panic!("{self}\n{}", self.tablize());
        }
    }

    /// Render report as table with one row per executed scenario.
    pub fn tablize(&self) -> String {
        let mut builder = tabled::builder::Builder::new();
        builder.push_record(["scenario", "status", "detail"]);

        for scenario in &self.scenarios {
            let (status, detail) = match &scenario.outcome {
                Outcome::Passed => ("pass", format!("{:.2?}", scenario.elapsed)),
                outcome => ("FAIL", outcome.to_string()),
            };
            builder.push_record([scenario.name.clone(), status.into(), detail]);
        }

        let mut table = builder.build();
        table.with(tabled::settings::Style::ascii_rounded());
        table.to_string()
    }
}

impl std::fmt::Display for RunReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} passed, {} failed, {} skipped", self.passed(), self.failed(), self.skipped)
    }
}
