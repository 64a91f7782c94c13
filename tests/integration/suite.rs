// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use anyhow::Result;
use simple_test_case::dir_cases;
use tablerun::{suite::Suite, target::CommandTarget, Runner};

#[dir_cases("tests/fixtures/suites")]
#[test]
fn suite_fixture_parses(case: &str, content: &str) -> Result<()> {
    let from_str: Suite = content.parse()?;
    let loaded = Suite::load(case)?;
    pretty_assertions::assert_eq!(from_str, loaded);
    assert!(!loaded.cases.is_empty());
    Ok(())
}

#[dir_cases("tests/fixtures/invalid_suites")]
#[test]
fn invalid_suite_fixture_rejected(_: &str, content: &str) {
    let result = content.parse::<Suite>();
    assert!(result.is_err());
}

#[test]
fn template_suite_runs_against_target() -> Result<()> {
    let suite = Suite::load("tests/fixtures/suites/template.toml")?;
    let target = CommandTarget::new(suite.target.as_ref().expect("template has target"))?;
    let report = Runner::new().run(&suite.cases, |arg| target.call(arg));
    report.check()?;
    assert_eq!(report.passed(), 2);
    Ok(())
}

#[test]
fn failing_suite_reports_every_failure() -> Result<()> {
    let suite = Suite::load("tests/fixtures/suites/failing.toml")?;
    let target = CommandTarget::new(suite.target.as_ref().expect("failing has target"))?;
    let report = Runner::new().run(&suite.cases, |arg| target.call(arg));
    assert_eq!(report.passed(), 1);
    assert_eq!(report.failed(), 2);

    let failed = report.failures().map(|s| s.name.as_str()).collect::<Vec<_>>();
    pretty_assertions::assert_eq!(failed, vec!["echo mismatch", "echo never fails"]);
    Ok(())
}
