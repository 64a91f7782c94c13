// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use crate::{template_cases, template_function};

use pretty_assertions::assert_eq as pretty_assert_eq;
use simple_test_case::test_case;
use std::cell::RefCell;
use tablerun::{CaseTable, Outcome, Runner, TestCase};

#[test]
fn template_scenarios_pass() {
    Runner::new().run(&template_cases(), template_function).assert_passed();
}

#[test_case(TestCase::want("valid gives result", "valid", "result"), Outcome::Passed; "valid input")]
#[test_case(TestCase::want_err("invalid gives error", "invalid"), Outcome::Passed; "invalid input")]
#[test_case(
    TestCase::want_err("valid is no error", "valid"),
    Outcome::MissingError { got: "result".into() };
    "valid input expecting error"
)]
#[test_case(
    TestCase::want("invalid is no result", "invalid", "result"),
    Outcome::UnexpectedError { error: "invalid argument \"invalid\"".into() };
    "invalid input expecting result"
)]
#[test]
fn single_scenario_outcome(case: TestCase, expect: Outcome) {
    let report = Runner::new().run(&CaseTable::from(vec![case]), template_function);
    pretty_assert_eq!(report.outcomes().cloned().collect::<Vec<_>>(), vec![expect]);
}

#[test]
fn rerun_yields_identical_outcomes() {
    let cases = CaseTable::from(vec![
        TestCase::want("pass", "valid", "result"),
        TestCase::want("mismatch", "valid", "other"),
        TestCase::want_err("missing error", "valid"),
        TestCase::want_err("error", "invalid"),
    ]);

    let runner = Runner::new();
    let first = runner.run(&cases, template_function);
    let second = runner.run(&cases, template_function);
    pretty_assert_eq!(
        first.outcomes().collect::<Vec<_>>(),
        second.outcomes().collect::<Vec<_>>()
    );
}

#[test]
fn outcome_does_not_depend_on_order() {
    let cases = vec![
        TestCase::want("pass", "valid", "result"),
        TestCase::want("mismatch", "valid", "other"),
        TestCase::want_err("error", "invalid"),
    ];
    let reversed = cases.iter().rev().cloned().collect::<CaseTable>();

    let forward = Runner::new().run(&CaseTable::from(cases), template_function);
    let backward = Runner::new().run(&reversed, template_function);

    for scenario in forward.scenarios() {
        let other = backward
            .scenarios()
            .iter()
            .find(|other| other.name == scenario.name)
            .expect("scenario ran in both orders");
        pretty_assert_eq!(scenario.outcome, other.outcome);
    }
}

#[test]
fn scenarios_execute_in_declaration_order() {
    let calls = RefCell::new(Vec::new());
    let cases: CaseTable = ["3", "1", "2"]
        .into_iter()
        .map(|arg| TestCase::want(format!("case {arg}"), arg, arg))
        .collect();

    let report = Runner::new().run(&cases, |arg: &str| -> Result<String, String> {
        calls.borrow_mut().push(arg.to_string());
        Ok(arg.to_string())
    });

    assert!(report.is_success());
    pretty_assert_eq!(calls.into_inner(), vec!["3", "1", "2"]);
}

#[test]
fn filtered_run_skips_unselected_cases() {
    let report = Runner::new().filter(["success*"]).run(&template_cases(), template_function);
    assert_eq!(report.total(), 1);
    assert_eq!(report.skipped(), 1);
    assert!(report.is_success());
}
