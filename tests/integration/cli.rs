// SPDX-FileCopyrightText: 2025 Jason Pena <jasonpena@awkless.com>
// SPDX-License-Identifier: MIT

use assert_cmd::Command;
use predicates::str::contains;
use simple_test_case::test_case;

#[test_case(vec!["run", "tests/fixtures/suites/template.toml"], 0; "template passes")]
#[test_case(vec!["run", "--quiet", "tests/fixtures/suites/template.toml"], 0; "quiet run")]
#[test_case(vec!["run", "tests/fixtures/suites/failing.toml"], exitcode::SOFTWARE; "failing suite")]
#[test_case(vec!["run", "tests/fixtures/suites/failing.toml", "echo passes"], 0; "filter to passing case")]
#[test_case(vec!["run", "tests/fixtures/suites/no_target.toml"], exitcode::USAGE; "suite without target")]
#[test_case(vec!["run", "tests/fixtures/suites/missing.toml"], exitcode::CONFIG; "missing suite")]
#[test_case(vec!["run", "tests/fixtures/suites/unavailable_target.toml"], exitcode::IOERR; "unavailable target")]
#[test_case(vec!["run", "tests/fixtures/suites/failing.toml", "no*match"], exitcode::USAGE; "pattern selects nothing")]
#[test_case(vec!["run", "tests/fixtures/suites/failing.toml", "[1-"], exitcode::USAGE; "invalid pattern only")]
#[test_case(vec!["ls", "tests/fixtures/suites/no_target.toml"], 0; "list cases")]
#[test]
fn tablerun_exit_status(args: Vec<&str>, expect: i32) {
    Command::cargo_bin("tablerun")
        .unwrap()
        .env("NO_COLOR", "1")
        .args(args)
        .assert()
        .code(expect);
}

#[test]
fn tablerun_run_reports_failed_scenarios() {
    Command::cargo_bin("tablerun")
        .unwrap()
        .env("NO_COLOR", "1")
        .args(["run", "tests/fixtures/suites/failing.toml"])
        .assert()
        .stdout(contains("echo mismatch"))
        .stdout(contains("1 passed, 2 failed, 0 skipped"));
}
