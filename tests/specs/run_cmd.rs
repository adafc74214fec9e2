//! Behavioral specs for `covreport run`.
//!
//! Tests that covreport correctly handles:
//! - Exit codes driven by the test command
//! - Coverage shortfalls as warnings only
//! - Missing programs and coverage files
//! - Captured output and Jest counts

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// EXIT CODE SPECS
// =============================================================================

/// > Passing tests with good coverage exit 0
#[test]
fn passing_run_with_good_coverage_succeeds() {
    let project = Project::with_coverage(&[("total", pcts(95.0)), ("src/app.js", pcts(95.0))]);

    project
        .run_sh("exit 0")
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage Summary"))
        .stdout(predicates::str::contains("Overall status: EXCELLENT (95.00%)"))
        .stdout(predicates::str::contains("All tests passed! ✓"))
        .stdout(predicates::str::contains("Coverage below").not());
}

/// > Low coverage warns but still exits 0
#[test]
fn low_coverage_warns_without_failing() {
    let project = Project::with_coverage(&[
        ("total", pcts(70.0)),
        ("src/weak.js", pcts(40.0)),
        ("src/strong.js", pcts(100.0)),
    ]);

    project
        .run_sh("exit 0")
        .assert()
        .success()
        .stdout(predicates::str::contains("Files with Low Coverage (<90%):"))
        .stdout(predicates::str::contains("src/weak.js ⚠"))
        .stdout(predicates::str::contains("Overall status: NEEDS IMPROVEMENT"))
        .stdout(predicates::str::contains("Warning: Coverage below 90% threshold"))
        .stdout(predicates::str::contains("All tests passed! ✓"));
}

/// > Low-coverage files are listed before good ones
#[test]
fn low_coverage_files_come_first() {
    let project = Project::with_coverage(&[
        ("total", pcts(70.0)),
        ("src/a_good.js", pcts(100.0)),
        ("src/z_low.js", pcts(40.0)),
    ]);

    let output = project.run_sh("exit 0").output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);

    let low = stdout.find("src/z_low.js").unwrap();
    let good = stdout.find("src/a_good.js").unwrap();
    assert!(low < good, "low file should be listed first:\n{}", stdout);
}

/// > Failing tests exit 1 and still show coverage
#[test]
fn failing_tests_exit_1() {
    let project = Project::with_coverage(&[("total", pcts(50.0))]);

    project
        .run_sh("exit 3")
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Coverage Summary"))
        .stdout(predicates::str::contains("Tests failed with exit code 3"))
        .stdout(predicates::str::contains("Coverage below").not());
}

/// > A missing test program is reported and exits 1
#[test]
fn missing_program_exits_1() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);

    project
        .cmd()
        .args(["run", "--", "covreport-no-such-program"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains(
            "covreport-no-such-program not found",
        ));
}

/// > The test command runs in the project root
#[test]
fn command_runs_in_project_root() {
    let project = Project::empty();
    let elsewhere = tempfile::TempDir::new().unwrap();

    covreport_cmd()
        .current_dir(elsewhere.path())
        .arg("--root")
        .arg(project.path())
        .args(["run", "--", "sh", "-c", "touch ran-here"])
        .assert()
        .success();

    assert!(project.path().join("ran-here").exists());
}

// =============================================================================
// COVERAGE FILE SPECS
// =============================================================================

/// > Missing coverage summary only warns
#[test]
fn missing_coverage_file_warns() {
    let project = Project::empty();

    project
        .run_sh("exit 0")
        .assert()
        .success()
        .stdout(predicates::str::contains("Warning: Coverage file not found at"))
        .stdout(predicates::str::contains("All tests passed! ✓"));
}

/// > Invalid coverage JSON is an error but does not change the exit code
#[test]
fn invalid_coverage_json_reports_error() {
    let project = Project::empty();
    project.file("coverage/coverage-summary.json", "{ not json");

    project
        .run_sh("exit 0")
        .assert()
        .success()
        .stdout(predicates::str::contains("Error: Invalid JSON in coverage file"));
}

/// > Coverage written by the test command is picked up
#[test]
fn coverage_written_by_command_is_reported() {
    let project = Project::empty();
    let json = summary_json(&[("total", pcts(85.0))]);
    let script = format!(
        "mkdir -p coverage && printf '%s' '{}' > coverage/coverage-summary.json",
        json
    );

    project
        .run_sh(&script)
        .assert()
        .success()
        .stdout(predicates::str::contains("Overall status: GOOD (85.00%)"));
}

// =============================================================================
// THRESHOLD SPECS
// =============================================================================

/// > TEST_COVERAGE_THRESHOLD sets the threshold
#[test]
fn threshold_env_is_honored() {
    let project = Project::with_coverage(&[("total", pcts(75.0))]);

    project
        .run_sh("exit 0")
        .env("TEST_COVERAGE_THRESHOLD", "70")
        .assert()
        .success()
        .stdout(predicates::str::contains("with 70% coverage threshold"))
        .stdout(predicates::str::contains("Coverage below").not());
}

/// > --threshold wins over the environment
#[test]
fn threshold_flag_overrides_env() {
    let project = Project::with_coverage(&[("total", pcts(75.0))]);

    project
        .cmd()
        .env("TEST_COVERAGE_THRESHOLD", "70")
        .args(["--threshold", "80", "run", "--", "sh", "-c", "exit 0"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Warning: Coverage below 80% threshold"));
}

// =============================================================================
// CAPTURE SPECS
// =============================================================================

/// > Captured output is echoed with Jest counts and filtered stderr
#[test]
fn capture_reports_test_counts() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);
    // Kept in a file so the noise never appears in the echoed command line.
    project.file(
        "noisy-tests.sh",
        "echo 'Tests:       1 failed, 4 passed, 5 total' >&2\n\
         echo '(node:1) DeprecationWarning: old api' >&2\n\
         echo 'real problem' >&2\n\
         exit 1\n",
    );

    project
        .cmd()
        .args(["run", "--capture", "--", "sh", "noisy-tests.sh"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Test Output"))
        .stdout(predicates::str::contains("Tests: 4 passed, 1 failed, 0 skipped, 5 total"))
        .stdout(predicates::str::contains("real problem"))
        .stdout(predicates::str::contains("DeprecationWarning").not());
}

// =============================================================================
// OUTPUT FAILURE SPECS
// =============================================================================

/// > A report that cannot be written keeps the test-derived exit code
#[cfg(target_os = "linux")]
#[test]
fn unwritable_stdout_keeps_failing_exit_code() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);
    let full = std::fs::OpenOptions::new().write(true).open("/dev/full").unwrap();

    project
        .run_sh("exit 1")
        .stdout(full)
        .assert()
        .code(1);
}

/// > A report that cannot be written keeps a passing exit code
#[cfg(target_os = "linux")]
#[test]
fn unwritable_stdout_keeps_passing_exit_code() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);
    let full = std::fs::OpenOptions::new().write(true).open("/dev/full").unwrap();

    project
        .run_sh("exit 0")
        .stdout(full)
        .assert()
        .success();
}

/// > The HTML report is pointed to when Istanbul wrote one
#[test]
fn html_report_hint_when_present() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);
    project.file("coverage/lcov-report/index.html", "<html></html>");

    project
        .run_sh("exit 0")
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Open coverage/lcov-report/index.html in a browser",
        ));
}

/// > No HTML pointer without an HTML report
#[test]
fn no_html_report_hint_when_absent() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);

    project
        .run_sh("exit 0")
        .assert()
        .success()
        .stdout(predicates::str::contains("lcov-report").not());
}
