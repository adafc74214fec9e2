//! Behavioral specs for configuration.
//!
//! Tests that covreport correctly handles:
//! - Values from covreport.toml
//! - CLI flags over the config file
//! - Invalid config (exit 2)

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > Threshold from covreport.toml is used
#[test]
fn config_threshold_is_used() {
    let project = Project::with_coverage(&[("total", pcts(75.0))]);
    project.config("version = 1\n\n[coverage]\nthreshold = 70\n");

    project
        .cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("Files with").not())
        .stdout(predicates::str::contains("Coverage below").not());
}

/// > CLI threshold overrides covreport.toml
#[test]
fn cli_threshold_overrides_config() {
    let project = Project::with_coverage(&[("total", pcts(75.0))]);
    project.config("[coverage]\nthreshold = 70\n");

    project
        .cmd()
        .args(["report", "-t", "80"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Coverage below 80% threshold"));
}

/// > Coverage path from covreport.toml is used
#[test]
fn config_coverage_path_is_used() {
    let project = Project::empty();
    project.config("[coverage]\npath = \"reports/cov.json\"\n");
    project.file("reports/cov.json", &summary_json(&[("total", pcts(99.0))]));

    project
        .cmd()
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("EXCELLENT"));
}

/// > Config is discovered from a subdirectory and sets the root
#[test]
fn config_is_discovered_from_subdirectory() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);
    project.config("version = 1\n");
    project.file("src/nested/.keep", "");

    project
        .cmd()
        .current_dir(project.path().join("src/nested"))
        .arg("report")
        .assert()
        .success()
        .stdout(predicates::str::contains("EXCELLENT"));
}

/// > Malformed config exits 2
#[test]
fn malformed_config_exits_2() {
    let project = Project::empty();
    project.config("[coverage\nthreshold = ");

    project
        .cmd()
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to parse"));
}

/// > Threshold above 100 in config exits 2
#[test]
fn config_threshold_out_of_range_exits_2() {
    let project = Project::empty();
    project.config("[coverage]\nthreshold = 120\n");

    project
        .cmd()
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("between 0 and 100"));
}

/// > Unknown top-level keys warn but do not fail
#[test]
fn unknown_config_key_warns() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);
    project.config("version = 1\nmystery = true\n");

    project
        .cmd()
        .arg("report")
        .assert()
        .success()
        .stderr(predicates::str::contains("unknown key `mystery`"));
}

/// > Explicit --config that does not exist exits 2
#[test]
fn missing_explicit_config_exits_2() {
    let project = Project::empty();

    project
        .cmd()
        .args(["--config", "nope.toml", "report"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to read"));
}

/// > --verbose prints the resolved settings to stderr
#[test]
fn verbose_prints_settings() {
    let project = Project::with_coverage(&[("total", pcts(95.0))]);

    project
        .cmd()
        .args(["report", "--verbose"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Threshold: 90%"))
        .stderr(predicates::str::contains("Coverage file: coverage/coverage-summary.json"));
}

/// > An unsupported config version exits 2
#[test]
fn unsupported_config_version_exits_2() {
    let project = Project::empty();
    project.config("version = 2\n");

    project
        .cmd()
        .arg("report")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 2"));
}
