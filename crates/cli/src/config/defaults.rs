// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! All default values are documented here for easy reference.
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Config file name searched for during discovery.
pub const CONFIG_FILE: &str = "covreport.toml";

/// Default test command settings.
pub mod runner {
    /// Default test command (`npm run test:coverage`).
    pub fn command() -> Vec<String> {
        vec!["npm".to_string(), "run".to_string(), "test:coverage".to_string()]
    }
}

/// Default coverage thresholds and file locations.
pub mod coverage {
    /// Summary written by Jest's `json-summary` reporter, relative to the project root.
    pub const SUMMARY_PATH: &str = "coverage/coverage-summary.json";

    /// Default minimum percentage for every metric (90).
    pub const THRESHOLD: u8 = 90;

    /// Width of the warn band below the threshold, in percentage points (10).
    pub const WARN_MARGIN: f64 = 10.0;

    /// Istanbul's `lcov` HTML report, relative to the summary's directory.
    pub const HTML_REPORT: &str = "lcov-report/index.html";

    /// Key reserved for the aggregate record in the summary file.
    pub const TOTAL_KEY: &str = "total";
}

/// Overall status cut-offs applied to the mean of the aggregate metrics.
pub mod status {
    /// Average at or above this is EXCELLENT (90).
    pub const EXCELLENT: f64 = 90.0;

    /// Average at or above this is GOOD (80).
    pub const GOOD: f64 = 80.0;
}
