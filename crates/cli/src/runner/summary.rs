// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Jest result summary parsing.

use std::sync::LazyLock;

use regex::Regex;

/// Regex for one `N kind` entry on Jest's `Tests:` line.
#[allow(clippy::expect_used)]
static COUNT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+) (failed|skipped|todo|passed|total)").expect("valid regex pattern")
});

/// Test counts from Jest's summary line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TestCounts {
    pub passed: u32,
    pub failed: u32,
    /// Skipped and todo tests.
    pub skipped: u32,
    pub total: u32,
}

impl TestCounts {
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

/// Parse the last `Tests:` line in Jest output.
///
/// ```text
/// Tests:       1 failed, 2 skipped, 5 passed, 8 total
/// ```
///
/// Returns `None` when no such line (or no `total`) is present.
pub fn parse_jest_summary(output: &str) -> Option<TestCounts> {
    let line = output
        .lines()
        .rev()
        .find(|l| l.contains("Tests:"))?;

    let mut counts = TestCounts::default();
    let mut saw_total = false;
    for cap in COUNT_PATTERN.captures_iter(line) {
        let Ok(n) = cap[1].parse::<u32>() else {
            continue;
        };
        match &cap[2] {
            "passed" => counts.passed = n,
            "failed" => counts.failed = n,
            "skipped" | "todo" => counts.skipped += n,
            "total" => {
                counts.total = n;
                saw_total = true;
            }
            _ => {}
        }
    }
    saw_total.then_some(counts)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
