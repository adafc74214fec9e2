// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage summary analysis: partitioning and overall status.

use std::path::Path;

use crate::coverage::{CoverageReport, FileCoverage};

use super::{Status, Thresholds};

/// A per-file entry ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct FileEntry<'a> {
    /// Path relative to the project root when it lies beneath it.
    pub path: String,
    pub coverage: &'a FileCoverage,
}

/// Result of analyzing a coverage report against the thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageSummary<'a> {
    pub total: Option<&'a FileCoverage>,
    /// Files with any metric below the threshold, in path order.
    pub low: Vec<FileEntry<'a>>,
    /// Files with every metric at or above the threshold, in path order.
    pub good: Vec<FileEntry<'a>>,
    /// Mean of the aggregate's four percentages.
    pub average: Option<f64>,
    pub status: Option<Status>,
}

impl<'a> CoverageSummary<'a> {
    pub fn new(report: &'a CoverageReport, thresholds: &Thresholds, root: &Path) -> Self {
        let (low, good): (Vec<_>, Vec<_>) = report
            .files
            .iter()
            .map(|(path, coverage)| FileEntry {
                path: display_path(path, root),
                coverage,
            })
            .partition(|entry| !entry.coverage.meets(thresholds.minimum));

        let total = report.total.as_ref();
        let average = total.map(FileCoverage::average);

        Self {
            total,
            low,
            good,
            average,
            status: average.map(Status::from_average),
        }
    }

    pub fn file_count(&self) -> usize {
        self.low.len() + self.good.len()
    }

    /// True when the aggregate has any metric below the threshold.
    pub fn below_threshold(&self, thresholds: &Thresholds) -> bool {
        self.total.is_some_and(|t| !t.meets(thresholds.minimum))
    }
}

/// Show `path` relative to `root` when possible.
pub fn display_path(path: &str, root: &Path) -> String {
    match Path::new(path).strip_prefix(root) {
        Ok(relative) if !relative.as_os_str().is_empty() => relative.display().to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
