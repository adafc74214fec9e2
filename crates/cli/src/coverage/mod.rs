// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Istanbul coverage summary model.
//!
//! Jest's `json-summary` reporter writes `coverage/coverage-summary.json`:
//!
//! ```json
//! {
//!   "total": { "lines": { "total": 10, "covered": 9, "skipped": 0, "pct": 90 }, ... },
//!   "/abs/path/src/game.js": { "statements": { ... }, "branches": { ... }, ... }
//! }
//! ```
//!
//! Shape is validated at the parse boundary: every entry must carry all
//! four metrics, each with a `pct`.

mod loader;

pub use loader::{CoverageError, load};

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer};

use crate::config::defaults::coverage::TOTAL_KEY;

/// The four metric kinds in a coverage summary, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MetricKind {
    Statements,
    Branches,
    Functions,
    Lines,
}

impl MetricKind {
    pub const ALL: [MetricKind; 4] = [
        MetricKind::Statements,
        MetricKind::Branches,
        MetricKind::Functions,
        MetricKind::Lines,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MetricKind::Statements => "Statements",
            MetricKind::Branches => "Branches",
            MetricKind::Functions => "Functions",
            MetricKind::Lines => "Lines",
        }
    }
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Coverage of a single metric.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CoverageMetric {
    #[serde(rename = "covered", default)]
    pub covered_count: u64,

    #[serde(rename = "total", default)]
    pub total_count: u64,

    #[serde(default)]
    pub skipped: u64,

    /// `None` when Istanbul reports `"Unknown"` (nothing to cover).
    #[serde(deserialize_with = "deserialize_pct")]
    pub pct: Option<f64>,
}

impl CoverageMetric {
    /// Build a metric from counts, deriving the percentage.
    pub fn from_counts(covered_count: u64, total_count: u64) -> Self {
        let mut metric = Self {
            covered_count,
            total_count,
            skipped: 0,
            pct: None,
        };
        metric.pct = Some(metric.percentage());
        metric
    }

    /// Build a metric that only carries a percentage.
    pub fn from_pct(pct: f64) -> Self {
        Self {
            covered_count: 0,
            total_count: 0,
            skipped: 0,
            pct: Some(pct),
        }
    }

    /// Percentage in 0..=100.
    ///
    /// Uses the reported `pct`; otherwise `covered / total * 100`, or 100
    /// when there is nothing to cover.
    pub fn percentage(&self) -> f64 {
        match self.pct {
            Some(pct) => pct,
            None if self.total_count > 0 => {
                self.covered_count as f64 / self.total_count as f64 * 100.0
            }
            None => 100.0,
        }
    }
}

/// Accepts a number, or the string `"Unknown"` Istanbul writes for empty files.
fn deserialize_pct<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawPct {
        Number(f64),
        Text(String),
    }

    match RawPct::deserialize(deserializer)? {
        RawPct::Number(n) => Ok(Some(n)),
        RawPct::Text(s) if s == "Unknown" => Ok(None),
        RawPct::Text(s) => Err(serde::de::Error::custom(format!(
            "expected a percentage, got \"{}\"",
            s
        ))),
    }
}

/// All four metrics for one file, or for the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct FileCoverage {
    pub statements: CoverageMetric,
    pub branches: CoverageMetric,
    pub functions: CoverageMetric,
    pub lines: CoverageMetric,
}

impl FileCoverage {
    /// Convenience constructor from four percentages.
    pub fn from_pcts(statements: f64, branches: f64, functions: f64, lines: f64) -> Self {
        Self {
            statements: CoverageMetric::from_pct(statements),
            branches: CoverageMetric::from_pct(branches),
            functions: CoverageMetric::from_pct(functions),
            lines: CoverageMetric::from_pct(lines),
        }
    }

    pub fn metric(&self, kind: MetricKind) -> &CoverageMetric {
        match kind {
            MetricKind::Statements => &self.statements,
            MetricKind::Branches => &self.branches,
            MetricKind::Functions => &self.functions,
            MetricKind::Lines => &self.lines,
        }
    }

    /// Percentages in [`MetricKind::ALL`] order.
    pub fn percentages(&self) -> [f64; 4] {
        MetricKind::ALL.map(|kind| self.metric(kind).percentage())
    }

    /// Lowest of the four percentages.
    pub fn min_percentage(&self) -> f64 {
        self.percentages().into_iter().fold(f64::INFINITY, f64::min)
    }

    /// Arithmetic mean of the four percentages.
    pub fn average(&self) -> f64 {
        self.percentages().iter().sum::<f64>() / MetricKind::ALL.len() as f64
    }

    /// True when every metric is at or above `threshold`.
    pub fn meets(&self, threshold: f64) -> bool {
        self.min_percentage() >= threshold
    }
}

/// A parsed coverage summary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageReport {
    /// The reserved aggregate record, if present.
    pub total: Option<FileCoverage>,
    /// Per-file records keyed by path, sorted.
    pub files: BTreeMap<String, FileCoverage>,
}

impl CoverageReport {
    /// Parse summary JSON, splitting off the aggregate record.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        let mut files: BTreeMap<String, FileCoverage> = serde_json::from_str(content)?;
        let total = files.remove(TOTAL_KEY);
        Ok(Self { total, files })
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
