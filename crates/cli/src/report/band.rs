// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Threshold classification of coverage percentages.

use crate::config::defaults;

/// Semantic band of a single percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    /// At or above the threshold.
    Good,
    /// Below the threshold but within the warn margin.
    Warn,
    /// More than the warn margin below the threshold.
    Low,
}

impl Band {
    /// Whether this band meets the threshold.
    pub fn is_acceptable(self) -> bool {
        self == Band::Good
    }
}

/// Band boundaries derived from a single minimum threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub minimum: f64,
    pub warn_margin: f64,
}

impl Thresholds {
    pub fn new(minimum: f64) -> Self {
        Self {
            minimum,
            warn_margin: defaults::coverage::WARN_MARGIN,
        }
    }

    /// Classify `pct`. Exactly at the threshold counts as meeting it.
    pub fn classify(&self, pct: f64) -> Band {
        if pct >= self.minimum {
            Band::Good
        } else if pct >= self.minimum - self.warn_margin {
            Band::Warn
        } else {
            Band::Low
        }
    }

    /// Band plus fixed-width display text, e.g. `" 85.00%"`.
    pub fn format(&self, pct: f64) -> (Band, String) {
        (self.classify(pct), format_percentage(pct))
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(f64::from(defaults::coverage::THRESHOLD))
    }
}

/// Right-aligned percentage with two decimals.
pub fn format_percentage(pct: f64) -> String {
    format!("{:6.2}%", pct)
}

/// Overall status derived from the mean of the aggregate metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Excellent,
    Good,
    NeedsImprovement,
}

impl Status {
    pub fn from_average(average: f64) -> Self {
        if average >= defaults::status::EXCELLENT {
            Status::Excellent
        } else if average >= defaults::status::GOOD {
            Status::Good
        } else {
            Status::NeedsImprovement
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::Excellent => "EXCELLENT",
            Status::Good => "GOOD",
            Status::NeedsImprovement => "NEEDS IMPROVEMENT",
        }
    }
}

#[cfg(test)]
#[path = "band_tests.rs"]
mod tests;
