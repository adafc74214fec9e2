// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report presentation and exit code policy.
//!
//! Test failures fail the run; coverage shortfalls only warn.

mod band;
mod summary;
mod text;

use std::io;
use std::path::PathBuf;

use termcolor::WriteColor;

use crate::coverage::{CoverageError, CoverageReport};
use crate::error::ExitCode;
use crate::runner::RunResult;

pub use band::{Band, Status, Thresholds, format_percentage};
pub use summary::{CoverageSummary, FileEntry, display_path};
pub use text::TextFormatter;

/// Renders a run and its coverage, then decides the exit code.
pub struct Presenter {
    thresholds: Thresholds,
    root: PathBuf,
    html_report: Option<PathBuf>,
}

impl Presenter {
    pub fn new(thresholds: Thresholds, root: impl Into<PathBuf>) -> Self {
        Self {
            thresholds,
            root: root.into(),
            html_report: None,
        }
    }

    /// Point readers at the HTML report after a loaded summary.
    pub fn with_html_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.html_report = Some(path.into());
        self
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Present a full run: test outcome, coverage section, closing verdict.
    ///
    /// Coverage is rendered whatever the test outcome, but never changes the
    /// exit code: a failing run returns [`ExitCode::Failure`], a passing run
    /// returns [`ExitCode::Success`].
    pub fn present(
        &self,
        out: &mut dyn WriteColor,
        run: &RunResult,
        coverage: &Result<CoverageReport, CoverageError>,
    ) -> io::Result<ExitCode> {
        let formatter = TextFormatter::new(&self.thresholds);
        formatter.write_run(out, run)?;

        let below_threshold = self.present_coverage(out, coverage)?;

        let exit = exit_code(run);
        if exit == ExitCode::Success && below_threshold {
            formatter.write_threshold_warning(out)?;
        }
        formatter.write_verdict(out, run)?;
        Ok(exit)
    }

    /// Present only the coverage section.
    ///
    /// Returns whether the aggregate is below the threshold.
    pub fn present_coverage(
        &self,
        out: &mut dyn WriteColor,
        coverage: &Result<CoverageReport, CoverageError>,
    ) -> io::Result<bool> {
        let formatter = TextFormatter::new(&self.thresholds);
        match coverage {
            Ok(report) => {
                let summary = CoverageSummary::new(report, &self.thresholds, &self.root);
                formatter.write_coverage(out, &summary)?;
                if let Some(html) = &self.html_report {
                    let shown = display_path(&html.to_string_lossy(), &self.root);
                    formatter.write_html_hint(out, &shown)?;
                }
                Ok(summary.below_threshold(&self.thresholds))
            }
            Err(err) => {
                formatter.write_coverage_error(out, err)?;
                Ok(false)
            }
        }
    }
}

/// Log a failure to write the report.
///
/// The exit code is already decided by then, so this never fails the run.
/// A closed pipe (`covreport | head`) is expected and stays silent. Returns
/// whether anything was logged.
pub fn log_output_error(err: &io::Error) -> bool {
    if err.kind() == io::ErrorKind::BrokenPipe {
        return false;
    }
    tracing::warn!("failed to write report: {}", err);
    true
}

/// Exit code for a run: only the test command's status matters.
pub fn exit_code(run: &RunResult) -> ExitCode {
    ExitCode::from_test_status(run.exit_code)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
