// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io;
use std::path::Path;

use termcolor::{ColorSpec, WriteColor};

use crate::color::scheme;
use crate::coverage::{CoverageError, FileCoverage, MetricKind};
use crate::runner::{CommandSpec, RunResult};

use super::{CoverageSummary, Thresholds};

/// Width of the `=` rules framing each section.
const RULE_WIDTH: usize = 70;

/// Marker appended to files with low coverage.
const LOW_MARKER: &str = "⚠";

/// Stderr lines containing this are dropped from captured output.
const DEPRECATION_NOISE: &str = "DeprecationWarning";

/// Text format report formatter.
pub struct TextFormatter<'a> {
    thresholds: &'a Thresholds,
}

impl<'a> TextFormatter<'a> {
    pub fn new(thresholds: &'a Thresholds) -> Self {
        Self { thresholds }
    }

    /// Opening lines printed before the test command starts.
    pub fn write_banner(
        &self,
        out: &mut dyn WriteColor,
        root: &Path,
        command: &CommandSpec,
    ) -> io::Result<()> {
        styled(out, &scheme::header(), "covreport")?;
        writeln!(out)?;
        writeln!(out, "Working directory: {}", root.display())?;
        writeln!(
            out,
            "Running `{}` with {}% coverage threshold...",
            command,
            self.threshold()
        )?;
        writeln!(out)
    }

    /// Launch errors, captured output, and parsed test counts.
    pub fn write_run(&self, out: &mut dyn WriteColor, run: &RunResult) -> io::Result<()> {
        if let Some(err) = &run.error {
            styled(out, &scheme::error(), &format!("Error: {}", err))?;
            writeln!(out)?;
        }

        if let Some(output) = &run.captured_output {
            self.write_section_title(out, "Test Output")?;
            if !output.stdout.trim().is_empty() {
                writeln!(out, "{}", output.stdout.trim_end())?;
            }
            let errors = filter_stderr(&output.stderr);
            if !errors.is_empty() {
                writeln!(out)?;
                styled(out, &scheme::warning(), "Errors:")?;
                writeln!(out)?;
                writeln!(out, "{}", errors)?;
            }
        }

        if let Some(counts) = run.test_counts() {
            writeln!(out)?;
            styled(out, &scheme::label(), "Tests:")?;
            writeln!(
                out,
                " {} passed, {} failed, {} skipped, {} total",
                counts.passed, counts.failed, counts.skipped, counts.total
            )?;
        }
        Ok(())
    }

    /// The coverage summary section.
    pub fn write_coverage(
        &self,
        out: &mut dyn WriteColor,
        summary: &CoverageSummary<'_>,
    ) -> io::Result<()> {
        self.write_section_title(out, "Coverage Summary")?;

        if let Some(total) = summary.total {
            styled(out, &scheme::label(), "Overall Coverage:")?;
            writeln!(out)?;
            self.write_file(out, "Total", total, false)?;
        }

        if !summary.low.is_empty() {
            let heading = format!("Files with Low Coverage (<{}%):", self.threshold());
            styled(out, &scheme::low_heading(), &heading)?;
            writeln!(out)?;
            writeln!(out)?;
            for entry in &summary.low {
                self.write_file(out, &entry.path, entry.coverage, true)?;
            }
        }

        if !summary.good.is_empty() {
            let heading = format!("Files with Good Coverage (≥{}%):", self.threshold());
            styled(out, &scheme::good_heading(), &heading)?;
            writeln!(out)?;
            writeln!(out)?;
            for entry in &summary.good {
                self.write_file(out, &entry.path, entry.coverage, false)?;
            }
        }

        self.write_rule(out)?;
        styled(out, &scheme::label(), "Summary:")?;
        writeln!(out)?;
        writeln!(out, "  Total files: {}", summary.file_count())?;
        write!(out, "  ")?;
        styled(
            out,
            &scheme::success(),
            &format!("Good coverage: {}", summary.good.len()),
        )?;
        writeln!(out)?;
        write!(out, "  ")?;
        styled(
            out,
            &scheme::error(),
            &format!("Low coverage: {}", summary.low.len()),
        )?;
        writeln!(out)?;

        if let (Some(status), Some(average)) = (summary.status, summary.average) {
            write!(out, "  Overall status: ")?;
            styled(out, &scheme::status(status), status.label())?;
            writeln!(out, " ({:.2}%)", average)?;
        }
        self.write_rule(out)?;
        writeln!(out)
    }

    /// Pointer to the browsable report written next to the summary.
    pub fn write_html_hint(&self, out: &mut dyn WriteColor, path: &str) -> io::Result<()> {
        writeln!(out, "Open {} in a browser for the detailed view", path)?;
        writeln!(out)
    }

    /// Diagnostic shown in place of the coverage section.
    pub fn write_coverage_error(
        &self,
        out: &mut dyn WriteColor,
        err: &CoverageError,
    ) -> io::Result<()> {
        writeln!(out)?;
        if err.is_missing() {
            styled(out, &scheme::warning(), &format!("Warning: {}", err))?;
        } else {
            styled(out, &scheme::error(), &format!("Error: {}", err))?;
        }
        writeln!(out)?;
        writeln!(out)
    }

    /// Advisory printed when a passing run has low aggregate coverage.
    pub fn write_threshold_warning(&self, out: &mut dyn WriteColor) -> io::Result<()> {
        styled(
            out,
            &scheme::warning(),
            &format!("Warning: Coverage below {}% threshold", self.threshold()),
        )?;
        writeln!(out)?;
        writeln!(out, "Consider adding more tests to improve coverage")
    }

    /// Final pass/fail line.
    pub fn write_verdict(&self, out: &mut dyn WriteColor, run: &RunResult) -> io::Result<()> {
        if run.passed() {
            styled(out, &scheme::success(), "All tests passed! ✓")?;
        } else {
            styled(
                out,
                &scheme::error(),
                &format!("Tests failed with exit code {}", run.exit_code),
            )?;
        }
        writeln!(out)
    }

    fn write_file(
        &self,
        out: &mut dyn WriteColor,
        label: &str,
        coverage: &FileCoverage,
        low: bool,
    ) -> io::Result<()> {
        write!(out, "  ")?;
        styled(out, &scheme::path(), label)?;
        if low {
            write!(out, " ")?;
            styled(out, &scheme::error(), LOW_MARKER)?;
        }
        writeln!(out)?;

        for kind in MetricKind::ALL {
            let (band, text) = self.thresholds.format(coverage.metric(kind).percentage());
            write!(out, "    {:<11}: ", kind.label())?;
            styled(out, &scheme::band(band), &text)?;
            writeln!(out)?;
        }
        writeln!(out)
    }

    fn write_section_title(&self, out: &mut dyn WriteColor, title: &str) -> io::Result<()> {
        writeln!(out)?;
        self.write_rule(out)?;
        styled(out, &scheme::header(), title)?;
        writeln!(out)?;
        self.write_rule(out)?;
        writeln!(out)
    }

    fn write_rule(&self, out: &mut dyn WriteColor) -> io::Result<()> {
        styled(out, &scheme::header(), &"=".repeat(RULE_WIDTH))?;
        writeln!(out)
    }

    /// Threshold as printed in headings (`90`, `87.5`).
    fn threshold(&self) -> f64 {
        self.thresholds.minimum
    }
}

/// Write `text` in `spec`, then reset.
fn styled(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{}", text)?;
    out.reset()
}

/// Drop deprecation noise from captured stderr.
fn filter_stderr(stderr: &str) -> String {
    stderr
        .lines()
        .filter(|line| !line.contains(DEPRECATION_NOISE))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
