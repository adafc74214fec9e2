// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report command implementation.

use std::io::Write;

use termcolor::StandardStream;

use covreport::cli::{Cli, RunArgs};
use covreport::coverage;
use covreport::error::ExitCode;
use covreport::report::{self, Presenter, TextFormatter, Thresholds};

use crate::resolve_settings;

/// Report an existing coverage summary. Always advisory.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let settings = resolve_settings(cli, &RunArgs::default())?;
    let thresholds = Thresholds::new(settings.threshold);
    let coverage = coverage::load(&settings.coverage_path);

    let mut presenter = Presenter::new(thresholds, &settings.root);
    let html_report = settings.html_report_path();
    if html_report.is_file() {
        presenter = presenter.with_html_report(html_report);
    }

    let mut out = StandardStream::stdout(cli.color_choice());
    let written = presenter
        .present_coverage(&mut out, &coverage)
        .and_then(|below| {
            if below {
                TextFormatter::new(presenter.thresholds()).write_threshold_warning(&mut out)?;
            }
            out.flush()
        });
    if let Err(err) = written {
        report::log_output_error(&err);
    }
    Ok(ExitCode::Success)
}
