// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Run command implementation.

use std::io::Write;

use termcolor::StandardStream;

use covreport::cli::{Cli, RunArgs};
use covreport::coverage;
use covreport::error::ExitCode;
use covreport::report::{self, Presenter, TextFormatter, Thresholds};
use covreport::runner::TestRunner;

use crate::resolve_settings;

/// Run the tests, then report coverage.
///
/// Only configuration problems are errors. Once the tests have run, their
/// status decides the exit code even if the report cannot be written.
pub fn run(cli: &Cli, args: &RunArgs) -> anyhow::Result<ExitCode> {
    let settings = resolve_settings(cli, args)?;
    let thresholds = Thresholds::new(settings.threshold);
    let html_report = settings.html_report_path();
    let runner = TestRunner::new(settings.command, &settings.root, settings.capture);

    let mut out = StandardStream::stdout(cli.color_choice());
    // Streamed child output must land after the banner.
    let banner = TextFormatter::new(&thresholds)
        .write_banner(&mut out, &settings.root, runner.command())
        .and_then(|()| out.flush());
    if let Err(err) = banner {
        report::log_output_error(&err);
    }

    let result = runner.run();
    let code = report::exit_code(&result);
    let coverage = coverage::load(&settings.coverage_path);

    let mut presenter = Presenter::new(thresholds, settings.root);
    if html_report.is_file() {
        presenter = presenter.with_html_report(html_report);
    }
    let written = presenter
        .present(&mut out, &result, &coverage)
        .and_then(|_| out.flush());
    if let Err(err) = written {
        report::log_output_error(&err);
    }
    Ok(code)
}
