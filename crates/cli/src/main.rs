// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use covreport::cli::{Cli, Command, RunArgs};
use covreport::config::{self, Config, Settings};
use covreport::discovery;
use covreport::error::ExitCode;
use covreport::verbose::VerboseLogger;

mod cmd_report;
mod cmd_run;

/// Environment variable holding the log filter (e.g. `COVREPORT_LOG=debug`).
const LOG_ENV: &str = "COVREPORT_LOG";

fn main() -> std::process::ExitCode {
    init_logging();
    let cli = Cli::parse();

    let result = match &cli.command {
        None => cmd_run::run(&cli, &RunArgs::default()),
        Some(Command::Run(args)) => cmd_run::run(&cli, args),
        Some(Command::Report) => cmd_report::run(&cli),
    };

    match result {
        Ok(code) => code.into(),
        Err(e) => {
            // stderr may already be closed (`covreport 2>&1 | head`).
            let _ = writeln!(std::io::stderr(), "error: {:#}", e);
            ExitCode::ConfigError.into()
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

/// Discover and load config, then merge command-line overrides.
pub(crate) fn resolve_settings(cli: &Cli, run: &RunArgs) -> anyhow::Result<Settings> {
    let cwd = std::env::current_dir().context("failed to read current directory")?;
    let explicit_root = cli.root.as_ref().map(|root| cwd.join(root));

    let config_path = match &cli.config {
        Some(path) => Some(cwd.join(path)),
        None => discovery::find_config(explicit_root.as_deref().unwrap_or(&cwd)),
    };
    let config = match &config_path {
        Some(path) => config::load_with_warnings(path)?,
        None => Config::default(),
    };

    let root = explicit_root
        .unwrap_or_else(|| discovery::project_root(config_path.as_deref(), &cwd));
    let settings = Settings::resolve(&config, &root, cli.overrides(run))?;
    tracing::debug!("resolved settings: {:?}", settings);

    let verbose = VerboseLogger::new(cli.verbose);
    verbose.section("Configuration");
    verbose.settings(&settings, config_path.as_deref());

    Ok(settings)
}
