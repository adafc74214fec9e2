// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use termcolor::ColorChoice;

use crate::color::ColorMode;
use crate::config::Overrides;

/// Runs a JavaScript test suite with coverage and reports the coverage summary
#[derive(Parser)]
#[command(name = "covreport")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "COVREPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Project root (default: directory of covreport.toml, else the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Minimum coverage percentage for every metric
    #[arg(
        short,
        long,
        global = true,
        env = "TEST_COVERAGE_THRESHOLD",
        value_name = "PCT",
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub threshold: Option<u8>,

    /// Coverage summary file, relative to the project root
    #[arg(long, global = true, value_name = "PATH")]
    pub coverage_file: Option<PathBuf>,

    /// Color output mode
    #[arg(long, global = true, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print resolved configuration to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the tests, then report coverage (default)
    Run(RunArgs),
    /// Report an existing coverage summary without running tests
    Report,
}

#[derive(clap::Args, Default)]
pub struct RunArgs {
    /// Capture test output instead of streaming it
    #[arg(long)]
    pub capture: bool,

    /// Test command to run instead of the configured one
    #[arg(last = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    pub fn color_choice(&self) -> ColorChoice {
        self.color.resolve(self.no_color)
    }

    /// Config overrides from global flags plus the run arguments.
    pub fn overrides(&self, run: &RunArgs) -> Overrides {
        Overrides {
            threshold: self.threshold,
            coverage_file: self.coverage_file.clone(),
            command: run.command.clone(),
            capture: run.capture,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
