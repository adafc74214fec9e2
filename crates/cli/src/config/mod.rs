// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading and resolution.
//!
//! Values come from three layers, highest priority first:
//! CLI flags and environment variables, `covreport.toml`, built-in defaults.

pub mod defaults;

mod coverage;
mod runner;

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::runner::CommandSpec;

pub use coverage::CoverageConfig;
pub use runner::RunnerConfig;

/// Top-level sections recognized in `covreport.toml`.
const KNOWN_SECTIONS: &[&str] = &["version", "runner", "coverage"];

/// The only `version` this release understands.
const SUPPORTED_VERSION: u32 = 1;

/// Errors produced while loading or resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("coverage threshold must be between 0 and 100, got {0}")]
    ThresholdOutOfRange(u8),

    #[error("unsupported config version {0} (expected {SUPPORTED_VERSION})")]
    UnsupportedVersion(u32),

    #[error("test command is empty")]
    EmptyCommand,
}

/// Parsed `covreport.toml`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Config schema version (currently 1).
    pub version: Option<u32>,

    pub runner: RunnerConfig,

    pub coverage: CoverageConfig,
}

/// Parse config content. `path` is only used in error messages.
pub fn parse(content: &str, path: &Path) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate(&config)?;
    Ok(config)
}

/// Load config from a file, warning on unknown top-level sections.
pub fn load_with_warnings(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    for key in unknown_sections(&content) {
        eprintln!("warning: unknown key `{}` in {}", key, path.display());
    }
    parse(&content, path)
}

/// Top-level keys not understood by this version.
fn unknown_sections(content: &str) -> Vec<String> {
    let Ok(table) = content.parse::<toml::Table>() else {
        return Vec::new();
    };
    table
        .keys()
        .filter(|k| !KNOWN_SECTIONS.contains(&k.as_str()))
        .cloned()
        .collect()
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    if let Some(version) = config.version.filter(|v| *v != SUPPORTED_VERSION) {
        return Err(ConfigError::UnsupportedVersion(version));
    }
    if config.coverage.threshold > 100 {
        return Err(ConfigError::ThresholdOutOfRange(config.coverage.threshold));
    }
    if config.runner.command.is_empty() {
        return Err(ConfigError::EmptyCommand);
    }
    Ok(())
}

/// Values supplied on the command line (or via environment variables).
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub threshold: Option<u8>,
    pub coverage_file: Option<PathBuf>,
    /// Replaces the configured command when non-empty.
    pub command: Vec<String>,
    /// Forces capture mode on; the config file can still enable it.
    pub capture: bool,
}

/// Fully resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Project root. The test command runs here.
    pub root: PathBuf,
    /// Absolute path of the coverage summary.
    pub coverage_path: PathBuf,
    /// Minimum acceptable percentage for every metric.
    pub threshold: f64,
    pub command: CommandSpec,
    pub capture: bool,
}

impl Settings {
    /// Merge overrides on top of the config file for the given project root.
    pub fn resolve(
        config: &Config,
        root: &Path,
        overrides: Overrides,
    ) -> Result<Self, ConfigError> {
        let threshold = overrides.threshold.unwrap_or(config.coverage.threshold);
        if threshold > 100 {
            return Err(ConfigError::ThresholdOutOfRange(threshold));
        }

        let argv = if overrides.command.is_empty() {
            config.runner.command.clone()
        } else {
            overrides.command
        };
        let command = CommandSpec::from_argv(argv).ok_or(ConfigError::EmptyCommand)?;

        let coverage_file = overrides
            .coverage_file
            .unwrap_or_else(|| config.coverage.path.clone());
        let coverage_path = if coverage_file.is_absolute() {
            coverage_file
        } else {
            root.join(coverage_file)
        };

        Ok(Self {
            root: root.to_path_buf(),
            coverage_path,
            threshold: f64::from(threshold),
            command,
            capture: overrides.capture || config.runner.capture,
        })
    }

    /// Where Istanbul's HTML report sits next to the summary.
    pub fn html_report_path(&self) -> PathBuf {
        self.coverage_path
            .parent()
            .unwrap_or(&self.root)
            .join(defaults::coverage::HTML_REPORT)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
