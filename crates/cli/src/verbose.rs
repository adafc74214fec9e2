// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose output logger for diagnostic information.
//!
//! Writes diagnostic output to stderr. Enabled with `--verbose`.

use std::path::Path;

use crate::config::Settings;

/// Verbose output logger. Writes to stderr when enabled.
/// All output is conditional on verbose mode being enabled.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Print a verbose line to stderr (indented as content under a section).
    pub fn log(&self, msg: &str) {
        if self.enabled {
            eprintln!("  {}", msg);
        }
    }

    /// Print a verbose section header.
    pub fn section(&self, title: &str) {
        if self.enabled {
            eprintln!("\n{}:", title);
        }
    }

    /// Print the resolved settings.
    pub fn settings(&self, settings: &Settings, config_path: Option<&Path>) {
        if !self.enabled {
            return;
        }
        for line in settings_lines(settings, config_path) {
            self.log(&line);
        }
    }
}

/// Lines describing resolved settings, relative to the project root where possible.
pub fn settings_lines(settings: &Settings, config_path: Option<&Path>) -> Vec<String> {
    let config = match config_path {
        Some(path) => {
            let display = path.strip_prefix(&settings.root).unwrap_or(path);
            display.display().to_string()
        }
        None => "(defaults)".to_string(),
    };
    let coverage = settings
        .coverage_path
        .strip_prefix(&settings.root)
        .unwrap_or(&settings.coverage_path);

    vec![
        format!("Config: {}", config),
        format!("Root: {}", settings.root.display()),
        format!("Command: {}", settings.command),
        format!("Capture: {}", settings.capture),
        format!("Coverage file: {}", coverage.display()),
        format!("Threshold: {}%", settings.threshold),
    ]
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
