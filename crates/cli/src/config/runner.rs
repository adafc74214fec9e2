// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test command configuration.

use serde::Deserialize;

use super::defaults;

/// `[runner]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Program followed by its arguments.
    /// Example: ["npm", "test", "--", "--coverage"]
    pub command: Vec<String>,

    /// Capture child output instead of streaming it to the terminal.
    pub capture: bool,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            command: Self::default_command(),
            capture: false,
        }
    }
}

impl RunnerConfig {
    pub(super) fn default_command() -> Vec<String> {
        defaults::runner::command()
    }
}
