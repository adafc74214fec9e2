// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage summary configuration.

use std::path::PathBuf;

use serde::Deserialize;

use super::defaults;

/// `[coverage]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Summary file, relative to the project root unless absolute.
    pub path: PathBuf,

    /// Minimum percentage applied to all four metric kinds.
    pub threshold: u8,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            threshold: defaults::coverage::THRESHOLD,
        }
    }
}

impl CoverageConfig {
    pub(super) fn default_path() -> PathBuf {
        PathBuf::from(defaults::coverage::SUMMARY_PATH)
    }
}
