// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Coverage summary loading.
//!
//! A missing or malformed summary is an expected state (tests not run,
//! coverage disabled), so [`load`] reports it as a [`CoverageError`] value
//! for display rather than aborting.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::CoverageReport;

/// Why no coverage report is available.
#[derive(Debug, Error)]
pub enum CoverageError {
    #[error("Coverage file not found at {}", .path.display())]
    Missing { path: PathBuf },

    #[error("Invalid JSON in coverage file {}: {source}", .path.display())]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Error reading coverage file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CoverageError {
    /// The file simply does not exist (advisory, not a defect).
    pub fn is_missing(&self) -> bool {
        matches!(self, CoverageError::Missing { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            CoverageError::Missing { path }
            | CoverageError::Invalid { path, .. }
            | CoverageError::Unreadable { path, .. } => path,
        }
    }
}

/// Load and validate the coverage summary at `path`.
pub fn load(path: &Path) -> Result<CoverageReport, CoverageError> {
    tracing::debug!("loading coverage summary from {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            CoverageError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            CoverageError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    CoverageReport::from_json(&content).map_err(|source| {
        tracing::warn!("invalid coverage summary {}: {}", path.display(), source);
        CoverageError::Invalid {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
