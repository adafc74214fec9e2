// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

use crate::config::defaults::coverage::SUMMARY_PATH;

/// Creates a temp directory with a minimal covreport.toml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("covreport.toml"), "version = 1\n").unwrap();
    dir
}

/// Creates a temp directory with custom config content.
pub fn temp_project_with_config(config: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("covreport.toml"), config).unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Creates a temp file with the given content for testing.
///
/// Returns the NamedTempFile which keeps the file alive.
pub fn temp_file_with_content(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file.flush().unwrap();
    file
}

/// JSON for one file entry with the given statements/branches/functions/lines pcts.
pub fn file_entry_json(pcts: [f64; 4]) -> String {
    let metrics: Vec<String> = ["statements", "branches", "functions", "lines"]
        .iter()
        .zip(pcts)
        .map(|(name, pct)| {
            format!(
                r#""{}":{{"total":100,"covered":{},"skipped":0,"pct":{}}}"#,
                name,
                pct.round() as u64,
                pct
            )
        })
        .collect();
    format!("{{{}}}", metrics.join(","))
}

/// Coverage summary JSON from (key, pcts) pairs. Use "total" for the aggregate.
pub fn summary_json(entries: &[(&str, [f64; 4])]) -> String {
    let body: Vec<String> = entries
        .iter()
        .map(|(key, pcts)| format!("{:?}:{}", key, file_entry_json(*pcts)))
        .collect();
    format!("{{{}}}", body.join(","))
}

/// Writes a coverage summary at the default location under `root`.
pub fn write_summary(root: &Path, entries: &[(&str, [f64; 4])]) {
    create_tree(root, &[(SUMMARY_PATH, &summary_json(entries))]);
}
