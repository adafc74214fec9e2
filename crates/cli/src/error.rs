// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process exit codes.

/// Exit codes for the `covreport` binary.
///
/// Coverage shortfalls never map to a failing code; only the test run does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Tests passed (coverage warnings included).
    Success = 0,
    /// Tests failed or the test command could not be invoked.
    Failure = 1,
    /// Configuration could not be loaded.
    ConfigError = 2,
}

impl ExitCode {
    /// Map a test command's exit status to the process exit code.
    pub fn from_test_status(code: i32) -> Self {
        if code == 0 { Self::Success } else { Self::Failure }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
