// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test command execution.
//!
//! Runs the configured test command to completion in the project root.
//! Every failure to launch becomes a [`RunResult`] with exit code 1; nothing
//! here returns an error or panics.

mod summary;

pub use summary::{TestCounts, parse_jest_summary};

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;

/// Exit code reported when the test command could not produce one.
pub const LAUNCH_FAILURE_CODE: i32 = 1;

/// A program and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Split an argv vector into program and arguments. Returns `None` if empty.
    pub fn from_argv(mut argv: Vec<String>) -> Option<Self> {
        if argv.is_empty() {
            return None;
        }
        let program = argv.remove(0);
        Some(Self::new(program, argv))
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Why the test command did not report an exit code of its own.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("{program} not found. Please install {}.", install_hint(.program))]
    MissingDependency { program: String },

    #[error("project root {} does not exist", .root.display())]
    RootNotFound { root: PathBuf },

    #[error("error running tests: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("test command was terminated by a signal")]
    Terminated,
}

impl RunnerError {
    fn from_spawn(program: &str, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            RunnerError::MissingDependency {
                program: program.to_string(),
            }
        } else {
            RunnerError::Spawn {
                program: program.to_string(),
                source,
            }
        }
    }
}

/// Suggest what to install for a missing program.
fn install_hint(program: &str) -> &str {
    let name = Path::new(program)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(program);
    match name {
        "npm" | "npx" | "node" => "Node.js and npm",
        _ => program,
    }
}

/// Output captured from the test command in capture mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Outcome of one test command invocation.
///
/// A command that could not be launched (missing program, bad root, spawn
/// failure) or was killed still yields a result: `exit_code` is 1 and the
/// description lives in `error`, not in `captured_output`, which only ever
/// holds what the child actually wrote.
#[derive(Debug)]
pub struct RunResult {
    /// The command's exit code verbatim, or 1 if it could not be obtained.
    pub exit_code: i32,
    /// Child output, present only in capture mode.
    pub captured_output: Option<CapturedOutput>,
    /// Set when the command could not be launched or did not exit normally.
    pub error: Option<RunnerError>,
}

impl RunResult {
    /// The command ran and exited with `code`.
    pub fn exited(code: i32, captured_output: Option<CapturedOutput>) -> Self {
        Self {
            exit_code: code,
            captured_output,
            error: None,
        }
    }

    /// The command could not report an exit code.
    pub fn failed(error: RunnerError, captured_output: Option<CapturedOutput>) -> Self {
        Self {
            exit_code: LAUNCH_FAILURE_CODE,
            captured_output,
            error: Some(error),
        }
    }

    pub fn passed(&self) -> bool {
        self.exit_code == 0
    }

    /// Jest's "Tests:" summary, if output was captured and contains one.
    pub fn test_counts(&self) -> Option<TestCounts> {
        let output = self.captured_output.as_ref()?;
        // Jest prints its summary on stderr; check stdout as well for wrappers.
        parse_jest_summary(&output.stderr).or_else(|| parse_jest_summary(&output.stdout))
    }
}

/// Runs the test command in the project root.
pub struct TestRunner {
    command: CommandSpec,
    root: PathBuf,
    capture: bool,
}

impl TestRunner {
    pub fn new(command: CommandSpec, root: impl Into<PathBuf>, capture: bool) -> Self {
        Self {
            command,
            root: root.into(),
            capture,
        }
    }

    pub fn command(&self) -> &CommandSpec {
        &self.command
    }

    /// Run the command to completion.
    ///
    /// In streaming mode the child inherits stdout and stderr. In capture
    /// mode both streams are collected into the result.
    pub fn run(&self) -> RunResult {
        if !self.root.is_dir() {
            return RunResult::failed(
                RunnerError::RootNotFound {
                    root: self.root.clone(),
                },
                None,
            );
        }

        let mut cmd = Command::new(&self.command.program);
        cmd.args(&self.command.args).current_dir(&self.root);
        tracing::debug!("running `{}` in {}", self.command, self.root.display());

        let outcome: io::Result<(ExitStatus, Option<CapturedOutput>)> = if self.capture {
            cmd.output().map(|output| {
                let captured = CapturedOutput {
                    stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
                    stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
                };
                (output.status, Some(captured))
            })
        } else {
            cmd.status().map(|status| (status, None))
        };

        match outcome {
            Ok((status, captured)) => {
                tracing::debug!("test command exited with {}", status);
                match status.code() {
                    Some(code) => RunResult::exited(code, captured),
                    None => RunResult::failed(RunnerError::Terminated, captured),
                }
            }
            Err(e) => {
                tracing::warn!("failed to launch `{}`: {}", self.command.program, e);
                RunResult::failed(RunnerError::from_spawn(&self.command.program, e), None)
            }
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
