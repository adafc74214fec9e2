// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test runner orchestration and coverage summary reporting.
//!
//! A run has three stages:
//! 1. [`runner::TestRunner`] executes the project's test command.
//! 2. [`coverage::load`] reads the Istanbul `coverage-summary.json`.
//! 3. [`report::Presenter`] renders the summary and picks the exit code.

pub mod cli;
pub mod color;
pub mod config;
pub mod coverage;
pub mod discovery;
pub mod error;
pub mod report;
pub mod runner;
pub mod verbose;

#[cfg(test)]
pub mod test_utils;
