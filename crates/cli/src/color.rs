// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.
//!
//! Color is a presentation concern: the report layer hands semantic roles
//! (bands, statuses) to [`scheme`] and writes through `termcolor`.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` flag values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve the flag into a `ColorChoice`, letting `--no-color` win.
    pub fn resolve(self, no_color: bool) -> ColorChoice {
        match self {
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Always => resolve_color(true, no_color),
            ColorMode::Auto => resolve_color(false, no_color),
        }
    }
}

/// Decide whether to emit color.
///
/// `no_color` takes priority over `force_color`. Without either, color is
/// used only when stdout is a terminal and `NO_COLOR` is unset.
pub fn resolve_color(force_color: bool, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    if force_color {
        return ColorChoice::Always;
    }
    if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    }
}

/// Color specs for each semantic role in the report.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::report::{Band, Status};

    fn fg(color: Color) -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(color));
        spec
    }

    fn fg_bold(color: Color) -> ColorSpec {
        let mut spec = fg(color);
        spec.set_bold(true);
        spec
    }

    /// Section banners and rules.
    pub fn header() -> ColorSpec {
        fg_bold(Color::Blue)
    }

    /// Labels such as "Overall Coverage:" and "Summary:".
    pub fn label() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Source file paths.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    pub fn band(band: Band) -> ColorSpec {
        match band {
            Band::Good => fg(Color::Green),
            Band::Warn => fg(Color::Yellow),
            Band::Low => fg(Color::Red),
        }
    }

    pub fn status(status: Status) -> ColorSpec {
        match status {
            Status::Excellent => fg(Color::Green),
            Status::Good => fg(Color::Yellow),
            Status::NeedsImprovement => fg(Color::Red),
        }
    }

    /// Heading above files with low coverage.
    pub fn low_heading() -> ColorSpec {
        fg_bold(Color::Red)
    }

    /// Heading above files with good coverage.
    pub fn good_heading() -> ColorSpec {
        fg_bold(Color::Green)
    }

    pub fn error() -> ColorSpec {
        fg(Color::Red)
    }

    pub fn warning() -> ColorSpec {
        fg(Color::Yellow)
    }

    pub fn success() -> ColorSpec {
        fg(Color::Green)
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
