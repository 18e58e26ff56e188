// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for devlop CLI.
//!
//! Just enough color to tell a passing check from a failing one. Respects
//! `NO_COLOR` and turns itself off when stdout is not a terminal.

use devlop::{AssertionFailure, Mode};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply multiple styles
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

pub fn mode_badge(mode: Mode) -> String {
    match mode {
        Mode::Development => styled(&[BOLD, YELLOW], "development"),
        Mode::Production => styled(&[BOLD, GREEN], "production"),
    }
}

pub fn key_value(key: &str, value: &str) -> String {
    format!("{} {}", styled(&[DIM], &format!("{:>8}", key)), value)
}

/// Multi-line report of a failure, one field per line.
pub fn failure_report(failure: &AssertionFailure) -> String {
    let mut lines = vec![format!(
        "{} {}",
        styled(&[BOLD, RED], &format!("{}:", failure.name)),
        failure.message
    )];
    lines.push(key_value("operator", failure.operator.as_str()));
    lines.push(key_value("code", failure.code));
    lines.push(key_value("actual", &failure.actual.to_string()));
    lines.push(key_value("expected", &failure.expected.to_string()));
    lines.push(key_value("generated", &failure.generated.to_string()));
    if let (Some(left), Some(right)) = (&failure.left, &failure.right) {
        lines.push(key_value("left", left));
        lines.push(key_value("right", right));
    }
    lines.join("\n")
}

pub fn passed() -> String {
    styled(&[BOLD, GREEN], "✓ passed")
}
