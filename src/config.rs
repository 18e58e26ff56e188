// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration for the diagnostic stream.
//!
//! The mode itself is a build-time decision (see `build.rs`). What can still be
//! picked when the process starts is where deprecation notices go:
//!
//! | Variable      | Values                 | Default  |
//! |---------------|------------------------|----------|
//! | `DEVLOP_SINK` | `stderr`, `tracing`    | `stderr` |
//! | `NO_COLOR`    | any value disables it  | unset    |
//!
//! Read once, on the first notice, then cached for the life of the process.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::mode::{Mode, MODE};

/// Environment variable selecting the default sink.
pub const SINK_ENV: &str = "DEVLOP_SINK";

/// Error type for configuration values that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `DEVLOP_MODE` (or a mode argument) is not a known mode.
    UnknownMode { value: String },
    /// `DEVLOP_SINK` is not a known sink.
    UnknownSink { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownMode { value } => {
                write!(
                    f,
                    "unknown mode '{}' (expected development or production)",
                    value
                )
            }
            ConfigError::UnknownSink { value } => {
                write!(f, "unknown sink '{}' (expected stderr or tracing)", value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Where the process-wide reporter writes notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Stderr,
    Tracing,
}

impl FromStr for SinkKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stderr" | "" => Ok(SinkKind::Stderr),
            "tracing" | "log" => Ok(SinkKind::Tracing),
            _ => Err(ConfigError::UnknownSink {
                value: s.to_string(),
            }),
        }
    }
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub mode: Mode,
    pub sink: SinkKind,
    pub color: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    /// Read the environment. Unknown sink names fall back to stderr.
    pub fn from_env() -> Config {
        let sink = match std::env::var(SINK_ENV) {
            Ok(value) => value.parse().unwrap_or_else(|err: ConfigError| {
                tracing::warn!(target: "devlop::config", "{}, using stderr", err);
                SinkKind::Stderr
            }),
            Err(_) => SinkKind::Stderr,
        };

        Config {
            mode: MODE,
            sink,
            color: color_enabled(),
        }
    }

    /// The cached process-wide configuration.
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}

/// Colors only on an interactive stderr, and never when `NO_COLOR` is set.
fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr)
}
