// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The development/production switch.
//!
//! Resolved once by `build.rs` and baked in as `cfg(devlop_development)`.
//! Nothing here can be flipped at runtime: the assertion layer binds to one
//! implementation at compile time, and the other one never makes it into the
//! binary's hot paths.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which implementation of the checks is bound in this build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Development,
    Production,
}

/// `true` when checks are active. Macros branch on this constant so the
/// production arm is dead code the optimizer drops, operands included.
pub const IS_DEVELOPMENT: bool = cfg!(devlop_development);

/// The mode this crate was compiled in.
pub const MODE: Mode = if IS_DEVELOPMENT {
    Mode::Development
} else {
    Mode::Production
};

impl Mode {
    #[inline]
    pub const fn current() -> Mode {
        MODE
    }

    #[inline]
    pub const fn is_development(self) -> bool {
        matches!(self, Mode::Development)
    }

    #[inline]
    pub const fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Development => "development",
            Mode::Production => "production",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the same spellings `build.rs` does for `DEVLOP_MODE`.
impl FromStr for Mode {
    type Err = crate::config::ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Mode::Development),
            "production" | "prod" => Ok(Mode::Production),
            _ => Err(crate::config::ConfigError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}
