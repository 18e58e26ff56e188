// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The diagnostic stream notices are written to.

use parking_lot::Mutex;
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;
use std::io::Write;

use super::registry::Identity;

/// Label every notice starts with.
pub const NOTICE_NAME: &str = "DeprecationWarning";

/// Notice text used when a deprecation was given an empty message.
pub const NO_MESSAGE: &str = "no message";

const YELLOW: &str = "\x1b[33m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// One deprecation notice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub identity: Identity,
    pub message: Cow<'static, str>,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", NOTICE_NAME, self.message)?;
        if let Some(id) = self.identity.as_named() {
            write!(f, " [{}]", id)?;
        }
        Ok(())
    }
}

/// Anything that accepts notices. Must not fail and must not block for long.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, notice: &Notice);
}

/// Writes one line per notice to standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink {
    pub color: bool,
}

impl StderrSink {
    pub fn new(color: bool) -> Self {
        StderrSink { color }
    }
}

impl DiagnosticSink for StderrSink {
    fn emit(&self, notice: &Notice) {
        let mut stderr = std::io::stderr().lock();
        // A broken stderr is not worth aborting the caller over
        let _ = if self.color {
            let rest = notice.to_string();
            let rest = rest.strip_prefix(NOTICE_NAME).unwrap_or(&rest);
            writeln!(stderr, "{BOLD}{YELLOW}{NOTICE_NAME}{RESET}{rest}")
        } else {
            writeln!(stderr, "{}", notice)
        };
    }
}

/// Emits a `tracing` warning event per notice.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, notice: &Notice) {
        tracing::warn!(
            target: "devlop::deprecation",
            identity = %notice.identity,
            "{}",
            notice.message
        );
    }
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    notices: Mutex<Vec<Notice>>,
}

impl MemorySink {
    pub fn new() -> Self {
        MemorySink::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.notices.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, notice: &Notice) {
        self.notices.lock().push(notice.clone());
    }
}
