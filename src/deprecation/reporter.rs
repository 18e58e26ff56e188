// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Registry + sink + mode: the narrow seam wrappers talk to.

use std::borrow::Cow;
use std::fmt;
use std::sync::{Arc, LazyLock};

use super::registry::{Identity, Registry};
use super::sink::{DiagnosticSink, Notice, StderrSink, TracingSink, NO_MESSAGE};
use crate::config::{Config, SinkKind};
use crate::mode::{Mode, MODE};

/// Decides whether a notice goes out, and sends it.
#[derive(Clone)]
pub struct Reporter {
    registry: Arc<Registry>,
    sink: Arc<dyn DiagnosticSink>,
    mode: Mode,
}

static GLOBAL: LazyLock<Reporter> = LazyLock::new(|| Reporter::from_config(Config::global()));

impl Reporter {
    /// A reporter in the compiled mode.
    pub fn new(registry: Arc<Registry>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Reporter {
            registry,
            sink,
            mode: MODE,
        }
    }

    /// Override the mode. Only useful for exercising production behavior from
    /// a development build, and vice versa.
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// The process-wide reporter: global registry, sink from `DEVLOP_SINK`.
    pub fn global() -> &'static Reporter {
        &GLOBAL
    }

    pub fn from_config(config: &Config) -> Self {
        let sink: Arc<dyn DiagnosticSink> = match config.sink {
            SinkKind::Stderr => Arc::new(StderrSink::new(config.color)),
            SinkKind::Tracing => Arc::new(TracingSink),
        };
        Reporter {
            registry: Arc::clone(Registry::global()),
            sink,
            mode: config.mode,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Whether notices can be emitted at all.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.mode.is_development()
    }

    /// Emit the notice for `identity` unless it already went out.
    ///
    /// Returns `true` when this call emitted it.
    pub fn report(&self, identity: &Identity, message: &Cow<'static, str>) -> bool {
        if !self.is_active() || !self.registry.mark_warned(identity) {
            return false;
        }

        let message = if message.is_empty() {
            Cow::Borrowed(NO_MESSAGE)
        } else {
            message.clone()
        };
        self.sink.emit(&Notice {
            identity: identity.clone(),
            message,
        });
        true
    }
}

impl fmt::Debug for Reporter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Reporter")
            .field("registry", &self.registry)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
