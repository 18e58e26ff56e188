// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Who has already been warned about.
//!
//! # INVARIANT
//!
//! An identity moves from "not warned" to "warned" exactly once and never
//! back. `mark_warned` does the check and the set under one lock, so two
//! threads racing on a first call cannot both win.

use parking_lot::Mutex;
use serde::Serialize;
use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

/// Key under which a deprecation's warned state is tracked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Identity {
    /// Caller-supplied. Every wrapper using it shares one warning.
    Named(Cow<'static, str>),
    /// Synthesized for a single wrapper.
    Anonymous(u64),
}

static NEXT_ANONYMOUS: AtomicU64 = AtomicU64::new(1);

impl Identity {
    pub fn named(id: impl Into<Cow<'static, str>>) -> Identity {
        Identity::Named(id.into())
    }

    /// A new identity no other call will ever return.
    pub fn fresh() -> Identity {
        Identity::Anonymous(NEXT_ANONYMOUS.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            Identity::Named(id) => Some(id),
            Identity::Anonymous(_) => None,
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identity::Named(id) => f.write_str(id),
            Identity::Anonymous(n) => write!(f, "anonymous#{}", n),
        }
    }
}

impl From<&'static str> for Identity {
    fn from(id: &'static str) -> Self {
        Identity::Named(Cow::Borrowed(id))
    }
}

impl From<String> for Identity {
    fn from(id: String) -> Self {
        Identity::Named(Cow::Owned(id))
    }
}

/// The set of identities that have produced their notice.
///
/// Grows for the life of the process; entries are never removed. Tests and
/// embedded hosts that need a clean slate create their own instance.
#[derive(Debug, Default)]
pub struct Registry {
    warned: Mutex<HashSet<Identity>>,
}

static GLOBAL: LazyLock<Arc<Registry>> = LazyLock::new(|| Arc::new(Registry::new()));

impl Registry {
    pub fn new() -> Registry {
        Registry::default()
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static Arc<Registry> {
        &GLOBAL
    }

    pub fn has_warned(&self, identity: &Identity) -> bool {
        self.warned.lock().contains(identity)
    }

    /// Record `identity` as warned. Returns `true` only for the call that made
    /// the transition.
    pub fn mark_warned(&self, identity: &Identity) -> bool {
        let mut warned = self.warned.lock();
        if warned.contains(identity) {
            return false;
        }
        warned.insert(identity.clone())
    }

    pub fn len(&self) -> usize {
        self.warned.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
