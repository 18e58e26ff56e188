// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A one-time notice pinned to a single code site.
//!
//! [`OnceNotice`] is const-constructible, so it lives in a `static` next to
//! the code it guards. This is what `#[warn_deprecated]` expands to.

use std::borrow::Cow;
use std::sync::atomic::{AtomicBool, Ordering};

use super::registry::Identity;
use super::reporter::Reporter;

#[derive(Debug)]
pub struct OnceNotice {
    message: &'static str,
    id: Option<&'static str>,
    warned: AtomicBool,
}

impl OnceNotice {
    pub const fn new(message: &'static str, id: Option<&'static str>) -> Self {
        OnceNotice {
            message,
            id,
            warned: AtomicBool::new(false),
        }
    }

    /// Emit through the process-wide reporter, first time only.
    #[inline]
    pub fn emit(&self) {
        self.emit_to(Reporter::global());
    }

    /// Emit through `reporter`, first time only. Returns `true` when a notice
    /// went out.
    pub fn emit_to(&self, reporter: &Reporter) -> bool {
        if !reporter.is_active() || self.warned.swap(true, Ordering::AcqRel) {
            return false;
        }

        // A site without an id only ever gets here once, so a fresh identity
        // is allocated at most once per site.
        let identity = match self.id {
            Some(id) => Identity::Named(Cow::Borrowed(id)),
            None => Identity::fresh(),
        };
        reporter.report(&identity, &Cow::Borrowed(self.message))
    }

    pub fn has_fired(&self) -> bool {
        self.warned.load(Ordering::Acquire)
    }
}
