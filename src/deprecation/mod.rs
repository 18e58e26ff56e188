// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Warn-once deprecation wrappers.
//!
//! Wrap a callable being phased out; the wrapper behaves exactly like it and
//! additionally writes one `DeprecationWarning` to the diagnostic stream the
//! first time it is called.
//!
//! ```
//! use devlop::deprecate_with_id;
//!
//! fn old_sum(a: u32, b: u32) -> u32 {
//!     a + b
//! }
//!
//! let sum = deprecate_with_id(old_sum, "use `u32::checked_add`", "demo:sum");
//! assert_eq!(sum.call((1, 2)), 3);
//! assert_eq!(sum.call((2, 2)), 4); // no second notice
//! ```
//!
//! # Identity
//!
//! | Constructor          | Identity                     | Warns               |
//! |----------------------|------------------------------|---------------------|
//! | `deprecate`          | fresh, private to the wrapper| once per wrapper    |
//! | `deprecate_with_id`  | the given string             | once per string     |
//!
//! Wrappers sharing an id share one warning across all of them. In production
//! builds nothing is written and the registry is never touched; calls are
//! plain forwards.

mod invocable;
mod once;
mod registry;
mod reporter;
mod sink;

pub use invocable::Invocable;
pub use once::OnceNotice;
pub use registry::{Identity, Registry};
pub use reporter::Reporter;
pub use sink::{
    DiagnosticSink, MemorySink, Notice, StderrSink, TracingSink, NOTICE_NAME, NO_MESSAGE,
};

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// A callable wrapped with a one-time deprecation notice.
pub struct Deprecated<F> {
    target: F,
    message: Cow<'static, str>,
    identity: Identity,
    warned: AtomicBool,
    reporter: Reporter,
}

impl<F> Deprecated<F> {
    /// Wrap `target`. Without an identity a fresh one is synthesized.
    pub fn new(
        target: F,
        message: impl Into<Cow<'static, str>>,
        identity: Option<Identity>,
    ) -> Self {
        Deprecated {
            target,
            message: message.into(),
            identity: identity.unwrap_or_else(Identity::fresh),
            warned: AtomicBool::new(false),
            reporter: Reporter::global().clone(),
        }
    }

    /// Route notices through `reporter` instead of the process-wide one.
    pub fn with_reporter(mut self, reporter: Reporter) -> Self {
        self.reporter = reporter;
        self
    }

    /// Forward to the target, emitting the notice first if it is still due.
    ///
    /// Arguments are passed as a tuple: `w.call(())`, `w.call((a,))`,
    /// `w.call((a, b))`. Whatever the target returns, `Err` included, comes
    /// back untouched, and a panicking target unwinds through unchanged.
    #[inline]
    pub fn call<Args>(&self, args: Args) -> F::Output
    where
        F: Invocable<Args>,
    {
        self.notify();
        self.target.invoke(args)
    }

    fn notify(&self) {
        if !self.reporter.is_active() {
            return;
        }
        // Cheap per-wrapper latch first; the registry lock is only taken once
        if self.warned.swap(true, Ordering::AcqRel) {
            return;
        }
        self.reporter.report(&self.identity, &self.message);
    }

    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped callable. Calling it directly skips the notice.
    pub fn target(&self) -> &F {
        &self.target
    }

    pub fn into_inner(self) -> F {
        self.target
    }
}

impl<F> fmt::Debug for Deprecated<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deprecated")
            .field("message", &self.message)
            .field("identity", &self.identity)
            .field("warned", &self.warned.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Wrap `target` with its own one-time notice.
pub fn deprecate<F>(target: F, message: impl Into<Cow<'static, str>>) -> Deprecated<F> {
    Deprecated::new(target, message, None)
}

/// Wrap `target`, sharing one notice with every wrapper that uses `identity`.
pub fn deprecate_with_id<F>(
    target: F,
    message: impl Into<Cow<'static, str>>,
    identity: impl Into<Identity>,
) -> Deprecated<F> {
    Deprecated::new(target, message, Some(identity.into()))
}
