//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! Every helper here works against an isolated registry so tests never see
//! each other's notices through the process-wide one.

#![doc(hidden)]

use std::panic::UnwindSafe;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::assert::AssertionFailure;
use crate::deprecation::{MemorySink, Registry, Reporter};
use crate::mode::Mode;

/// A reporter with its own registry, writing into a fresh [`MemorySink`].
pub fn isolated_reporter(mode: Mode) -> (Reporter, Arc<MemorySink>) {
    let sink = Arc::new(MemorySink::new());
    let reporter = Reporter::new(Arc::new(Registry::new()), sink.clone()).with_mode(mode);
    (reporter, sink)
}

/// Run `f` and return the assertion failure it raised, if any.
pub fn capture_failure(f: impl FnOnce() + UnwindSafe) -> Option<AssertionFailure> {
    AssertionFailure::catch(f).err()
}

/// Thread-safe call counter for wrapped targets.
#[derive(Debug, Default)]
pub struct CallCounter {
    calls: AtomicUsize,
}

impl CallCounter {
    pub fn new() -> Self {
        CallCounter::default()
    }

    pub fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}
