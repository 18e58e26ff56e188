// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Development-only assertions.
//!
//! Three checks, each with two bodies:
//!
//! | Check         | Development                         | Production |
//! |---------------|-------------------------------------|------------|
//! | `ok`          | raises unless the condition holds   | no-op      |
//! | `equal`       | raises unless `left == right`       | no-op      |
//! | `unreachable` | always raises                       | no-op      |
//!
//! A raised check is a panic carrying an [`AssertionFailure`]. It is never
//! caught here: a violated check is a programmer error and unwinds to whoever
//! called it. In production the bodies are empty and inline away, so checks can
//! be sprinkled through hot paths without a runtime or size cost.
//!
//! # Usage
//!
//! ```
//! use devlop::{equal, ok, unreachable, Message};
//!
//! fn take(slot: Option<u32>) -> u32 {
//!     ok(slot.is_some(), "slot must be filled before take()");
//!     equal(slot.unwrap_or(0) % 2, 0, Message::Auto);
//!     match slot {
//!         Some(value) => value,
//!         None => {
//!             unreachable(Message::Auto);
//!             0
//!         }
//!     }
//! }
//!
//! assert_eq!(take(Some(4)), 4);
//! ```

mod checks;
mod failure;
mod macros;

pub use checks::{
    Active, Checks, Development, Production, DEFAULT_EQUAL_MESSAGE, DEFAULT_OK_MESSAGE,
    DEFAULT_UNREACHABLE_MESSAGE,
};
pub use failure::{AssertionFailure, Message, Operator, ASSERTION_CODE, DEFAULT_NAME};

use std::fmt;

/// Check that `condition` holds.
///
/// # Panics (development builds only)
/// Panics with an [`AssertionFailure`] (`operator = "ok"`) when `condition`
/// is false.
#[inline]
#[track_caller]
pub fn ok(condition: bool, message: impl Into<Message>) {
    if let Err(failure) = Active::ok(condition, message) {
        failure.raise()
    }
}

/// Check that `left == right`.
///
/// # Panics (development builds only)
/// Panics with an [`AssertionFailure`] (`operator = "equal"`) when the values
/// differ. Both operands are recorded in their `Debug` form.
#[inline]
#[track_caller]
pub fn equal<L, R>(left: L, right: R, message: impl Into<Message>)
where
    L: PartialEq<R> + fmt::Debug,
    R: fmt::Debug,
{
    if let Err(failure) = Active::equal(left, right, message) {
        failure.raise()
    }
}

/// Mark a code path that must never run.
///
/// Development builds never return from this call. Production builds do, so
/// code after it still has to type-check as if control continues.
///
/// # Panics (development builds only)
/// Always panics with an [`AssertionFailure`] (`operator = "ok"`).
#[inline]
#[track_caller]
pub fn unreachable(message: impl Into<Message>) {
    if let Err(failure) = Active::unreachable(message) {
        failure.raise()
    }
}
