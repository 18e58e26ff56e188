// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The two implementations of the checks, and the one this build binds.
//!
//! Both [`Development`] and [`Production`] are always compiled so either can be
//! exercised from any build. Only [`Active`] is wired to the free functions,
//! and it is picked by `cfg(devlop_development)`, not by a runtime branch.

use std::fmt;

use super::failure::{AssertionFailure, Message, Operator};

pub const DEFAULT_OK_MESSAGE: &str = "Expected value to be truthy";
pub const DEFAULT_EQUAL_MESSAGE: &str = "Expected values to be equal";
pub const DEFAULT_UNREACHABLE_MESSAGE: &str = "Unreachable";

/// The capability shared by both modes.
///
/// Implementations report a violation as `Err` and leave raising to the
/// caller, so they stay pure and testable.
pub trait Checks {
    /// Whether this implementation checks anything at all.
    const ACTIVE: bool;

    fn ok<M: Into<Message>>(condition: bool, message: M) -> Result<(), AssertionFailure>;

    fn equal<L, R, M>(left: L, right: R, message: M) -> Result<(), AssertionFailure>
    where
        L: PartialEq<R> + fmt::Debug,
        R: fmt::Debug,
        M: Into<Message>;

    fn unreachable<M: Into<Message>>(message: M) -> Result<(), AssertionFailure>;
}

/// Checks that validate and report.
#[derive(Debug, Clone, Copy, Default)]
pub struct Development;

/// Checks that do nothing. Every method inlines to `Ok(())`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Production;

/// The implementation bound in this build.
#[cfg(devlop_development)]
pub type Active = Development;

/// The implementation bound in this build.
#[cfg(not(devlop_development))]
pub type Active = Production;

impl Checks for Development {
    const ACTIVE: bool = true;

    #[inline]
    fn ok<M: Into<Message>>(condition: bool, message: M) -> Result<(), AssertionFailure> {
        if condition {
            return Ok(());
        }
        Err(AssertionFailure::new(
            Operator::Ok,
            DEFAULT_OK_MESSAGE,
            message.into(),
        ))
    }

    #[inline]
    fn equal<L, R, M>(left: L, right: R, message: M) -> Result<(), AssertionFailure>
    where
        L: PartialEq<R> + fmt::Debug,
        R: fmt::Debug,
        M: Into<Message>,
    {
        if left == right {
            return Ok(());
        }
        Err(
            AssertionFailure::new(Operator::Equal, DEFAULT_EQUAL_MESSAGE, message.into())
                .with_operands(&left, &right),
        )
    }

    #[inline]
    fn unreachable<M: Into<Message>>(message: M) -> Result<(), AssertionFailure> {
        Err(AssertionFailure::new(
            Operator::Ok,
            DEFAULT_UNREACHABLE_MESSAGE,
            message.into(),
        ))
    }
}

impl Checks for Production {
    const ACTIVE: bool = false;

    #[inline(always)]
    fn ok<M: Into<Message>>(_condition: bool, _message: M) -> Result<(), AssertionFailure> {
        Ok(())
    }

    #[inline(always)]
    fn equal<L, R, M>(_left: L, _right: R, _message: M) -> Result<(), AssertionFailure>
    where
        L: PartialEq<R> + fmt::Debug,
        R: fmt::Debug,
        M: Into<Message>,
    {
        Ok(())
    }

    #[inline(always)]
    fn unreachable<M: Into<Message>>(_message: M) -> Result<(), AssertionFailure> {
        Ok(())
    }
}
