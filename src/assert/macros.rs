// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `debug_assert!`-style front ends for the checks.
//!
//! Each macro branches on [`IS_DEVELOPMENT`](crate::IS_DEVELOPMENT), a
//! constant, so in production the operands are never evaluated and the whole
//! arm is dropped. Messages are only formatted once a check has failed.

/// Check that a condition holds.
///
/// ```
/// devlop::dev_ok!(1 + 1 == 2);
/// devlop::dev_ok!(!"abc".is_empty(), "expected input, got {:?}", "abc");
/// ```
#[macro_export]
macro_rules! dev_ok {
    ($cond:expr $(,)?) => {
        if $crate::IS_DEVELOPMENT && !$cond {
            $crate::ok(false, $crate::Message::Auto);
        }
    };
    ($cond:expr, $($arg:tt)+) => {
        if $crate::IS_DEVELOPMENT && !$cond {
            $crate::ok(false, $crate::Message::Plain(::std::format!($($arg)+).into()));
        }
    };
}

/// Check that two values compare equal.
///
/// ```
/// devlop::dev_equal!(2 * 2, 4);
/// devlop::dev_equal!("a", "a", "strings drifted");
/// ```
#[macro_export]
macro_rules! dev_equal {
    ($left:expr, $right:expr $(,)?) => {
        if $crate::IS_DEVELOPMENT {
            match (&$left, &$right) {
                (left, right) => $crate::equal(left, right, $crate::Message::Auto),
            }
        }
    };
    ($left:expr, $right:expr, $($arg:tt)+) => {
        if $crate::IS_DEVELOPMENT {
            match (&$left, &$right) {
                (left, right) => {
                    if !(*left == *right) {
                        $crate::equal(
                            left,
                            right,
                            $crate::Message::Plain(::std::format!($($arg)+).into()),
                        );
                    }
                }
            }
        }
    };
}

/// Mark a path that must never run. Raises in development; falls through in
/// production.
#[macro_export]
macro_rules! dev_unreachable {
    () => {
        if $crate::IS_DEVELOPMENT {
            $crate::unreachable($crate::Message::Auto);
        }
    };
    ($($arg:tt)+) => {
        if $crate::IS_DEVELOPMENT {
            $crate::unreachable($crate::Message::Plain(::std::format!($($arg)+).into()));
        }
    };
}
