// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A worked example: a helper that has outlived its purpose.
//!
//! `includes` predates `str::contains` taking a start position, so it is
//! wrapped in [`STRING_INCLUDES`] with a notice pointing callers at the
//! standard library. The argument types already rule out what a dynamic
//! caller would have to check, and a position past the end is clamped.

use std::sync::LazyLock;

use crate::deprecation::{deprecate, Deprecated};

/// Signature of [`includes`].
pub type IncludesFn = fn(&str, &str, Option<usize>) -> bool;

/// Notice text for [`STRING_INCLUDES`].
pub const INCLUDES_NOTICE: &str = "Since Rust 1.0, please use `str::contains` itself.";

/// The deprecated entry point.
pub static STRING_INCLUDES: LazyLock<Deprecated<IncludesFn>> =
    LazyLock::new(|| deprecate(includes as IncludesFn, INCLUDES_NOTICE));

/// Whether `search` occurs in `value` at or after character `position`.
///
/// A position past the end is clamped to the end, where only the empty string
/// matches.
pub fn includes(value: &str, search: &str, position: Option<usize>) -> bool {
    let position = position.unwrap_or(0);

    match value.char_indices().nth(position) {
        Some((start, _)) => value[start..].contains(search),
        None => search.is_empty(),
    }
}
