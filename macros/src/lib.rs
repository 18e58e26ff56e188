// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Procedural macros for devlop.
//!
//! `deprecate()` wraps a value at runtime. When the thing being phased out is
//! a plain `fn` item, wrapping it means changing every call site. The
//! `#[warn_deprecated]` attribute does the same job where the function is
//! defined: it plants a one-time notice at the top of the body and leaves the
//! signature, and therefore every caller, alone.
//!
//! # Example
//!
//! ```ignore
//! use devlop::warn_deprecated;
//!
//! #[warn_deprecated(message = "use `str::contains`", id = "strings:includes")]
//! pub fn includes(value: &str, search: &str) -> bool {
//!     value.contains(search)
//! }
//!
//! // Expands to:
//! pub fn includes(value: &str, search: &str) -> bool {
//!     {
//!         static __DEVLOP_NOTICE: ::devlop::OnceNotice =
//!             ::devlop::OnceNotice::new("use `str::contains`", Some("strings:includes"));
//!         __DEVLOP_NOTICE.emit();
//!     }
//!     { value.contains(search) }
//! }
//! ```

use proc_macro::TokenStream;

mod warn_deprecated;

/// Attribute macro emitting a deprecation notice the first time a function
/// runs.
///
/// # Attributes
///
/// - `message = "text"` - Notice text (required). A bare string literal works too:
///   `#[warn_deprecated("text")]`
/// - `id = "identity"` - Share one notice with every other site using the same id
///
/// Without `id`, the function gets a notice of its own. In production builds
/// the inserted code does nothing. `const fn` is rejected since the notice
/// needs a runtime side effect.
#[proc_macro_attribute]
pub fn warn_deprecated(attr: TokenStream, item: TokenStream) -> TokenStream {
    match warn_deprecated::expand(attr.into(), item.into()) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
