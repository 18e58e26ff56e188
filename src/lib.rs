// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Development-only assertions and warn-once deprecation wrappers.
//!
//! Two independent tools that share one switch, the build [`Mode`]:
//!
//! ```text
//! ┌──────────────┐   cfg(devlop_development)   ┌──────────────────────┐
//! │   build.rs   │────────────────────────────▶│      mode.rs         │
//! │ (DEVLOP_MODE,│                             │  (Mode, MODE,        │
//! │  features,   │                             │   IS_DEVELOPMENT)    │
//! │  profile)    │                             └──────────────────────┘
//! └──────────────┘                                │               │
//!                                                 ▼               ▼
//!                         ┌────────────────────────────┐ ┌─────────────────────────┐
//!                         │          assert/           │ │      deprecation/       │
//!                         │ ok, equal, unreachable     │ │ deprecate, Deprecated,  │
//!                         │ Checks: Development |      │ │ Registry, Reporter,     │
//!                         │         Production         │ │ DiagnosticSink          │
//!                         └────────────────────────────┘ └─────────────────────────┘
//! ```
//!
//! # Mode
//!
//! | Mode        | Checks                     | Deprecation notices      |
//! |-------------|----------------------------|--------------------------|
//! | development | raise [`AssertionFailure`] | once per identity        |
//! | production  | compiled to nothing        | none, calls just forward |
//!
//! The mode follows `debug_assertions` unless `DEVLOP_MODE` or the
//! `development`/`production` features say otherwise (see `build.rs`).
//!
//! # Usage
//!
//! ```
//! use devlop::{deprecate, ok, Message};
//!
//! fn includes(value: &str, search: &str) -> bool {
//!     ok(!search.is_empty(), Message::named("TypeError", "expected a search term"));
//!     value.contains(search)
//! }
//!
//! let string_includes = deprecate(includes, "use `str::contains` itself");
//! assert!(string_includes.call(("devlop", "lop")));
//! ```

// Module declarations
pub mod assert;
pub mod config;
pub mod demo;
pub mod deprecation;
pub mod mode;
pub mod testing;

// Re-exports for public API
pub use assert::{
    equal, ok, unreachable, Active, AssertionFailure, Checks, Development, Message, Operator,
    Production,
};
pub use config::{Config, ConfigError, SinkKind};
pub use deprecation::{
    deprecate, deprecate_with_id, Deprecated, DiagnosticSink, Identity, Invocable, MemorySink,
    Notice, OnceNotice, Registry, Reporter, StderrSink, TracingSink,
};
pub use mode::{Mode, IS_DEVELOPMENT, MODE};

#[cfg(feature = "macros")]
pub use devlop_macros::warn_deprecated;
