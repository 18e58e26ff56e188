// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The value a failed check raises, and the message it carries.
//!
//! A failure is built at the point of the failed check and raised right away
//! as a panic payload. Nothing retains it. Code that wants the structured value
//! back (tests, the CLI) recovers it with [`AssertionFailure::catch`].

use serde::Serialize;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;
use std::panic::{self, Location, UnwindSafe};

/// Classification tag carried by every failure.
pub const ASSERTION_CODE: &str = "ERR_ASSERTION";

/// Name used unless a [`Message::Named`] overrides it.
pub const DEFAULT_NAME: &str = "Assertion";

/// Which check failed. `unreachable` reports as [`Operator::Ok`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Ok,
    Equal,
}

impl Operator {
    pub const fn as_str(self) -> &'static str {
        match self {
            Operator::Ok => "ok",
            Operator::Equal => "equal",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Message given to a check.
///
/// `Auto` means "none supplied" and the check's default text is used, as it is
/// for an empty message. `Named` copies both fields onto the failure, the way a
/// pre-built error value would.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Message {
    #[default]
    Auto,
    Plain(Cow<'static, str>),
    Named {
        name: Cow<'static, str>,
        message: Cow<'static, str>,
    },
}

impl Message {
    pub fn named(name: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Message::Named {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Use an existing error's `Display` output as the message.
    pub fn from_error(name: impl Into<Cow<'static, str>>, error: &dyn std::error::Error) -> Self {
        Message::named(name, error.to_string())
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, Message::Auto)
    }
}

impl From<&'static str> for Message {
    fn from(message: &'static str) -> Self {
        Message::Plain(Cow::Borrowed(message))
    }
}

impl From<String> for Message {
    fn from(message: String) -> Self {
        Message::Plain(Cow::Owned(message))
    }
}

impl From<Cow<'static, str>> for Message {
    fn from(message: Cow<'static, str>) -> Self {
        Message::Plain(message)
    }
}

impl<M: Into<Message>> From<Option<M>> for Message {
    fn from(message: Option<M>) -> Self {
        message.map_or(Message::Auto, Into::into)
    }
}

/// Re-raise an earlier failure's name and message through another check.
impl From<AssertionFailure> for Message {
    fn from(failure: AssertionFailure) -> Self {
        Message::named(failure.name, failure.message)
    }
}

/// Structured error raised by a violated development-mode check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssertionFailure {
    pub name: String,
    pub message: String,
    /// Observed value of the checked condition. Always `false`.
    pub actual: bool,
    /// Required value of the checked condition. Always `true`.
    pub expected: bool,
    pub operator: Operator,
    pub code: &'static str,
    /// Always `true`: the failure is produced by the check itself.
    pub generated: bool,
    /// `Debug` rendering of the left operand of a failed `equal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    /// `Debug` rendering of the right operand of a failed `equal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
    /// `file:line:column` of the failing check, filled in when raised.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl AssertionFailure {
    pub fn new(operator: Operator, default_message: &'static str, message: Message) -> Self {
        let (name, message) = match message {
            Message::Auto => (DEFAULT_NAME.to_string(), default_message.to_string()),
            Message::Plain(message) => {
                (DEFAULT_NAME.to_string(), or_default(message, default_message))
            }
            Message::Named { name, message } => {
                (name.into_owned(), or_default(message, default_message))
            }
        };

        AssertionFailure {
            name,
            message,
            actual: false,
            expected: true,
            operator,
            code: ASSERTION_CODE,
            generated: true,
            left: None,
            right: None,
            location: None,
        }
    }

    pub fn with_operands(mut self, left: &dyn fmt::Debug, right: &dyn fmt::Debug) -> Self {
        self.left = Some(format!("{:?}", left));
        self.right = Some(format!("{:?}", right));
        self
    }

    pub fn at(mut self, location: &Location<'_>) -> Self {
        self.location = Some(location.to_string());
        self
    }

    /// Raise this failure as a panic at the caller's location.
    #[cold]
    #[track_caller]
    pub fn raise(self) -> ! {
        let failure = if self.location.is_none() {
            self.at(Location::caller())
        } else {
            self
        };

        tracing::error!(
            target: "devlop::assert",
            operator = %failure.operator,
            code = failure.code,
            location = failure.location.as_deref().unwrap_or(""),
            "{}: {}",
            failure.name,
            failure.message
        );

        panic::panic_any(failure)
    }

    /// Borrow the failure out of a panic payload, if that is what it carries.
    pub fn from_panic(payload: &(dyn Any + Send)) -> Option<&AssertionFailure> {
        payload.downcast_ref::<AssertionFailure>()
    }

    /// Run `f`, turning a raised failure back into a value.
    ///
    /// Panics that are not assertion failures keep unwinding.
    pub fn catch<R>(f: impl FnOnce() -> R + UnwindSafe) -> Result<R, AssertionFailure> {
        match panic::catch_unwind(f) {
            Ok(value) => Ok(value),
            Err(payload) => match payload.downcast::<AssertionFailure>() {
                Ok(failure) => Err(*failure),
                Err(other) => panic::resume_unwind(other),
            },
        }
    }
}

/// An empty message reads as no message at all.
fn or_default(message: Cow<'static, str>, default_message: &'static str) -> String {
    if message.is_empty() {
        default_message.to_string()
    } else {
        message.into_owned()
    }
}

impl fmt::Display for AssertionFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.message)?;
        if let (Some(left), Some(right)) = (&self.left, &self.right) {
            write!(f, "\n  left: {}\n right: {}", left, right)?;
        }
        if let Some(location) = &self.location {
            write!(f, "\n    at {}", location)?;
        }
        Ok(())
    }
}

impl std::error::Error for AssertionFailure {}
