//! Violation type returned by every failing check.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Formatted description of a failed predicate.
///
/// A `Violation` only ever exists on the `Err` side of a check result. It is
/// built once, when the predicate fails, from the caller supplied message
/// template and its arguments. Displaying it yields exactly that message.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
#[error("{message}")]
pub struct Violation {
    message: String,
}

impl Violation {
    /// Creates a violation from an already formatted message.
    pub fn new(message: impl Into<String>) -> Self {
        let message = message.into();
        log::debug!(target: "precond", "predicate violated: {message}");
        Self { message }
    }

    /// Formats `args` into a new violation.
    pub fn from_args(args: fmt::Arguments<'_>) -> Self {
        Self::new(fmt::format(args))
    }

    /// Returns the formatted message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the violation and returns its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl From<Violation> for String {
    fn from(violation: Violation) -> Self {
        violation.into_message()
    }
}
