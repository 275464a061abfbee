//! Boolean and optional-value checks.

use std::fmt;

use crate::errors::Violation;

/// Returns `Ok(())` if `predicate` holds, otherwise a [`Violation`] carrying
/// the formatted `message`.
///
/// The message is only formatted when the predicate fails.
pub fn check_true(predicate: bool, message: fmt::Arguments<'_>) -> Result<(), Violation> {
    if !predicate {
        return Err(Violation::from_args(message));
    }
    Ok(())
}

/// Returns `Ok(())` if `anti_predicate` is false, otherwise a [`Violation`].
pub fn check_false(anti_predicate: bool, message: fmt::Arguments<'_>) -> Result<(), Violation> {
    check_true(!anti_predicate, message)
}

/// Returns `Ok(())` if `value` is `None`, otherwise a [`Violation`].
///
/// Pass borrowed values with [`Option::as_ref`] to keep ownership.
pub fn check_nil<T>(value: Option<T>, message: fmt::Arguments<'_>) -> Result<(), Violation> {
    check_true(value.is_none(), message)
}

/// Returns the contained value if `value` is `Some`, otherwise a [`Violation`].
pub fn check_not_nil<T>(value: Option<T>, message: fmt::Arguments<'_>) -> Result<T, Violation> {
    match value {
        Some(inner) => Ok(inner),
        None => Err(Violation::from_args(message)),
    }
}
