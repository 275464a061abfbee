use std::fmt;
use std::panic::Location;

use precond_check::{RangeOpts, Violation};

#[cold]
#[inline(never)]
#[track_caller]
fn abort(violation: Violation) -> ! {
    let location = Location::caller();
    log::error!(target: "precond", "precondition failed at {location}: {violation}");
    panic!("{violation}")
}

#[inline]
#[track_caller]
fn enforce<T>(outcome: Result<T, Violation>) -> T {
    match outcome {
        Ok(value) => value,
        Err(violation) => abort(violation),
    }
}

/// Panics if `predicate` is false.
#[track_caller]
pub fn assert_true(predicate: bool, message: fmt::Arguments<'_>) {
    enforce(precond_check::check_true(predicate, message))
}

/// Panics if `anti_predicate` is true.
#[track_caller]
pub fn assert_false(anti_predicate: bool, message: fmt::Arguments<'_>) {
    enforce(precond_check::check_false(anti_predicate, message))
}

/// Panics if `value` is `Some`.
#[track_caller]
pub fn assert_nil<T>(value: Option<T>, message: fmt::Arguments<'_>) {
    enforce(precond_check::check_nil(value, message))
}

/// Panics if `value` is `None`, otherwise returns the contained value.
#[track_caller]
pub fn assert_not_nil<T>(value: Option<T>, message: fmt::Arguments<'_>) -> T {
    enforce(precond_check::check_not_nil(value, message))
}

/// Panics if `value` is not contained in `<lower, upper>` widened by `epsilon`.
#[track_caller]
pub fn assert_in_range_epsilon(
    value: f64,
    lower: f64,
    upper: f64,
    epsilon: f64,
    message: fmt::Arguments<'_>,
) {
    enforce(precond_check::check_in_range_epsilon(value, lower, upper, epsilon, message))
}

/// Panics if `value` is not contained in `<lower, upper>` widened by `opts.epsilon`.
#[track_caller]
pub fn assert_in_range_with(
    value: f64,
    lower: f64,
    upper: f64,
    opts: &RangeOpts,
    message: fmt::Arguments<'_>,
) {
    enforce(precond_check::check_in_range_with(value, lower, upper, opts, message))
}

/// Panics if `value` is not contained in `<lower, upper>`.
/// Uses [`precond_check::DEFAULT_EPSILON`] for the comparison.
#[track_caller]
pub fn assert_in_range(value: f64, lower: f64, upper: f64, message: fmt::Arguments<'_>) {
    enforce(precond_check::check_in_range(value, lower, upper, message))
}
