//! Epsilon-tolerant numeric range checks.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::Violation;
use crate::predicates::check_true;

/// Tolerance used by [`check_in_range`] and by [`RangeOpts::default`].
pub const DEFAULT_EPSILON: f64 = 0.00001;

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

/// Options controlling range checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeOpts {
    /// Distance by which both bounds are widened before the strict comparison.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
}

impl RangeOpts {
    /// Creates options with the given tolerance.
    pub const fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon }
    }
}

impl Default for RangeOpts {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
        }
    }
}

/// Returns whether `value` lies strictly inside `(lower - epsilon, upper + epsilon)`.
///
/// The comparison is evaluated as `value - lower + epsilon > 0` and
/// `upper - value + epsilon > 0`. With `epsilon == 0` the bounds themselves
/// are rejected. Any NaN operand yields `false`.
pub fn in_range_epsilon(value: f64, lower: f64, upper: f64, epsilon: f64) -> bool {
    value - lower + epsilon > 0.0 && upper - value + epsilon > 0.0
}

/// Returns `Ok(())` if `value` is within `<lower, upper>` widened by `epsilon`,
/// otherwise a [`Violation`].
pub fn check_in_range_epsilon(
    value: f64,
    lower: f64,
    upper: f64,
    epsilon: f64,
    message: fmt::Arguments<'_>,
) -> Result<(), Violation> {
    check_true(in_range_epsilon(value, lower, upper, epsilon), message)
}

/// Range check taking its tolerance from `opts`.
pub fn check_in_range_with(
    value: f64,
    lower: f64,
    upper: f64,
    opts: &RangeOpts,
    message: fmt::Arguments<'_>,
) -> Result<(), Violation> {
    check_in_range_epsilon(value, lower, upper, opts.epsilon, message)
}

/// Returns `Ok(())` if `value` is within `<lower, upper>` using
/// [`DEFAULT_EPSILON`], otherwise a [`Violation`].
pub fn check_in_range(
    value: f64,
    lower: f64,
    upper: f64,
    message: fmt::Arguments<'_>,
) -> Result<(), Violation> {
    check_in_range_with(value, lower, upper, &RangeOpts::default(), message)
}
