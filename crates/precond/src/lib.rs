#![deny(missing_docs)]
//! Precondition assertions that panic on violation.
//!
//! Each assertion mirrors a check from [`precond_check`] (re-exported as
//! [`check`]) and panics with the check's formatted message when it fails.
//! The panic payload is a `String` equal to that message, and the reported
//! location is the caller's line.
//!
//! These are meant for programmer errors: broken invariants and arguments no
//! correct caller would pass. Failures a caller is expected to handle belong
//! in [`check`], which returns a [`Violation`] instead of panicking.
//!
//! ```
//! fn mean(samples: &[f64]) -> f64 {
//!     precond::assert_false!(samples.is_empty(), "mean of {} samples", samples.len());
//!     samples.iter().sum::<f64>() / samples.len() as f64
//! }
//!
//! assert_eq!(mean(&[1.0, 3.0]), 2.0);
//! ```

mod enforce;
mod macros;

pub use precond_check as check;
pub use precond_check::{RangeOpts, Violation, DEFAULT_EPSILON};

pub use enforce::{
    assert_false, assert_in_range, assert_in_range_epsilon, assert_in_range_with, assert_nil,
    assert_not_nil, assert_true,
};
