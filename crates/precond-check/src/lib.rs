#![deny(missing_docs)]
//! Recoverable precondition checks.
//!
//! Every check evaluates a predicate and returns `Ok` when it holds or a
//! [`Violation`] carrying the caller's formatted message when it does not.
//! Nothing here panics; use the `precond` crate for checks that abort the
//! current operation instead.
//!
//! ```
//! use precond_check::{check_in_range, check_not_nil, Violation};
//!
//! fn scale(factor: Option<f64>) -> Result<f64, Violation> {
//!     let factor = check_not_nil!(factor, "scale factor is required")?;
//!     check_in_range!(factor, 0.0, 1.0, "scale factor {} outside <0, 1>", factor)?;
//!     Ok(factor * 2.0)
//! }
//!
//! assert_eq!(scale(Some(0.5)), Ok(1.0));
//! assert_eq!(
//!     scale(Some(1.5)).unwrap_err().message(),
//!     "scale factor 1.5 outside <0, 1>"
//! );
//! ```

pub mod errors;
mod macros;
mod predicates;
mod range;

pub use errors::Violation;
pub use predicates::{check_false, check_nil, check_not_nil, check_true};
pub use range::{
    check_in_range, check_in_range_epsilon, check_in_range_with, in_range_epsilon, RangeOpts,
    DEFAULT_EPSILON,
};
