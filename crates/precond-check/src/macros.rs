//! `format!`-style front ends for the check functions.
//!
//! Each macro takes the checked operands followed by a message template and
//! its arguments, exactly as `format!` would, and evaluates to the
//! `Result` of the corresponding function.

/// Expands to [`check_true`](fn@crate::check_true) with a formatted message.
///
/// ```
/// use precond_check::check_true;
///
/// let err = check_true!(false, "value {} invalid", 42).unwrap_err();
/// assert_eq!(err.message(), "value 42 invalid");
/// ```
#[macro_export]
macro_rules! check_true {
    ($predicate:expr, $($arg:tt)+) => {
        $crate::check_true($predicate, ::core::format_args!($($arg)+))
    };
}

/// Expands to [`check_false`](fn@crate::check_false) with a formatted message.
#[macro_export]
macro_rules! check_false {
    ($anti_predicate:expr, $($arg:tt)+) => {
        $crate::check_false($anti_predicate, ::core::format_args!($($arg)+))
    };
}

/// Expands to [`check_nil`](fn@crate::check_nil) with a formatted message.
#[macro_export]
macro_rules! check_nil {
    ($value:expr, $($arg:tt)+) => {
        $crate::check_nil($value, ::core::format_args!($($arg)+))
    };
}

/// Expands to [`check_not_nil`](fn@crate::check_not_nil) with a formatted message.
#[macro_export]
macro_rules! check_not_nil {
    ($value:expr, $($arg:tt)+) => {
        $crate::check_not_nil($value, ::core::format_args!($($arg)+))
    };
}

/// Expands to [`check_in_range`](fn@crate::check_in_range) with a formatted message.
#[macro_export]
macro_rules! check_in_range {
    ($value:expr, $lower:expr, $upper:expr, $($arg:tt)+) => {
        $crate::check_in_range($value, $lower, $upper, ::core::format_args!($($arg)+))
    };
}

/// Expands to [`check_in_range_epsilon`](fn@crate::check_in_range_epsilon) with a
/// formatted message.
#[macro_export]
macro_rules! check_in_range_epsilon {
    ($value:expr, $lower:expr, $upper:expr, $epsilon:expr, $($arg:tt)+) => {
        $crate::check_in_range_epsilon(
            $value,
            $lower,
            $upper,
            $epsilon,
            ::core::format_args!($($arg)+),
        )
    };
}
