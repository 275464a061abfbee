/// Panics with a formatted message unless the predicate holds.
///
/// ```should_panic
/// precond::assert_true!(1 + 1 == 3, "arithmetic broke for {}", 1);
/// ```
#[macro_export]
macro_rules! assert_true {
    ($predicate:expr, $($arg:tt)+) => {
        $crate::assert_true($predicate, ::core::format_args!($($arg)+))
    };
}

/// Panics with a formatted message if the predicate holds.
#[macro_export]
macro_rules! assert_false {
    ($anti_predicate:expr, $($arg:tt)+) => {
        $crate::assert_false($anti_predicate, ::core::format_args!($($arg)+))
    };
}

/// Panics with a formatted message if the value is `Some`.
#[macro_export]
macro_rules! assert_nil {
    ($value:expr, $($arg:tt)+) => {
        $crate::assert_nil($value, ::core::format_args!($($arg)+))
    };
}

/// Unwraps the value or panics with a formatted message.
///
/// ```
/// let port = precond::assert_not_nil!(Some(8080_u16), "port is required");
/// assert_eq!(port, 8080);
/// ```
#[macro_export]
macro_rules! assert_not_nil {
    ($value:expr, $($arg:tt)+) => {
        $crate::assert_not_nil($value, ::core::format_args!($($arg)+))
    };
}

/// Panics with a formatted message unless the value lies in `<lower, upper>`.
#[macro_export]
macro_rules! assert_in_range {
    ($value:expr, $lower:expr, $upper:expr, $($arg:tt)+) => {
        $crate::assert_in_range($value, $lower, $upper, ::core::format_args!($($arg)+))
    };
}

/// Panics with a formatted message unless the value lies in `<lower, upper>`
/// widened by the given epsilon.
#[macro_export]
macro_rules! assert_in_range_epsilon {
    ($value:expr, $lower:expr, $upper:expr, $epsilon:expr, $($arg:tt)+) => {
        $crate::assert_in_range_epsilon(
            $value,
            $lower,
            $upper,
            $epsilon,
            ::core::format_args!($($arg)+),
        )
    };
}
