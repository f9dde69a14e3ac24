//! Error types for runt-rs.
//!
//! Every fallible constructor in the workspace reports one of the variants
//! of a single `thiserror`-derived enum. Validation is eager: a malformed
//! expression or range fails where it is built, and evaluation itself never
//! returns an error.
//!
//! The [`ensure_field!`](crate::ensure_field) and
//! [`ensure_range!`](crate::ensure_range) macros are the early-return helpers
//! used by constructors.

use thiserror::Error;

/// The top-level error type used throughout runt-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An nth-weekday ordinal outside `±1..=±5` (most commonly `0`).
    #[error("invalid ordinal {0}: expected a value in -5..=-1 or 1..=5")]
    InvalidOrdinal(i32),

    /// A range whose bounds are logically impossible, even allowing for
    /// wraparound.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A calendar field outside its natural bounds (e.g. hour 25).
    #[error("invalid {field}: {value} out of range [{min}, {max}]")]
    InvalidField {
        /// Name of the offending field (`"hour"`, `"month"`, …).
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A shorthand name that does not denote any known expression.
    #[error("unrecognized shorthand: {0:?}")]
    UnknownShorthand(String),
}

impl Error {
    /// Build an [`Error::InvalidField`] from any integer-like values.
    pub fn invalid_field(
        field: &'static str,
        value: impl Into<i64>,
        min: impl Into<i64>,
        max: impl Into<i64>,
    ) -> Self {
        Error::InvalidField {
            field,
            value: value.into(),
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Shorthand `Result` type used throughout runt-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::InvalidField { .. })` unless `min <= value <= max`.
///
/// # Example
/// ```
/// use runt_core::{ensure_field, errors::{Error, Result}};
/// fn hour(h: u32) -> Result<u32> {
///     ensure_field!("hour", h, 0, 23);
///     Ok(h)
/// }
/// assert!(hour(23).is_ok());
/// assert_eq!(
///     hour(25),
///     Err(Error::InvalidField { field: "hour", value: 25, min: 0, max: 23 })
/// );
/// ```
#[macro_export]
macro_rules! ensure_field {
    ($field:expr, $value:expr, $min:expr, $max:expr) => {{
        let value = i64::from($value);
        let (min, max) = (i64::from($min), i64::from($max));
        if value < min || value > max {
            return Err($crate::errors::Error::InvalidField {
                field: $field,
                value,
                min,
                max,
            });
        }
    }};
}

/// Return `Err(Error::InvalidRange(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use runt_core::{ensure_range, errors::Result};
/// fn ordered(a: i32, b: i32) -> Result<(i32, i32)> {
///     ensure_range!(a <= b, "{a} is after {b}");
///     Ok((a, b))
/// }
/// assert!(ordered(1, 2).is_ok());
/// assert!(ordered(2, 1).is_err());
/// ```
#[macro_export]
macro_rules! ensure_range {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidRange(format!($($msg)*)));
        }
    };
}
