//! # runt-time
//!
//! Precision-aware instants, weekday and month types, the name lookup
//! tables, calendar helpers, and date ranges.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Leap-year and month-length helpers.
pub mod calendar;

/// `DateRange` — an interval of instants with open or closed endpoints.
pub mod date_range;

/// `PrecisionInstant` — a timestamp tagged with a `Precision`.
pub mod instant;

/// `Month` — month of the year.
pub mod month;

/// Day, month, and ordinal name tables.
pub mod names;

/// `Precision` — calendar granularity.
pub mod precision;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{days_in_month, is_leap_year};
pub use date_range::{DateRange, Steps};
pub use instant::PrecisionInstant;
pub use month::Month;
pub use names::{day_name, day_number, month_name, month_number};
pub use precision::Precision;
pub use weekday::Weekday;
