//! # runt-expr
//!
//! Temporal expressions: predicates over [`PrecisionInstant`]s that answer
//! "does this instant satisfy the recurring pattern?".
//!
//! Leaf expressions test one calendar aspect of an instant (its weekday,
//! time of day, day of month, …). Composite expressions combine two
//! sub-expressions as set intersection ([`And`]), union ([`Or`]), or
//! difference ([`Not`]). All expressions are immutable and shared through
//! the cheap-to-clone [`Expr`] handle.
//!
//! ```
//! use runt_expr::{DayOfWeek, TimeOfDayRange, TemporalExpression};
//! use runt_time::{PrecisionInstant, Weekday};
//!
//! let tuesday_mornings = DayOfWeek::new(Weekday::Tuesday)
//!     .into_expr()
//!     .and(TimeOfDayRange::new(8, 30, 9, 45)?);
//!
//! let instant = PrecisionInstant::minute(2020, 3, 3, 9, 0)?;
//! assert!(tuesday_mornings.contains(&instant));
//! # Ok::<(), runt_core::Error>(())
//! ```
//!
//! [`PrecisionInstant`]: runt_time::PrecisionInstant

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Open half-lines: `Before` and `After`.
pub mod boundary;

/// Set-algebra composites: `And`, `Or`, `Not`, and `Empty`.
pub mod composite;

/// Time-of-day expressions.
pub mod day;

/// The `TemporalExpression` trait and the `Expr` handle.
pub mod expression;

/// Day-of-month and nth-weekday-of-month expressions.
pub mod month;

/// Weekday expressions.
pub mod week;

/// Month/day-in-year and single-year expressions.
pub mod year;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use boundary::{After, Before};
pub use composite::{And, Empty, Not, Or};
pub use day::TimeOfDayRange;
pub use expression::{Expr, TemporalExpression};
pub use month::{DayOfMonthRange, NthWeekdayOfMonth};
pub use week::{DayOfWeek, WeekRange};
pub use year::{MonthDayRange, YearInstant};
