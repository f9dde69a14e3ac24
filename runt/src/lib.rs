//! # runt
//!
//! Temporal expressions: composable, precision-aware predicates that answer
//! "does this point in time satisfy this recurring calendar pattern?".
//!
//! This crate is a **façade** that re-exports the workspace crates.
//! Application code should depend on this crate rather than the individual
//! `runt-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! runt = "0.1"
//! ```
//!
//! ```rust
//! use runt::prelude::*;
//!
//! // Every Tuesday and Thursday morning, except the last Thursday.
//! let rule = ExpressionBuilder::new()
//!     .on(parse_shorthand("tuesday")?)
//!     .possibly(parse_shorthand("thursday")?)
//!     .on(TimeOfDayRange::new(8, 30, 12, 0)?)
//!     .except(NthWeekdayOfMonth::new(LAST, Weekday::Thursday)?)
//!     .build();
//!
//! let mut schedule = Schedule::new();
//! schedule.add(rule, "standup");
//!
//! let march = DateRange::closed(
//!     PrecisionInstant::day(2020, 3, 1)?,
//!     PrecisionInstant::day(2020, 3, 31)?,
//! )?;
//! assert_eq!(schedule.events_in(&march).len(), 8);
//! # Ok::<(), runt::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and process-wide settings.
pub use runt_core as core;

/// Precision-aware instants, weekdays, months, and date ranges.
pub use runt_time as time;

/// The temporal expression algebra.
pub use runt_expr as expr;

/// Event schedules.
pub use runt_schedule as schedule;

/// Expression builder and shorthand names.
pub use runt_sugar as sugar;

/// The names most programs need, in one import.
pub mod prelude {
    pub use runt_core::{Error, Result, ScopedEvaluationInstant, Settings};
    pub use runt_expr::{
        After, And, Before, DayOfMonthRange, DayOfWeek, Empty, Expr, MonthDayRange, Not,
        NthWeekdayOfMonth, Or, TemporalExpression, TimeOfDayRange, WeekRange, YearInstant,
    };
    pub use runt_schedule::Schedule;
    pub use runt_sugar::{parse_shorthand, ExpressionBuilder, Shorthand};
    pub use runt_time::names::{FIFTH, FIRST, FOURTH, LAST, SECOND, SECOND_TO_LAST, THIRD};
    pub use runt_time::{DateRange, Month, Precision, PrecisionInstant, Weekday};
}
