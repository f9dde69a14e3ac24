//! Day-of-month and nth-weekday-of-month expressions.
//!
//! Both accept negative indices counted from the end of the month. They are
//! resolved per month at evaluation time, so `-1` is the 28th, 29th, 30th,
//! or 31st depending on the month being tested.

use std::fmt;

use runt_core::errors::{Error, Result};
use runt_core::{ensure_field, ensure_range};
use runt_time::calendar::{occurrence_from_end, occurrence_from_start, resolve_day_index};
use runt_time::{PrecisionInstant, Weekday};

use crate::expression::{ordinal_suffixed, TemporalExpression};

/// Matches instants whose day of month lies in an inclusive range.
///
/// The range does not wrap into the following month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfMonthRange {
    start: i32,
    end: i32,
}

impl DayOfMonthRange {
    /// Every month from day `start` through day `end`.
    ///
    /// # Errors
    /// * `InvalidField` if either bound is `0` or beyond `±31`.
    /// * `InvalidRange` if both bounds have the same sign and `start > end`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        check_day_index(start)?;
        check_day_index(end)?;
        ensure_range!(
            start.signum() != end.signum() || start <= end,
            "day of month {start} is after {end}"
        );
        Ok(Self { start, end })
    }

    /// A single day every month.
    pub fn single(day: i32) -> Result<Self> {
        Self::new(day, day)
    }
}

fn check_day_index(day: i32) -> Result<()> {
    ensure_field!("day of month", day, -31, 31);
    if day == 0 {
        return Err(Error::invalid_field("day of month", 0, 1, 31));
    }
    Ok(())
}

impl TemporalExpression for DayOfMonthRange {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        let len = instant.days_in_month();
        let day = i64::from(instant.day_of_month());
        resolve_day_index(self.start, len) <= day && day <= resolve_day_index(self.end, len)
    }
}

impl fmt::Display for DayOfMonthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "the {} of every month", day_label(self.start))
        } else {
            write!(
                f,
                "from the {} to the {} of every month",
                day_label(self.start),
                day_label(self.end)
            )
        }
    }
}

fn day_label(index: i32) -> String {
    match index {
        -1 => "last day".to_string(),
        i if i < 0 => format!("{} to last day", ordinal_suffixed(i64::from(-i))),
        i => ordinal_suffixed(i64::from(i)),
    }
}

/// Matches the n-th occurrence of a weekday within its month.
///
/// Positive ordinals count from the start of the month (`1` = first),
/// negative ones from the end (`-1` = last). A month with fewer than `|n|`
/// occurrences of the weekday simply has no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NthWeekdayOfMonth {
    ordinal: i32,
    day: Weekday,
}

impl NthWeekdayOfMonth {
    /// The `ordinal`-th `day` of every month.
    ///
    /// # Errors
    /// `InvalidOrdinal` unless `ordinal` is in `-5..=-1` or `1..=5`.
    pub fn new(ordinal: i32, day: Weekday) -> Result<Self> {
        if ordinal == 0 || !(-5..=5).contains(&ordinal) {
            return Err(Error::InvalidOrdinal(ordinal));
        }
        Ok(Self { ordinal, day })
    }

    /// The signed ordinal.
    pub fn ordinal(&self) -> i32 {
        self.ordinal
    }

    /// The weekday matched.
    pub fn day(&self) -> Weekday {
        self.day
    }
}

impl TemporalExpression for NthWeekdayOfMonth {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        if instant.weekday() != self.day {
            return false;
        }
        let dom = instant.day_of_month();
        let n = if self.ordinal > 0 {
            occurrence_from_start(dom)
        } else {
            occurrence_from_end(dom, instant.days_in_month())
        };
        i64::from(n) == i64::from(self.ordinal).abs()
    }
}

impl fmt::Display for NthWeekdayOfMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const WORDS: [&str; 5] = ["first", "second", "third", "fourth", "fifth"];
        let word = WORDS[self.ordinal.unsigned_abs() as usize - 1];
        match self.ordinal {
            -1 => write!(f, "last {} of the month", self.day),
            o if o < 0 => write!(f, "{word} to last {} of the month", self.day),
            _ => write!(f, "{word} {} of the month", self.day),
        }
    }
}
