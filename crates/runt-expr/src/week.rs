//! Weekday expressions.

use std::fmt;

use runt_time::{PrecisionInstant, Weekday};

use crate::expression::TemporalExpression;

/// Matches every instant falling on a given weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DayOfWeek {
    day: Weekday,
}

impl DayOfWeek {
    /// Every `day`.
    pub fn new(day: Weekday) -> Self {
        Self { day }
    }

    /// The weekday matched.
    pub fn day(&self) -> Weekday {
        self.day
    }
}

impl TemporalExpression for DayOfWeek {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        instant.weekday() == self.day
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {}", self.day)
    }
}

/// Matches instants whose weekday lies in an inclusive circular range.
///
/// When `start > end` (in Monday-first order) the range wraps past Sunday:
/// `WeekRange::new(Friday, Monday)` covers Friday through Monday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRange {
    start: Weekday,
    end: Weekday,
}

impl WeekRange {
    /// Every day from `start` through `end`.
    pub fn new(start: Weekday, end: Weekday) -> Self {
        Self { start, end }
    }
}

impl TemporalExpression for WeekRange {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        instant.weekday().within(self.start, self.end)
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "every {} through {}", self.start, self.end)
    }
}
