//! Time-of-day expressions.

use std::fmt;

use runt_core::ensure_field;
use runt_core::errors::Result;
use runt_time::{Precision, PrecisionInstant};

use crate::expression::TemporalExpression;

/// Matches instants whose time of day lies in an inclusive range, with
/// minute resolution.
///
/// When the end time is earlier than the start time the range crosses
/// midnight: `TimeOfDayRange::new(22, 0, 2, 30)` covers 22:00–02:30.
///
/// Day-precision (or coarser) instants carry no time of day. By default they
/// match any time range; with
/// [`with_less_precise_match(false)`](TimeOfDayRange::with_less_precise_match)
/// they are evaluated as midnight instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeOfDayRange {
    start: (u32, u32),
    end: (u32, u32),
    less_precise_match: bool,
}

impl TimeOfDayRange {
    /// Every day from `start_hour:start_minute` to `end_hour:end_minute`.
    ///
    /// # Errors
    /// `InvalidField` if an hour is above 23 or a minute above 59.
    pub fn new(start_hour: u32, start_minute: u32, end_hour: u32, end_minute: u32) -> Result<Self> {
        ensure_field!("hour", start_hour, 0, 23);
        ensure_field!("minute", start_minute, 0, 59);
        ensure_field!("hour", end_hour, 0, 23);
        ensure_field!("minute", end_minute, 0, 59);
        Ok(Self {
            start: (start_hour, start_minute),
            end: (end_hour, end_minute),
            less_precise_match: true,
        })
    }

    /// Whether instants without a time of day match the range.
    pub fn with_less_precise_match(mut self, flag: bool) -> Self {
        self.less_precise_match = flag;
        self
    }

    /// `true` if the range crosses midnight.
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }
}

impl TemporalExpression for TimeOfDayRange {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        if self.less_precise_match && instant.precision() <= Precision::Day {
            return true;
        }
        let t = (instant.hour_of_day(), instant.minute_of_hour());
        if self.wraps() {
            t >= self.start || t <= self.end
        } else {
            self.start <= t && t <= self.end
        }
    }
}

impl fmt::Display for TimeOfDayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from {:02}:{:02} to {:02}:{:02} daily",
            self.start.0, self.start.1, self.end.0, self.end.1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runt_core::Error;

    fn at(h: u32, m: u32) -> PrecisionInstant {
        PrecisionInstant::minute(2020, 3, 3, h, m).unwrap()
    }

    #[test]
    fn inclusive_bounds() {
        let r = TimeOfDayRange::new(8, 30, 9, 45).unwrap();
        assert!(r.contains(&at(8, 30)));
        assert!(r.contains(&at(9, 0)));
        assert!(r.contains(&at(9, 45)));
        assert!(!r.contains(&at(9, 46)));
        assert!(!r.contains(&at(8, 29)));
        // Seconds within the last minute still match.
        assert!(r.contains(&PrecisionInstant::second(2020, 3, 3, 9, 45, 59).unwrap()));
    }

    #[test]
    fn crossing_midnight() {
        let r = TimeOfDayRange::new(22, 0, 2, 30).unwrap();
        assert!(r.wraps());
        assert!(r.contains(&at(23, 15)));
        assert!(r.contains(&at(0, 0)));
        assert!(r.contains(&at(2, 30)));
        assert!(!r.contains(&at(2, 31)));
        assert!(!r.contains(&at(12, 0)));
    }

    #[test]
    fn less_precise_instants() {
        let day = PrecisionInstant::day(2020, 3, 3).unwrap();
        let r = TimeOfDayRange::new(8, 30, 9, 45).unwrap();
        assert!(r.contains(&day));
        assert!(!r.with_less_precise_match(false).contains(&day));
        let midnight = TimeOfDayRange::new(0, 0, 0, 10).unwrap().with_less_precise_match(false);
        assert!(midnight.contains(&day));
    }

    #[test]
    fn hour_precision_is_evaluated() {
        let r = TimeOfDayRange::new(8, 30, 9, 45).unwrap();
        assert!(!r.contains(&PrecisionInstant::hour(2020, 3, 3, 8).unwrap()));
        assert!(r.contains(&PrecisionInstant::hour(2020, 3, 3, 9).unwrap()));
    }

    #[test]
    fn rejects_out_of_range_fields() {
        assert_eq!(
            TimeOfDayRange::new(25, 0, 9, 0).unwrap_err(),
            Error::invalid_field("hour", 25, 0, 23)
        );
        assert!(TimeOfDayRange::new(8, 60, 9, 0).is_err());
    }

    #[test]
    fn display() {
        let r = TimeOfDayRange::new(8, 30, 21, 45).unwrap();
        assert_eq!(r.to_string(), "from 08:30 to 21:45 daily");
    }
}
