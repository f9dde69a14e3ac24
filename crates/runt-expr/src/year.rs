//! Month/day-in-year and single-year expressions.

use std::fmt;

use runt_core::ensure_field;
use runt_core::errors::{Error, Result};
use runt_time::{Month, PrecisionInstant};

use crate::expression::TemporalExpression;

/// Matches instants whose (month, day) lies in an inclusive range, every
/// year.
///
/// When the end is earlier in the year than the start the range wraps from
/// December into January: `MonthDayRange::new(12, 15, 1, 15)` covers the
/// month around new year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthDayRange {
    start: (Month, u32),
    end: (Month, u32),
}

impl MonthDayRange {
    /// Every year from `start_month`/`start_day` through `end_month`/`end_day`.
    ///
    /// # Errors
    /// `InvalidField` if a month is outside `1..=12` or a day is outside the
    /// longest form of its month (February 29 is accepted).
    pub fn new(start_month: u32, start_day: u32, end_month: u32, end_day: u32) -> Result<Self> {
        Ok(Self {
            start: month_day(start_month, start_day)?,
            end: month_day(end_month, end_day)?,
        })
    }

    /// The whole of `month`, every year.
    pub fn month(month: u32) -> Result<Self> {
        let (m, _) = month_day(month, 1)?;
        Ok(Self {
            start: (m, 1),
            end: (m, m.max_days()),
        })
    }

    /// A single calendar day every year.
    pub fn day(month: u32, day: u32) -> Result<Self> {
        Self::new(month, day, month, day)
    }

    /// `true` if the range crosses from December into January.
    pub fn wraps(&self) -> bool {
        self.end < self.start
    }
}

fn month_day(month: u32, day: u32) -> Result<(Month, u32)> {
    ensure_field!("month", month, 1, 12);
    let m = u8::try_from(month)
        .ok()
        .and_then(Month::from_number)
        .ok_or_else(|| Error::invalid_field("month", month, 1, 12))?;
    ensure_field!("day", day, 1, m.max_days());
    Ok((m, day))
}

impl TemporalExpression for MonthDayRange {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        let Some(month) = u8::try_from(instant.month_number())
            .ok()
            .and_then(Month::from_number)
        else {
            return false;
        };
        let key = (month, instant.day_of_month());
        if self.wraps() {
            key >= self.start || key <= self.end
        } else {
            self.start <= key && key <= self.end
        }
    }
}

impl fmt::Display for MonthDayRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "from {} {} to {} {} yearly",
            self.start.0, self.start.1, self.end.0, self.end.1
        )
    }
}

/// Matches every instant within one calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearInstant {
    year: i32,
}

impl YearInstant {
    /// Any instant during `year`.
    pub fn new(year: i32) -> Self {
        Self { year }
    }
}

impl TemporalExpression for YearInstant {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        instant.year_number() == self.year
    }
}

impl fmt::Display for YearInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "during {}", self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> PrecisionInstant {
        PrecisionInstant::day(y, m, d).unwrap()
    }

    #[test]
    fn march_15_to_june_1() {
        let r = MonthDayRange::new(3, 15, 6, 1).unwrap();
        assert!(r.contains(&day(2021, 4, 10)));
        assert!(r.contains(&day(2021, 3, 15)));
        assert!(r.contains(&day(2021, 6, 1)));
        assert!(!r.contains(&day(2021, 6, 2)));
        assert!(!r.contains(&day(2021, 3, 14)));
        assert!(!r.contains(&day(2021, 7, 1)));
    }

    #[test]
    fn wraps_over_new_year() {
        let r = MonthDayRange::new(12, 15, 1, 15).unwrap();
        assert!(r.wraps());
        assert!(r.contains(&day(2021, 12, 31)));
        assert!(r.contains(&day(2022, 1, 1)));
        assert!(r.contains(&day(2022, 1, 15)));
        assert!(!r.contains(&day(2022, 1, 16)));
        assert!(!r.contains(&day(2022, 6, 1)));
    }

    #[test]
    fn whole_month() {
        let dec = MonthDayRange::month(12).unwrap();
        let ts = PrecisionInstant::second(2016, 12, 28, 10, 30, 0).unwrap();
        assert!(dec.contains(&ts));
        assert!(dec.contains(&day(2017, 12, 31)));
        assert!(!dec.contains(&day(2017, 11, 29)));

        let feb = MonthDayRange::month(2).unwrap();
        assert!(feb.contains(&day(2024, 2, 29)));
    }

    #[test]
    fn single_day_each_year() {
        let xmas = MonthDayRange::day(12, 25).unwrap();
        assert!(xmas.contains(&day(1999, 12, 25)));
        assert!(!xmas.contains(&day(1999, 12, 24)));
    }

    #[test]
    fn validation() {
        assert_eq!(
            MonthDayRange::new(13, 1, 1, 1).unwrap_err(),
            Error::invalid_field("month", 13, 1, 12)
        );
        assert_eq!(
            MonthDayRange::new(4, 31, 5, 1).unwrap_err(),
            Error::invalid_field("day", 31, 1, 30)
        );
        assert!(MonthDayRange::day(2, 29).is_ok());
        assert!(MonthDayRange::day(2, 30).is_err());
    }

    #[test]
    fn year_instant() {
        let y = YearInstant::new(2010);
        assert!(y.contains(&PrecisionInstant::second(2010, 1, 15, 10, 30, 0).unwrap()));
        assert!(y.contains(&PrecisionInstant::year(2010).unwrap()));
        assert!(!y.contains(&PrecisionInstant::second(2011, 11, 29, 10, 30, 0).unwrap()));
    }

    #[test]
    fn display() {
        assert_eq!(
            MonthDayRange::new(3, 15, 6, 1).unwrap().to_string(),
            "from March 15 to June 1 yearly"
        );
        assert_eq!(YearInstant::new(2010).to_string(), "during 2010");
    }
}
