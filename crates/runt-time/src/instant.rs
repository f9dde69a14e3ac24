//! `PrecisionInstant` — a calendar timestamp tagged with a [`Precision`].
//!
//! Instants are built from `chrono` values: a `NaiveDate` defaults to
//! [`Precision::Day`], a `NaiveDateTime` to [`Precision::Second`]. An explicit
//! precision finer than the source can carry is capped, so a date-only value
//! never claims hour resolution. The stored timestamp is truncated to the
//! precision at construction.
//!
//! # Comparison
//! Two instants are compared at the coarser of their two precisions: a
//! day-precision 2020-03-01 equals a second-precision 2020-03-01T14:22:09.
//! This equality is not transitive across three instants of three different
//! precisions, so `PrecisionInstant` implements `PartialEq` and `PartialOrd`
//! but neither `Eq`, `Ord`, nor `Hash`.

use std::cmp::Ordering;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use runt_core::ensure_field;
use runt_core::errors::{Error, Result};
use runt_core::Settings;

use crate::calendar::days_in_month;
use crate::precision::Precision;
use crate::weekday::Weekday;

/// A timestamp paired with the granularity it is meaningful at.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrecisionInstant {
    timestamp: NaiveDateTime,
    precision: Precision,
}

impl PrecisionInstant {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Wrap a date-only value at [`Precision::Day`].
    pub fn from_date(date: NaiveDate) -> Self {
        Self::from_date_with_precision(date, Precision::Day)
    }

    /// Wrap a date-only value at `precision`, capped to `Day`.
    pub fn from_date_with_precision(date: NaiveDate, precision: Precision) -> Self {
        Self::from_datetime_with_precision(
            date.and_time(NaiveTime::default()),
            precision.min(Precision::Day),
        )
    }

    /// Wrap a date-time value at [`Precision::Second`].
    pub fn from_datetime(ts: NaiveDateTime) -> Self {
        Self::from_datetime_with_precision(ts, Precision::Second)
    }

    /// Wrap a date-time value at `precision`.
    pub fn from_datetime_with_precision(ts: NaiveDateTime, precision: Precision) -> Self {
        Self {
            timestamp: precision.truncate(ts),
            precision,
        }
    }

    /// The current instant at second precision.
    ///
    /// Honours the evaluation-instant override in [`Settings`].
    pub fn now() -> Self {
        Self::from_datetime(Settings::instance().now())
    }

    /// A year-precision instant.
    pub fn year(year: i32) -> Result<Self> {
        Self::build(Precision::Year, year, 1, 1, 0, 0, 0)
    }

    /// A month-precision instant.
    pub fn month(year: i32, month: u32) -> Result<Self> {
        Self::build(Precision::Month, year, month, 1, 0, 0, 0)
    }

    /// A day-precision instant.
    pub fn day(year: i32, month: u32, day: u32) -> Result<Self> {
        Self::build(Precision::Day, year, month, day, 0, 0, 0)
    }

    /// An hour-precision instant.
    pub fn hour(year: i32, month: u32, day: u32, hour: u32) -> Result<Self> {
        Self::build(Precision::Hour, year, month, day, hour, 0, 0)
    }

    /// A minute-precision instant.
    pub fn minute(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Result<Self> {
        Self::build(Precision::Minute, year, month, day, hour, minute, 0)
    }

    /// A second-precision instant.
    pub fn second(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        Self::build(Precision::Second, year, month, day, hour, minute, second)
    }

    fn build(
        precision: Precision,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self> {
        ensure_field!("year", year, NaiveDate::MIN.year(), NaiveDate::MAX.year());
        ensure_field!("month", month, 1, 12);
        ensure_field!("day", day, 1, days_in_month(year, month));
        ensure_field!("hour", hour, 0, 23);
        ensure_field!("minute", minute, 0, 59);
        ensure_field!("second", second, 0, 59);
        let ts = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, minute, second))
            // Only reachable at the very edges of chrono's supported years.
            .ok_or_else(|| {
                Error::invalid_field("year", year, NaiveDate::MIN.year(), NaiveDate::MAX.year())
            })?;
        Ok(Self::from_datetime_with_precision(ts, precision))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The (truncated) timestamp.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// The calendar date of the timestamp.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    /// The precision tag.
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Calendar year.
    pub fn year_number(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month of the year (1–12).
    pub fn month_number(&self) -> u32 {
        self.timestamp.month()
    }

    /// Day of the month (1–31).
    pub fn day_of_month(&self) -> u32 {
        self.timestamp.day()
    }

    /// Hour of the day (0–23); `0` below hour precision.
    pub fn hour_of_day(&self) -> u32 {
        self.timestamp.hour()
    }

    /// Minute of the hour (0–59); `0` below minute precision.
    pub fn minute_of_hour(&self) -> u32 {
        self.timestamp.minute()
    }

    /// Second of the minute (0–59); `0` below second precision.
    pub fn second_of_minute(&self) -> u32 {
        self.timestamp.second()
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday().into()
    }

    /// Number of days in this instant's month.
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year_number(), self.month_number())
    }

    // ── Comparison & arithmetic ───────────────────────────────────────────────

    /// Compare at the coarser of the two precisions.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.precision
            .min(other.precision)
            .compare(&self.timestamp, &other.timestamp)
    }

    /// `true` if both instants agree down to the coarser precision.
    pub fn equal(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }

    /// The same instant at a coarser (or equal) precision. A finer request is
    /// capped to the current precision.
    pub fn truncate_to(&self, precision: Precision) -> Self {
        Self::from_datetime_with_precision(self.timestamp, precision.min(self.precision))
    }

    /// The next instant, one unit of this instant's precision later.
    ///
    /// Returns `None` past the end of the supported calendar.
    pub fn succ(&self) -> Option<Self> {
        let ts = self.timestamp;
        let next = match self.precision {
            Precision::Year => ts.checked_add_months(Months::new(12)),
            Precision::Month => ts.checked_add_months(Months::new(1)),
            Precision::Day => ts.checked_add_signed(Duration::days(1)),
            Precision::Hour => ts.checked_add_signed(Duration::hours(1)),
            Precision::Minute => ts.checked_add_signed(Duration::minutes(1)),
            Precision::Second => ts.checked_add_signed(Duration::seconds(1)),
        }?;
        Some(Self::from_datetime_with_precision(next, self.precision))
    }
}

impl PartialEq for PrecisionInstant {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl PartialOrd for PrecisionInstant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl From<NaiveDate> for PrecisionInstant {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

impl From<NaiveDateTime> for PrecisionInstant {
    fn from(ts: NaiveDateTime) -> Self {
        Self::from_datetime(ts)
    }
}

impl std::fmt::Display for PrecisionInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let pattern = match self.precision {
            Precision::Year => "%Y",
            Precision::Month => "%Y-%m",
            Precision::Day => "%Y-%m-%d",
            Precision::Hour => "%Y-%m-%dT%H",
            Precision::Minute => "%Y-%m-%dT%H:%M",
            Precision::Second => "%Y-%m-%dT%H:%M:%S",
        };
        write!(f, "{}", self.timestamp.format(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_defaults_to_day_precision() {
        let d = NaiveDate::from_ymd_opt(2020, 3, 1).unwrap();
        assert_eq!(PrecisionInstant::from_date(d).precision(), Precision::Day);
        // A finer request is capped to the native resolution.
        let capped = PrecisionInstant::from_date_with_precision(d, Precision::Minute);
        assert_eq!(capped.precision(), Precision::Day);
        let coarser = PrecisionInstant::from_date_with_precision(d, Precision::Month);
        assert_eq!(coarser.precision(), Precision::Month);
    }

    #[test]
    fn datetime_defaults_to_second_precision() {
        let ts = NaiveDate::from_ymd_opt(2020, 3, 1)
            .unwrap()
            .and_hms_opt(14, 22, 9)
            .unwrap();
        let i = PrecisionInstant::from(ts);
        assert_eq!(i.precision(), Precision::Second);
        assert_eq!(i.second_of_minute(), 9);
    }

    #[test]
    fn mixed_precision_equality() {
        let day = PrecisionInstant::day(2020, 3, 1).unwrap();
        let sec = PrecisionInstant::second(2020, 3, 1, 14, 22, 9).unwrap();
        assert_eq!(day, sec);
        assert!(PrecisionInstant::day(2020, 3, 2).unwrap() > sec);
    }

    #[test]
    fn equality_is_not_transitive() {
        let a = PrecisionInstant::minute(2020, 3, 1, 10, 15).unwrap();
        let b = PrecisionInstant::day(2020, 3, 1).unwrap();
        let c = PrecisionInstant::minute(2020, 3, 1, 18, 40).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn construction_truncates() {
        let ts = NaiveDate::from_ymd_opt(2006, 12, 9)
            .unwrap()
            .and_hms_opt(5, 56, 12)
            .unwrap();
        let i = PrecisionInstant::from_datetime_with_precision(ts, Precision::Minute);
        assert_eq!(i.second_of_minute(), 0);
        assert_eq!(i.to_string(), "2006-12-09T05:56");
    }

    #[test]
    fn invalid_fields_are_rejected() {
        assert_eq!(
            PrecisionInstant::day(2023, 2, 29).unwrap_err(),
            Error::invalid_field("day", 29, 1, 28)
        );
        assert!(PrecisionInstant::hour(2023, 1, 1, 25).is_err());
        assert!(PrecisionInstant::month(2023, 13).is_err());
        assert!(PrecisionInstant::day(2024, 2, 29).is_ok());
    }

    #[test]
    fn succ_steps_by_precision() {
        let jan31 = PrecisionInstant::day(2024, 1, 31).unwrap();
        assert_eq!(jan31.succ().unwrap().to_string(), "2024-02-01");
        let dec = PrecisionInstant::month(2023, 12).unwrap();
        assert_eq!(dec.succ().unwrap().to_string(), "2024-01");
        let late = PrecisionInstant::minute(2023, 12, 31, 23, 59).unwrap();
        assert_eq!(late.succ().unwrap().to_string(), "2024-01-01T00:00");
    }

    #[test]
    fn weekday_and_month_length() {
        let i = PrecisionInstant::day(2024, 2, 23).unwrap();
        assert_eq!(i.weekday(), Weekday::Friday);
        assert_eq!(i.days_in_month(), 29);
    }
}
