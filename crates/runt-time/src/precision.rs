//! `Precision` — calendar granularity of an instant.
//!
//! Precisions are ordered coarsest to finest, so `Precision::Year <
//! Precision::Second` and `a.min(b)` picks the coarser of the two. Two
//! instants of different precision are compared at the coarser one.

use std::cmp::Ordering;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

/// Calendar granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Precision {
    /// Calendar year.
    Year,
    /// Calendar month.
    Month,
    /// Calendar day.
    Day,
    /// Hour of the day.
    Hour,
    /// Minute of the hour.
    Minute,
    /// Second of the minute.
    Second,
}

impl Precision {
    /// All precisions, coarsest first.
    pub const ALL: [Precision; 6] = [
        Precision::Year,
        Precision::Month,
        Precision::Day,
        Precision::Hour,
        Precision::Minute,
        Precision::Second,
    ];

    /// How many of the (year, month, day, hour, minute, second) fields this
    /// precision carries.
    pub fn depth(self) -> usize {
        self as usize + 1
    }

    /// Reset every field of `ts` finer than `self` to its minimum (months
    /// and days to 1, time fields to 0). Sub-second parts are always dropped.
    pub fn truncate(self, ts: NaiveDateTime) -> NaiveDateTime {
        let depth = self.depth();
        let keep = |i: usize, value: u32, floor: u32| if i < depth { value } else { floor };
        NaiveDate::from_ymd_opt(ts.year(), keep(1, ts.month(), 1), keep(2, ts.day(), 1))
            .and_then(|date| {
                date.and_hms_opt(
                    keep(3, ts.hour(), 0),
                    keep(4, ts.minute(), 0),
                    keep(5, ts.second(), 0),
                )
            })
            // Lowering fields of a valid timestamp never leaves the calendar.
            .unwrap_or(ts)
    }

    /// Compare `a` and `b` field by field, down to and including `self`.
    pub fn compare(self, a: &NaiveDateTime, b: &NaiveDateTime) -> Ordering {
        let depth = self.depth();
        fields(a)[..depth].cmp(&fields(b)[..depth])
    }
}

/// (year, month, day, hour, minute, second) of `ts`.
pub(crate) fn fields(ts: &NaiveDateTime) -> [i64; 6] {
    [
        i64::from(ts.year()),
        i64::from(ts.month()),
        i64::from(ts.day()),
        i64::from(ts.hour()),
        i64::from(ts.minute()),
        i64::from(ts.second()),
    ]
}

impl std::fmt::Display for Precision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Precision::Year => "year",
            Precision::Month => "month",
            Precision::Day => "day",
            Precision::Hour => "hour",
            Precision::Minute => "minute",
            Precision::Second => "second",
        };
        f.write_str(name)
    }
}
