//! `DateRange` — an interval of instants with open or closed endpoints.
//!
//! Endpoints are [`PrecisionInstant`]s and every comparison uses the
//! precision-aware ordering, so a day-precision endpoint covers the whole
//! day. A range is validated when it is built: `start > end` is rejected
//! with [`Error::InvalidRange`](runt_core::Error::InvalidRange), and an
//! existing `DateRange` is never inverted.
//!
//! Emptiness and overlap are decided over the instants `contains` accepts,
//! stepped at the finest endpoint precision. `(2020-03-01, 2020-03-02)` at
//! day precision holds no instant and is therefore empty.

use std::cmp::Ordering;
use std::iter::FusedIterator;

use runt_core::ensure_range;
use runt_core::errors::Result;

use crate::instant::PrecisionInstant;
use crate::precision::Precision;

/// An interval `start..end` with independently inclusive or exclusive bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRange {
    start: PrecisionInstant,
    end: PrecisionInstant,
    start_inclusive: bool,
    end_inclusive: bool,
}

impl DateRange {
    /// Build a range, failing with `InvalidRange` if `start > end`.
    pub fn new(
        start: PrecisionInstant,
        end: PrecisionInstant,
        start_inclusive: bool,
        end_inclusive: bool,
    ) -> Result<Self> {
        ensure_range!(
            start.compare(&end) != Ordering::Greater,
            "start {start} is after end {end}"
        );
        Ok(Self {
            start,
            end,
            start_inclusive,
            end_inclusive,
        })
    }

    /// `[start, end]`
    pub fn closed(start: PrecisionInstant, end: PrecisionInstant) -> Result<Self> {
        Self::new(start, end, true, true)
    }

    /// `(start, end)`
    pub fn open(start: PrecisionInstant, end: PrecisionInstant) -> Result<Self> {
        Self::new(start, end, false, false)
    }

    /// `[start, end)`
    pub fn half_open(start: PrecisionInstant, end: PrecisionInstant) -> Result<Self> {
        Self::new(start, end, true, false)
    }

    /// Lower bound.
    pub fn start(&self) -> PrecisionInstant {
        self.start
    }

    /// Upper bound.
    pub fn end(&self) -> PrecisionInstant {
        self.end
    }

    /// Whether the lower bound belongs to the range.
    pub fn start_inclusive(&self) -> bool {
        self.start_inclusive
    }

    /// Whether the upper bound belongs to the range.
    pub fn end_inclusive(&self) -> bool {
        self.end_inclusive
    }

    /// `true` if no instant lies within the range: a degenerate range with an
    /// exclusive bound, or an open range between adjacent instants.
    pub fn is_empty(&self) -> bool {
        !self
            .first_at(self.finest())
            .is_some_and(|first| self.contains(&first))
    }

    /// Whether `instant` lies within the range.
    pub fn contains(&self, instant: &PrecisionInstant) -> bool {
        let after_start = match instant.compare(&self.start) {
            Ordering::Greater => true,
            Ordering::Equal => self.start_inclusive,
            Ordering::Less => false,
        };
        let before_end = match instant.compare(&self.end) {
            Ordering::Less => true,
            Ordering::Equal => self.end_inclusive,
            Ordering::Greater => false,
        };
        after_start && before_end
    }

    /// Whether the two ranges share at least one instant.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        let precision = self.finest().max(other.finest());
        let (Some(a), Some(b)) = (self.first_at(precision), other.first_at(precision)) else {
            return false;
        };
        // Both ranges are contiguous at one precision, so they meet iff the
        // later of their first instants lies in both.
        let first = if a.compare(&b) == Ordering::Less { b } else { a };
        self.contains(&first) && other.contains(&first)
    }

    /// One day-precision instant per calendar day contained in the range, in
    /// ascending order. Each call starts a fresh traversal.
    pub fn days(&self) -> Steps {
        self.steps(Precision::Day)
    }

    /// Every instant of the given precision contained in the range, in
    /// ascending order (`steps(Precision::Hour)` walks hour by hour).
    pub fn steps(&self, precision: Precision) -> Steps {
        Steps {
            cursor: Some(PrecisionInstant::from_datetime_with_precision(
                self.start.timestamp(),
                precision,
            )),
            range: *self,
        }
    }

    fn finest(&self) -> Precision {
        self.start.precision().max(self.end.precision())
    }

    /// The earliest instant of `precision` the lower bound admits.
    fn first_at(&self, precision: Precision) -> Option<PrecisionInstant> {
        let start = if self.start_inclusive {
            self.start
        } else {
            self.start.succ()?
        };
        Some(PrecisionInstant::from_datetime_with_precision(
            start.timestamp(),
            precision,
        ))
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let open = if self.start_inclusive { '[' } else { '(' };
        let close = if self.end_inclusive { ']' } else { ')' };
        write!(f, "{open}{}, {}{close}", self.start, self.end)
    }
}

/// Iterator returned by [`DateRange::days`] and [`DateRange::steps`].
#[derive(Debug, Clone)]
pub struct Steps {
    cursor: Option<PrecisionInstant>,
    range: DateRange,
}

impl Iterator for Steps {
    type Item = PrecisionInstant;

    fn next(&mut self) -> Option<PrecisionInstant> {
        loop {
            let current = self.cursor?;
            if current.compare(&self.range.end) == Ordering::Greater {
                self.cursor = None;
                return None;
            }
            self.cursor = current.succ();
            if self.range.contains(&current) {
                return Some(current);
            }
        }
    }
}

impl FusedIterator for Steps {}

#[cfg(test)]
mod tests {
    use super::*;
    use runt_core::Error;

    fn day(y: i32, m: u32, d: u32) -> PrecisionInstant {
        PrecisionInstant::day(y, m, d).unwrap()
    }

    #[test]
    fn inverted_range_is_rejected() {
        let err = DateRange::closed(day(2020, 3, 2), day(2020, 3, 1)).unwrap_err();
        assert!(matches!(err, Error::InvalidRange(_)));
    }

    #[test]
    fn degenerate_ranges() {
        let d = day(2020, 3, 1);
        assert!(!DateRange::closed(d, d).unwrap().is_empty());
        assert!(DateRange::half_open(d, d).unwrap().is_empty());
        assert!(!DateRange::half_open(d, d).unwrap().contains(&d));
        assert_eq!(DateRange::open(d, d).unwrap().days().count(), 0);
    }

    #[test]
    fn inclusive_and_exclusive_endpoints() {
        let r = DateRange::half_open(day(2020, 3, 1), day(2020, 3, 31)).unwrap();
        assert!(r.contains(&day(2020, 3, 1)));
        assert!(r.contains(&day(2020, 3, 30)));
        assert!(!r.contains(&day(2020, 3, 31)));
        assert!(!r.contains(&day(2020, 2, 29)));
    }

    #[test]
    fn day_endpoint_covers_the_whole_day() {
        let r = DateRange::closed(day(2020, 3, 1), day(2020, 3, 2)).unwrap();
        let evening = PrecisionInstant::minute(2020, 3, 2, 23, 59).unwrap();
        assert!(r.contains(&evening));
    }

    #[test]
    fn days_are_ascending_and_restartable() {
        let r = DateRange::closed(day(2024, 2, 27), day(2024, 3, 2)).unwrap();
        let first: Vec<String> = r.days().map(|d| d.to_string()).collect();
        assert_eq!(
            first,
            ["2024-02-27", "2024-02-28", "2024-02-29", "2024-03-01", "2024-03-02"]
        );
        assert_eq!(r.days().count(), 5);
    }

    #[test]
    fn open_range_skips_endpoints() {
        let r = DateRange::open(day(2020, 3, 1), day(2020, 3, 4)).unwrap();
        let days: Vec<u32> = r.days().map(|d| d.day_of_month()).collect();
        assert_eq!(days, [2, 3]);
    }

    #[test]
    fn hourly_steps() {
        let start = PrecisionInstant::hour(2020, 3, 1, 22).unwrap();
        let end = PrecisionInstant::hour(2020, 3, 2, 1).unwrap();
        let r = DateRange::closed(start, end).unwrap();
        let hours: Vec<u32> = r.steps(Precision::Hour).map(|h| h.hour_of_day()).collect();
        assert_eq!(hours, [22, 23, 0, 1]);
    }

    #[test]
    fn overlap_honours_open_endpoints() {
        let a = DateRange::half_open(day(2020, 1, 1), day(2020, 2, 1)).unwrap();
        let b = DateRange::closed(day(2020, 2, 1), day(2020, 3, 1)).unwrap();
        let c = DateRange::closed(day(2020, 1, 15), day(2020, 2, 15)).unwrap();
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&b));

        let a_closed = DateRange::closed(day(2020, 1, 1), day(2020, 2, 1)).unwrap();
        assert!(a_closed.overlaps(&b));
    }

    #[test]
    fn open_range_between_adjacent_days_is_empty() {
        let r = DateRange::open(day(2020, 3, 1), day(2020, 3, 2)).unwrap();
        let noon = PrecisionInstant::minute(2020, 3, 1, 12, 0).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.days().count(), 0);
        assert!(!r.contains(&noon));
        assert!(!r.overlaps(&r));

        let wider = DateRange::open(day(2020, 3, 1), day(2020, 3, 3)).unwrap();
        assert!(!wider.is_empty());
        assert!(wider.overlaps(&wider));
        assert!(!wider.overlaps(&r));
    }

    #[test]
    fn mixed_precision_endpoints() {
        // (day 1, 00:30 on day 2): every minute of day 2 before 00:30.
        let end = PrecisionInstant::minute(2020, 3, 2, 0, 30).unwrap();
        let r = DateRange::open(day(2020, 3, 1), end).unwrap();
        assert!(!r.is_empty());
        let hours = DateRange::closed(
            PrecisionInstant::hour(2020, 3, 2, 0).unwrap(),
            PrecisionInstant::hour(2020, 3, 2, 5).unwrap(),
        )
        .unwrap();
        assert!(r.overlaps(&hours));
        assert!(hours.overlaps(&r));
    }

    #[test]
    fn display_uses_interval_notation() {
        let r = DateRange::half_open(day(2020, 3, 1), day(2020, 3, 31)).unwrap();
        assert_eq!(r.to_string(), "[2020-03-01, 2020-03-31)");
    }
}
