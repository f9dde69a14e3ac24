//! `Schedule` — payloads attached to temporal expressions.
//!
//! Entries are kept in registration order. The same expression may carry
//! several payloads and the same payload may be registered under several
//! expressions; nothing is deduplicated.
//!
//! Range queries are generate-and-test: every day of the range is checked
//! against every entry, so their cost is `O(days × entries)`.

use std::fmt;

use runt_expr::Expr;
use runt_time::{DateRange, PrecisionInstant};
use tracing::{debug, trace};

/// A registry of `(expression, payload)` pairs.
///
/// ```
/// use runt_expr::DayOfWeek;
/// use runt_schedule::Schedule;
/// use runt_time::{PrecisionInstant, Weekday};
///
/// let mut schedule = Schedule::new();
/// schedule.add(DayOfWeek::new(Weekday::Tuesday), "standup");
///
/// let tuesday = PrecisionInstant::day(2020, 3, 3)?;
/// assert_eq!(schedule.events_on(&tuesday), [&"standup"]);
/// # Ok::<(), runt_core::Error>(())
/// ```
#[derive(Clone)]
pub struct Schedule<P> {
    entries: Vec<(Expr, P)>,
}

impl<P> Schedule<P> {
    /// An empty schedule.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Register `payload` to occur whenever `expr` holds.
    pub fn add(&mut self, expr: impl Into<Expr>, payload: P) {
        let expr = expr.into();
        debug!(expr = %expr, entries = self.entries.len() + 1, "schedule entry added");
        self.entries.push((expr, payload));
    }

    /// Payloads occurring at `instant`, in registration order.
    pub fn events_on(&self, instant: &PrecisionInstant) -> Vec<&P> {
        self.entries
            .iter()
            .filter(|(expr, _)| expr.contains(instant))
            .map(|(_, payload)| payload)
            .collect()
    }

    /// Every `(day, payload)` occurrence within `range`, ascending by day and
    /// in registration order within a day.
    pub fn events_in(&self, range: &DateRange) -> Vec<(PrecisionInstant, &P)> {
        let mut out = Vec::new();
        for day in range.days() {
            let before = out.len();
            out.extend(self.events_on(&day).into_iter().map(|p| (day, p)));
            trace!(%day, events = out.len() - before, "day evaluated");
        }
        debug!(%range, events = out.len(), "range evaluated");
        out
    }

    /// Payloads whose entry satisfies `predicate`, in registration order.
    pub fn select<F>(&self, mut predicate: F) -> Vec<&P>
    where
        F: FnMut(&Expr, &P) -> bool,
    {
        self.entries
            .iter()
            .filter(|(expr, payload)| predicate(expr, payload))
            .map(|(_, payload)| payload)
            .collect()
    }

    /// Iterate over the entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Expr, &P)> {
        self.entries.iter().map(|(expr, payload)| (expr, payload))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if nothing is scheduled.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<P: PartialEq> Schedule<P> {
    /// Days within `range` on which `payload` occurs.
    pub fn dates(&self, payload: &P, range: &DateRange) -> Vec<PrecisionInstant> {
        range
            .days()
            .filter(|day| self.is_scheduled(payload, day))
            .collect()
    }

    /// Return `true` if `payload` occurs at `instant` under any of its
    /// entries.
    pub fn is_scheduled(&self, payload: &P, instant: &PrecisionInstant) -> bool {
        self.entries
            .iter()
            .any(|(expr, p)| p == payload && expr.contains(instant))
    }

    /// Remove every entry carrying `payload`; returns how many were removed.
    pub fn remove(&mut self, payload: &P) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(_, p)| p != payload);
        let removed = before - self.entries.len();
        debug!(removed, "schedule entries removed");
        removed
    }

    /// Replace the expression of every entry carrying `payload` with
    /// `f(old)`; returns how many entries were updated.
    pub fn update<F>(&mut self, payload: &P, mut f: F) -> usize
    where
        F: FnMut(&Expr) -> Expr,
    {
        let mut updated = 0;
        for (expr, _) in self.entries.iter_mut().filter(|(_, p)| p == payload) {
            *expr = f(&*expr);
            debug!(expr = %expr, "schedule entry updated");
            updated += 1;
        }
        updated
    }
}

impl<P> Default for Schedule<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: fmt::Debug> fmt::Debug for Schedule<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.entries.iter().map(|(e, p)| (e.to_string(), p)))
            .finish()
    }
}

impl<P> Extend<(Expr, P)> for Schedule<P> {
    fn extend<I: IntoIterator<Item = (Expr, P)>>(&mut self, iter: I) {
        for (expr, payload) in iter {
            self.add(expr, payload);
        }
    }
}

impl<P> FromIterator<(Expr, P)> for Schedule<P> {
    fn from_iter<I: IntoIterator<Item = (Expr, P)>>(iter: I) -> Self {
        let mut schedule = Self::new();
        schedule.extend(iter);
        schedule
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use runt_expr::{DayOfWeek, TemporalExpression, TimeOfDayRange};
    use runt_time::Weekday;

    fn day(y: i32, m: u32, d: u32) -> PrecisionInstant {
        PrecisionInstant::day(y, m, d).unwrap()
    }

    #[test]
    fn events_on_preserves_registration_order() {
        let mut s = Schedule::new();
        s.add(DayOfWeek::new(Weekday::Tuesday), "b");
        s.add(DayOfWeek::new(Weekday::Wednesday), "x");
        s.add(DayOfWeek::new(Weekday::Tuesday), "a");
        s.add(DayOfWeek::new(Weekday::Tuesday), "b");
        assert_eq!(s.events_on(&day(2020, 3, 3)), [&"b", &"a", &"b"]);
        assert_eq!(s.events_on(&day(2020, 3, 4)), [&"x"]);
        assert!(s.events_on(&day(2020, 3, 5)).is_empty());
    }

    #[test]
    fn remove_and_update() {
        let mut s = Schedule::new();
        s.add(DayOfWeek::new(Weekday::Monday), 1);
        s.add(DayOfWeek::new(Weekday::Friday), 2);
        s.add(DayOfWeek::new(Weekday::Saturday), 1);
        assert_eq!(s.remove(&1), 2);
        assert_eq!(s.len(), 1);
        assert_eq!(s.remove(&1), 0);

        let updated = s.update(&2, |old| old.or(DayOfWeek::new(Weekday::Sunday)));
        assert_eq!(updated, 1);
        assert!(s.is_scheduled(&2, &day(2020, 3, 8)));
        assert!(s.is_scheduled(&2, &day(2020, 3, 6)));
    }

    #[test]
    fn select_by_expression() {
        let mut s = Schedule::new();
        s.add(DayOfWeek::new(Weekday::Monday), "gym");
        s.add(TimeOfDayRange::new(9, 0, 10, 0).unwrap(), "coffee");
        let timed = s.select(|expr, _| expr.to_string().ends_with("daily"));
        assert_eq!(timed, [&"coffee"]);
    }

    #[test]
    fn collect_from_pairs() {
        let s: Schedule<&str> = [
            (DayOfWeek::new(Weekday::Monday).into_expr(), "a"),
            (DayOfWeek::new(Weekday::Tuesday).into_expr(), "b"),
        ]
        .into_iter()
        .collect();
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().map(|(_, p)| *p).collect::<Vec<_>>(), ["a", "b"]);
    }
}
