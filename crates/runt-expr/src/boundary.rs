//! Open half-lines relative to a fixed instant.
//!
//! Both compare with the precision-aware ordering of [`PrecisionInstant`]:
//! a day-precision boundary covers the whole day, so `After` an exclusive
//! 2010-01-01 rejects 2010-01-01T23:00 as well.

use std::cmp::Ordering;
use std::fmt;

use runt_time::PrecisionInstant;

use crate::expression::TemporalExpression;

/// Matches instants earlier than a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Before {
    boundary: PrecisionInstant,
    inclusive: bool,
}

impl Before {
    /// Instants before `boundary`; `inclusive` also admits the boundary.
    pub fn new(boundary: PrecisionInstant, inclusive: bool) -> Self {
        Self {
            boundary,
            inclusive,
        }
    }
}

impl TemporalExpression for Before {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        match instant.compare(&self.boundary) {
            Ordering::Less => true,
            Ordering::Equal => self.inclusive,
            Ordering::Greater => false,
        }
    }
}

impl fmt::Display for Before {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.inclusive { "on or before" } else { "before" };
        write!(f, "{prefix} {}", self.boundary)
    }
}

/// Matches instants later than a boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct After {
    boundary: PrecisionInstant,
    inclusive: bool,
}

impl After {
    /// Instants after `boundary`; `inclusive` also admits the boundary.
    pub fn new(boundary: PrecisionInstant, inclusive: bool) -> Self {
        Self {
            boundary,
            inclusive,
        }
    }
}

impl TemporalExpression for After {
    fn contains(&self, instant: &PrecisionInstant) -> bool {
        match instant.compare(&self.boundary) {
            Ordering::Greater => true,
            Ordering::Equal => self.inclusive,
            Ordering::Less => false,
        }
    }
}

impl fmt::Display for After {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.inclusive { "on or after" } else { "after" };
        write!(f, "{prefix} {}", self.boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> PrecisionInstant {
        PrecisionInstant::day(y, m, d).unwrap()
    }

    #[test]
    fn before_exclusive() {
        let b = Before::new(day(2010, 1, 1), false);
        assert!(b.contains(&day(2009, 12, 30)));
        assert!(!b.contains(&day(2010, 1, 1)));
        assert!(!b.contains(&day(2010, 1, 2)));
    }

    #[test]
    fn after_exclusive_and_inclusive() {
        let a = After::new(day(2010, 1, 1), false);
        assert!(a.contains(&day(2010, 1, 2)));
        assert!(!a.contains(&day(2010, 1, 1)));
        assert!(!a.contains(&day(2009, 12, 30)));
        assert!(After::new(day(2010, 1, 1), true).contains(&day(2010, 1, 1)));
    }

    #[test]
    fn boundary_compares_at_coarser_precision() {
        let a = After::new(day(2010, 1, 1), false);
        let late_that_day = PrecisionInstant::hour(2010, 1, 1, 23).unwrap();
        assert!(!a.contains(&late_that_day));

        let b = Before::new(PrecisionInstant::minute(2010, 1, 1, 12, 0).unwrap(), true);
        assert!(b.contains(&day(2010, 1, 1)));
    }

    #[test]
    fn display() {
        assert_eq!(Before::new(day(2010, 1, 1), false).to_string(), "before 2010-01-01");
        assert_eq!(After::new(day(2010, 1, 1), true).to_string(), "on or after 2010-01-01");
    }
}
