//! Name tables for weekdays, months, and week-of-month ordinals.
//!
//! The tables are built once, on first use, and never change afterwards.
//! Lookups are case-insensitive and accept both full names and three-letter
//! abbreviations (`"Tuesday"`, `"tue"`).

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::month::Month;
use crate::weekday::Weekday;

/// First occurrence of a weekday in a month.
pub const FIRST: i32 = 1;
/// Second occurrence.
pub const SECOND: i32 = 2;
/// Third occurrence.
pub const THIRD: i32 = 3;
/// Fourth occurrence.
pub const FOURTH: i32 = 4;
/// Fifth occurrence.
pub const FIFTH: i32 = 5;
/// Last occurrence.
pub const LAST: i32 = -1;
/// Second-to-last occurrence.
pub const SECOND_TO_LAST: i32 = -2;

static DAY_TABLE: LazyLock<HashMap<String, Weekday>> = LazyLock::new(|| {
    Weekday::ALL
        .iter()
        .flat_map(|&w| {
            [
                (w.long_name().to_ascii_lowercase(), w),
                (w.short_name().to_ascii_lowercase(), w),
            ]
        })
        .collect()
});

static MONTH_TABLE: LazyLock<HashMap<String, Month>> = LazyLock::new(|| {
    Month::ALL
        .iter()
        .flat_map(|&m| {
            [
                (m.long_name().to_ascii_lowercase(), m),
                (m.short_name().to_ascii_lowercase(), m),
            ]
        })
        .collect()
});

static ORDINAL_TABLE: LazyLock<HashMap<&'static str, i32>> = LazyLock::new(|| {
    HashMap::from([
        ("first", FIRST),
        ("second", SECOND),
        ("third", THIRD),
        ("fourth", FOURTH),
        ("fifth", FIFTH),
        ("last", LAST),
        ("last_of", LAST),
        ("second_to_last", SECOND_TO_LAST),
    ])
});

/// Look up a weekday by name.
pub fn weekday_named(name: &str) -> Option<Weekday> {
    DAY_TABLE.get(&name.trim().to_ascii_lowercase()).copied()
}

/// Look up a month by name.
pub fn month_named(name: &str) -> Option<Month> {
    MONTH_TABLE.get(&name.trim().to_ascii_lowercase()).copied()
}

/// Weekday number for `name`, counted from Sunday (Sunday = 0 … Saturday = 6).
///
/// This is the conventional day-name index; it differs from
/// [`Weekday::ordinal`], which is ISO numbered.
pub fn day_number(name: &str) -> Option<u8> {
    weekday_named(name).map(|w| w.ordinal() % 7)
}

/// Month number for `name` (January = 1 … December = 12).
pub fn month_number(name: &str) -> Option<u8> {
    month_named(name).map(|m| m.number())
}

/// Full weekday name for `number` (Sunday = 0 … Saturday = 6).
pub fn day_name(number: u8) -> Option<&'static str> {
    match number {
        0 => Some(Weekday::Sunday.long_name()),
        1..=6 => Weekday::from_ordinal(number).map(|w| w.long_name()),
        _ => None,
    }
}

/// Full month name for `number` (January = 1 … December = 12).
pub fn month_name(number: u8) -> Option<&'static str> {
    Month::from_number(number).map(|m| m.long_name())
}

/// Signed ordinal for a week-of-month word (`"first"` → 1, `"last"` → -1,
/// `"second_to_last"` → -2).
pub fn ordinal_number(word: &str) -> Option<i32> {
    ORDINAL_TABLE
        .get(word.trim().to_ascii_lowercase().as_str())
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_lookup() {
        assert_eq!(day_number("monday"), Some(1));
        assert_eq!(day_number("Sunday"), Some(0));
        assert_eq!(day_number("saturday"), Some(6));
        assert_eq!(day_number("THU"), Some(4));
        assert_eq!(day_number("someday"), None);
    }

    #[test]
    fn month_lookup() {
        assert_eq!(month_number("january"), Some(1));
        assert_eq!(month_number("Dec"), Some(12));
        assert_eq!(month_number("smarch"), None);
    }

    #[test]
    fn names_invert_numbers() {
        for n in 0..=6u8 {
            assert_eq!(day_number(day_name(n).unwrap()), Some(n));
        }
        for n in 1..=12u8 {
            assert_eq!(month_number(month_name(n).unwrap()), Some(n));
        }
        assert_eq!(day_name(0), Some("Sunday"));
        assert_eq!(day_name(7), None);
        assert_eq!(month_name(13), None);
    }

    #[test]
    fn ordinals() {
        assert_eq!(ordinal_number("last"), Some(-1));
        assert_eq!(ordinal_number("last_of"), Some(-1));
        assert_eq!(ordinal_number("second_to_last"), Some(-2));
        assert_eq!(ordinal_number("third"), Some(3));
        assert_eq!(ordinal_number("sixth"), None);
    }
}
