//! Calendar arithmetic helpers shared by the expression variants.

/// Whether a given year is a leap year (proleptic Gregorian).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1–12) of `year`.
///
/// Returns `0` for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Which occurrence (1-based) of its weekday `day` is within its month,
/// counting from the start: days 1–7 → 1, 8–14 → 2, …
pub fn occurrence_from_start(day: u32) -> u32 {
    (day + 6) / 7
}

/// Which occurrence (1-based) of its weekday `day` is within a month of
/// `month_len` days, counting from the end: the last seven days → 1, …
pub fn occurrence_from_end(day: u32, month_len: u32) -> u32 {
    month_len.saturating_sub(day) / 7 + 1
}

/// Resolve a signed day-of-month index against a month of `month_len` days.
///
/// Positive indices are returned unchanged, `-1` is the last day, `-2` the
/// one before, and so on. The result is not clamped: an index past either
/// end of the month resolves outside `1..=month_len`.
pub fn resolve_day_index(index: i32, month_len: u32) -> i64 {
    let index = i64::from(index);
    if index < 0 {
        i64::from(month_len) + index + 1
    } else {
        index
    }
}
