//! Shorthand names for leaf expressions.
//!
//! A shorthand is a lower-case, underscore-separated name that denotes one
//! leaf expression:
//!
//! | Form                                | Expression                         |
//! |-------------------------------------|------------------------------------|
//! | `daily_8_30am_to_9_45pm`            | [`TimeOfDayRange`]                 |
//! | `weekly_friday_to_monday`           | [`WeekRange`]                      |
//! | `weekly_tuesday`, `tuesday`         | [`DayOfWeek`]                      |
//! | `monthly_3rd_to_14th`, `monthly_10th` | [`DayOfMonthRange`]              |
//! | `yearly_march_15_to_june_1`         | [`MonthDayRange`]                  |
//! | `yearly_march_15`, `yearly_december` | [`MonthDayRange`]                 |
//! | `year_2010`                         | [`YearInstant`]                    |
//! | `last_friday`, `second_to_last_tuesday` | [`NthWeekdayOfMonth`]          |
//! | `before_2010-01-01`, `after_2010-01-01` | [`Before`] / [`After`] (exclusive) |
//!
//! Parsing happens in two steps. [`Shorthand::parse`] is purely syntactic
//! and fails with `UnknownShorthand`; [`Shorthand::to_expr`] runs the
//! expression constructors and fails with their field errors, so
//! `monthly_40th` is recognised but rejected as an invalid day.
//!
//! Every parsed value writes back to the name it came from. A hand-built
//! value whose fields have no name form (`NthWeekday(7, _)`,
//! `Monthly(-1)`) is rejected by [`Shorthand::to_name`], and its `Display`
//! returns [`fmt::Error`].

use std::fmt;
use std::str::FromStr;

use runt_core::ensure_field;
use runt_core::errors::{Error, Result};
use runt_expr::{
    After, Before, DayOfMonthRange, DayOfWeek, Expr, MonthDayRange, NthWeekdayOfMonth,
    TimeOfDayRange, WeekRange, YearInstant,
};
use runt_time::names::{
    month_named, ordinal_number, weekday_named, FIFTH, FIRST, FOURTH, LAST, SECOND,
    SECOND_TO_LAST, THIRD,
};
use runt_time::{Month, PrecisionInstant, Weekday};
use tracing::debug;

/// Half of a 12-hour clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    /// Midnight to noon.
    Am,
    /// Noon to midnight.
    Pm,
}

impl FromStr for Meridiem {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "am" => Ok(Meridiem::Am),
            "pm" => Ok(Meridiem::Pm),
            _ => Err(Error::UnknownShorthand(s.to_string())),
        }
    }
}

/// Convert a 12-hour clock reading to `(hour, minute)` on a 24-hour clock.
///
/// `12am` is midnight and `12pm` is noon.
///
/// # Errors
/// `InvalidField` if `hour` is outside `1..=12` or `minute` above 59.
pub fn parse_time(hour: u32, minute: u32, meridiem: Meridiem) -> Result<(u32, u32)> {
    ensure_field!("hour", hour, 1, 12);
    ensure_field!("minute", minute, 0, 59);
    let hour = match meridiem {
        Meridiem::Am => hour % 12,
        Meridiem::Pm => hour % 12 + 12,
    };
    Ok((hour, minute))
}

/// Instants before `instant`.
pub fn before(instant: PrecisionInstant, inclusive: bool) -> Expr {
    Before::new(instant, inclusive).into()
}

/// Instants after `instant`.
pub fn after(instant: PrecisionInstant, inclusive: bool) -> Expr {
    After::new(instant, inclusive).into()
}

/// Resolve a shorthand name to its expression.
///
/// ```
/// use runt_sugar::parse_shorthand;
/// use runt_time::PrecisionInstant;
///
/// let expr = parse_shorthand("last_friday")?;
/// assert!(expr.contains(&PrecisionInstant::day(2024, 2, 23)?));
/// assert_eq!(expr.to_string(), "last Friday of the month");
/// # Ok::<(), runt_core::Error>(())
/// ```
///
/// # Errors
/// `UnknownShorthand` for a name matching no form, or the constructor's
/// error for a recognised name with out-of-range fields.
pub fn parse_shorthand(name: &str) -> Result<Expr> {
    let shorthand = Shorthand::parse(name).inspect_err(|_| {
        debug!(shorthand = name, "unrecognized shorthand");
    })?;
    let expr = shorthand.to_expr()?;
    debug!(shorthand = name, expr = %expr, "shorthand resolved");
    Ok(expr)
}

/// A parsed shorthand name, before any calendar validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shorthand {
    /// `daily_H_MMam_to_H_MMpm`; times already on a 24-hour clock.
    Daily {
        /// `(hour, minute)` the range opens at.
        start: (u32, u32),
        /// `(hour, minute)` the range closes at.
        end: (u32, u32),
    },
    /// `weekly_<day>_to_<day>`.
    WeeklyRange(Weekday, Weekday),
    /// `weekly_<day>` or a bare `<day>`.
    Weekly(Weekday),
    /// `monthly_<n>th_to_<n>th`.
    MonthlyRange(i32, i32),
    /// `monthly_<n>th`.
    Monthly(i32),
    /// `yearly_<month>_<d>_to_<month>_<d>`.
    YearlyRange {
        /// Opening month and day.
        start: (Month, u32),
        /// Closing month and day.
        end: (Month, u32),
    },
    /// `yearly_<month>_<d>`.
    YearlyDay(Month, u32),
    /// `yearly_<month>`.
    YearlyMonth(Month),
    /// `year_<yyyy>`.
    Year(i32),
    /// `<ordinal>_<day>`.
    NthWeekday(i32, Weekday),
    /// `before_<yyyy>-<mm>-<dd>`.
    Before(i32, u32, u32),
    /// `after_<yyyy>-<mm>-<dd>`.
    After(i32, u32, u32),
}

impl Shorthand {
    /// Recognise `name`; matching is case-insensitive.
    ///
    /// # Errors
    /// `UnknownShorthand` if `name` matches no form.
    pub fn parse(name: &str) -> Result<Self> {
        let key = name.trim().to_ascii_lowercase();
        classify(&key).ok_or_else(|| Error::UnknownShorthand(name.to_string()))
    }

    /// Build the expression this shorthand denotes.
    pub fn to_expr(&self) -> Result<Expr> {
        let expr: Expr = match *self {
            Shorthand::Daily { start, end } => {
                TimeOfDayRange::new(start.0, start.1, end.0, end.1)?.into()
            }
            Shorthand::WeeklyRange(s, e) => WeekRange::new(s, e).into(),
            Shorthand::Weekly(d) => DayOfWeek::new(d).into(),
            Shorthand::MonthlyRange(s, e) => DayOfMonthRange::new(s, e)?.into(),
            Shorthand::Monthly(d) => DayOfMonthRange::single(d)?.into(),
            Shorthand::YearlyRange { start, end } => MonthDayRange::new(
                u32::from(start.0.number()),
                start.1,
                u32::from(end.0.number()),
                end.1,
            )?
            .into(),
            Shorthand::YearlyDay(m, d) => MonthDayRange::day(u32::from(m.number()), d)?.into(),
            Shorthand::YearlyMonth(m) => MonthDayRange::month(u32::from(m.number()))?.into(),
            Shorthand::Year(y) => YearInstant::new(y).into(),
            Shorthand::NthWeekday(n, d) => NthWeekdayOfMonth::new(n, d)?.into(),
            Shorthand::Before(y, m, d) => before(PrecisionInstant::day(y, m, d)?, false),
            Shorthand::After(y, m, d) => after(PrecisionInstant::day(y, m, d)?, false),
        };
        Ok(expr)
    }
}

impl Shorthand {
    /// The shorthand name for this value.
    ///
    /// # Errors
    /// `InvalidField` (or `InvalidOrdinal` for a zero ordinal) when a field
    /// cannot be written in any name form.
    pub fn to_name(&self) -> Result<String> {
        self.check_nameable()?;
        Ok(self.to_string())
    }

    fn check_nameable(&self) -> Result<()> {
        match *self {
            Shorthand::Daily { start, end } => {
                for (hour, minute) in [start, end] {
                    ensure_field!("hour", hour, 0, 23);
                    ensure_field!("minute", minute, 0, 59);
                }
            }
            Shorthand::MonthlyRange(s, e) => {
                ensure_field!("day", s, 0, 99);
                ensure_field!("day", e, 0, 99);
            }
            Shorthand::Monthly(d) => ensure_field!("day", d, 0, 99),
            Shorthand::YearlyRange { start, end } => {
                ensure_field!("day", start.1, 0, 99);
                ensure_field!("day", end.1, 0, 99);
            }
            Shorthand::YearlyDay(_, d) => ensure_field!("day", d, 0, 99),
            Shorthand::YearlyMonth(_) | Shorthand::WeeklyRange(..) | Shorthand::Weekly(_) => {}
            Shorthand::Year(y) => ensure_field!("year", y, 0, 9999),
            Shorthand::NthWeekday(n, _) => {
                if n == 0 {
                    return Err(Error::InvalidOrdinal(n));
                }
                ensure_field!("ordinal", n, SECOND_TO_LAST, FIFTH);
            }
            Shorthand::Before(y, m, d) | Shorthand::After(y, m, d) => {
                ensure_field!("year", y, 0, 9999);
                ensure_field!("month", m, 0, 99);
                ensure_field!("day", d, 0, 99);
            }
        }
        Ok(())
    }
}

impl FromStr for Shorthand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Shorthand::parse(s)
    }
}

impl fmt::Display for Shorthand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.check_nameable().map_err(|_| fmt::Error)?;
        let lower = |s: &str| s.to_ascii_lowercase();
        match *self {
            Shorthand::Daily { start, end } => {
                let (sh, sm, sp) = twelve_hour(start);
                let (eh, em, ep) = twelve_hour(end);
                write!(f, "daily_{sh}_{sm:02}{sp}_to_{eh}_{em:02}{ep}")
            }
            Shorthand::WeeklyRange(s, e) => {
                write!(f, "weekly_{}_to_{}", lower(s.long_name()), lower(e.long_name()))
            }
            Shorthand::Weekly(d) => write!(f, "weekly_{}", lower(d.long_name())),
            Shorthand::MonthlyRange(s, e) => {
                write!(f, "monthly_{}_to_{}", day_suffixed(s), day_suffixed(e))
            }
            Shorthand::Monthly(d) => write!(f, "monthly_{}", day_suffixed(d)),
            Shorthand::YearlyRange { start, end } => write!(
                f,
                "yearly_{}_{}_to_{}_{}",
                lower(start.0.long_name()),
                start.1,
                lower(end.0.long_name()),
                end.1
            ),
            Shorthand::YearlyDay(m, d) => write!(f, "yearly_{}_{d}", lower(m.long_name())),
            Shorthand::YearlyMonth(m) => write!(f, "yearly_{}", lower(m.long_name())),
            Shorthand::Year(y) => write!(f, "year_{y:04}"),
            Shorthand::NthWeekday(n, d) => {
                let word = ordinal_word(n).ok_or(fmt::Error)?;
                write!(f, "{word}_{}", lower(d.long_name()))
            }
            Shorthand::Before(y, m, d) => write!(f, "before_{y:04}-{m:02}-{d:02}"),
            Shorthand::After(y, m, d) => write!(f, "after_{y:04}-{m:02}-{d:02}"),
        }
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

fn classify(key: &str) -> Option<Shorthand> {
    if let Some(rest) = key.strip_prefix("daily_") {
        let (start, end) = rest.split_once("_to_")?;
        return Some(Shorthand::Daily {
            start: clock(start)?,
            end: clock(end)?,
        });
    }
    if let Some(rest) = key.strip_prefix("weekly_") {
        return match rest.split_once("_to_") {
            Some((s, e)) => Some(Shorthand::WeeklyRange(day_name(s)?, day_name(e)?)),
            None => Some(Shorthand::Weekly(day_name(rest)?)),
        };
    }
    if let Some(rest) = key.strip_prefix("monthly_") {
        return match rest.split_once("_to_") {
            Some((s, e)) => Some(Shorthand::MonthlyRange(nth_day(s)?, nth_day(e)?)),
            None => Some(Shorthand::Monthly(nth_day(rest)?)),
        };
    }
    if let Some(rest) = key.strip_prefix("yearly_") {
        if let Some((s, e)) = rest.split_once("_to_") {
            return Some(Shorthand::YearlyRange {
                start: month_day(s)?,
                end: month_day(e)?,
            });
        }
        return match rest.split_once('_') {
            Some(_) => {
                let (m, d) = month_day(rest)?;
                Some(Shorthand::YearlyDay(m, d))
            }
            None => Some(Shorthand::YearlyMonth(month_name(rest)?)),
        };
    }
    if let Some(rest) = key.strip_prefix("year_") {
        return Some(Shorthand::Year(digits(rest, 4, 4)?.try_into().ok()?));
    }
    if let Some(rest) = key.strip_prefix("before_") {
        let (y, m, d) = iso_date(rest)?;
        return Some(Shorthand::Before(y, m, d));
    }
    if let Some(rest) = key.strip_prefix("after_") {
        let (y, m, d) = iso_date(rest)?;
        return Some(Shorthand::After(y, m, d));
    }
    if let Some(day) = day_name(key) {
        return Some(Shorthand::Weekly(day));
    }
    let (ordinal, day) = key.rsplit_once('_')?;
    Some(Shorthand::NthWeekday(ordinal_number(ordinal)?, day_name(day)?))
}

/// Full weekday names only; abbreviations would make `sat` a shorthand.
fn day_name(s: &str) -> Option<Weekday> {
    weekday_named(s).filter(|d| d.long_name().eq_ignore_ascii_case(s))
}

fn month_name(s: &str) -> Option<Month> {
    month_named(s).filter(|m| m.long_name().eq_ignore_ascii_case(s))
}

/// `8_30am` → `(8, 30)`, `2_00pm` → `(14, 0)`.
fn clock(s: &str) -> Option<(u32, u32)> {
    let (hour, rest) = s.split_once('_')?;
    let split = rest.len().checked_sub(2)?;
    let (minute, meridiem) = rest.split_at_checked(split)?;
    let meridiem = meridiem.parse().ok()?;
    parse_time(digits(hour, 1, 2)?, digits(minute, 2, 2)?, meridiem).ok()
}

/// `3rd` → `3`. The suffix is not checked against the number.
fn nth_day(s: &str) -> Option<i32> {
    let number = ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))?;
    digits(number, 1, 2)?.try_into().ok()
}

/// `march_15` → `(March, 15)`.
fn month_day(s: &str) -> Option<(Month, u32)> {
    let (month, day) = s.split_once('_')?;
    Some((month_name(month)?, digits(day, 1, 2)?))
}

/// `2010-01-01` → `(2010, 1, 1)`.
fn iso_date(s: &str) -> Option<(i32, u32, u32)> {
    let mut parts = s.split('-');
    let year = digits(parts.next()?, 4, 4)?;
    let month = digits(parts.next()?, 2, 2)?;
    let day = digits(parts.next()?, 2, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year.try_into().ok()?, month, day))
}

/// An unsigned decimal of `min..=max` ASCII digits.
fn digits(s: &str, min: usize, max: usize) -> Option<u32> {
    if !(min..=max).contains(&s.len()) || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

// ── Formatting ────────────────────────────────────────────────────────────────

fn twelve_hour((hour, minute): (u32, u32)) -> (u32, u32, &'static str) {
    let meridiem = if hour < 12 { "am" } else { "pm" };
    let hour = match hour % 12 {
        0 => 12,
        h => h,
    };
    (hour, minute, meridiem)
}

fn day_suffixed(n: i32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

fn ordinal_word(n: i32) -> Option<&'static str> {
    let word = match n {
        FIRST => "first",
        SECOND => "second",
        THIRD => "third",
        FOURTH => "fourth",
        FIFTH => "fifth",
        LAST => "last",
        SECOND_TO_LAST => "second_to_last",
        _ => return None,
    };
    Some(word)
}
