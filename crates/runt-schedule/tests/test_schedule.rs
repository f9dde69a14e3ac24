//! Integration tests for `Schedule`.

use runt_expr::{
    DayOfMonthRange, DayOfWeek, Expr, NthWeekdayOfMonth, TemporalExpression, TimeOfDayRange,
};
use runt_schedule::Schedule;
use runt_time::{DateRange, PrecisionInstant, Weekday};

fn day(y: i32, m: u32, d: u32) -> PrecisionInstant {
    PrecisionInstant::day(y, m, d).unwrap()
}

fn march_2020() -> DateRange {
    DateRange::closed(day(2020, 3, 1), day(2020, 3, 31)).unwrap()
}

#[derive(Debug, Clone, PartialEq)]
enum Event {
    Standup,
    Review,
    Payroll,
}

#[test]
fn tuesdays_in_march_2020() {
    let mut schedule = Schedule::new();
    schedule.add(DayOfWeek::new(Weekday::Tuesday), Event::Standup);

    let events = schedule.events_in(&march_2020());
    let days: Vec<u32> = events.iter().map(|(d, _)| d.day_of_month()).collect();
    assert_eq!(days, [3, 10, 17, 24, 31]);
    assert!(events.iter().all(|(_, e)| **e == Event::Standup));
}

#[test]
fn four_tuesdays_in_february_2021() {
    let mut schedule = Schedule::new();
    schedule.add(DayOfWeek::new(Weekday::Tuesday), Event::Standup);
    let feb = DateRange::closed(day(2021, 2, 1), day(2021, 2, 28)).unwrap();
    let days: Vec<u32> = schedule
        .events_in(&feb)
        .iter()
        .map(|(d, _)| d.day_of_month())
        .collect();
    assert_eq!(days, [2, 9, 16, 23]);
}

#[test]
fn events_interleave_by_day_then_registration() {
    let mut schedule = Schedule::new();
    schedule.add(DayOfMonthRange::single(-1).unwrap(), Event::Payroll);
    schedule.add(DayOfWeek::new(Weekday::Tuesday), Event::Standup);
    schedule.add(NthWeekdayOfMonth::new(-1, Weekday::Tuesday).unwrap(), Event::Review);

    let events = schedule.events_in(&march_2020());
    let last_day: Vec<&Event> = events
        .iter()
        .filter(|(d, _)| d.day_of_month() == 31)
        .map(|(_, e)| *e)
        .collect();
    assert_eq!(last_day, [&Event::Payroll, &Event::Standup, &Event::Review]);

    let days: Vec<u32> = events.iter().map(|(d, _)| d.day_of_month()).collect();
    let mut sorted = days.clone();
    sorted.sort_unstable();
    assert_eq!(days, sorted);
}

#[test]
fn dates_and_is_scheduled_per_payload() {
    let mut schedule = Schedule::new();
    schedule.add(DayOfWeek::new(Weekday::Tuesday), Event::Standup);
    schedule.add(DayOfWeek::new(Weekday::Thursday), Event::Standup);
    schedule.add(NthWeekdayOfMonth::new(1, Weekday::Friday).unwrap(), Event::Review);

    let standups = schedule.dates(&Event::Standup, &march_2020());
    assert_eq!(standups.len(), 9);
    assert!(schedule.is_scheduled(&Event::Review, &day(2020, 3, 6)));
    assert!(!schedule.is_scheduled(&Event::Review, &day(2020, 3, 13)));
    assert!(schedule.dates(&Event::Payroll, &march_2020()).is_empty());
}

#[test]
fn time_of_day_entries_match_whole_days() {
    let mut schedule = Schedule::new();
    let mornings: Expr =
        DayOfWeek::new(Weekday::Monday).into_expr() & TimeOfDayRange::new(8, 0, 9, 0).unwrap();
    schedule.add(mornings, Event::Standup);

    // Day-precision walk: the time-of-day leaf matches any day.
    assert_eq!(schedule.dates(&Event::Standup, &march_2020()).len(), 5);

    let at_noon = PrecisionInstant::minute(2020, 3, 2, 12, 0).unwrap();
    assert!(schedule.events_on(&at_noon).is_empty());
}
