//! End-to-end tests through the façade.

use chrono::NaiveDate;
use runt::prelude::*;

fn day(y: i32, m: u32, d: u32) -> PrecisionInstant {
    PrecisionInstant::day(y, m, d).unwrap()
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn expressions_and_schedules_cross_threads() {
    assert_send_sync::<Expr>();
    assert_send_sync::<Schedule<&str>>();
    assert_send_sync::<DateRange>();
    assert_send_sync::<PrecisionInstant>();

    let mut schedule = Schedule::new();
    schedule.add(DayOfWeek::new(Weekday::Tuesday), "standup");
    let tuesday = day(2020, 3, 3);
    let found = std::thread::scope(|scope| {
        scope
            .spawn(|| schedule.events_on(&tuesday).len())
            .join()
            .unwrap()
    });
    assert_eq!(found, 1);
}

#[test]
fn now_follows_the_pinned_evaluation_instant() {
    let pinned = NaiveDate::from_ymd_opt(2020, 3, 3)
        .unwrap()
        .and_hms_opt(9, 15, 0)
        .unwrap();
    let _guard = ScopedEvaluationInstant::new(pinned);

    let now = PrecisionInstant::now();
    assert_eq!(now.precision(), Precision::Second);
    assert!(now == day(2020, 3, 3));

    let standup = parse_shorthand("tuesday")
        .unwrap()
        .and(parse_shorthand("daily_9_00am_to_9_30am").unwrap());
    assert!(standup.contains(&now));
}

#[test]
fn pay_days_and_holidays() {
    #[derive(Debug, PartialEq)]
    enum Event {
        Payday,
        Holiday,
    }

    let mut schedule = Schedule::new();
    // The last day of the month, or the Friday before when it falls on a
    // weekend.
    let payday = ExpressionBuilder::new()
        .on(DayOfMonthRange::single(-1).unwrap())
        .on(WeekRange::new(Weekday::Monday, Weekday::Friday))
        .possibly(
            DayOfMonthRange::new(-3, -2)
                .unwrap()
                .into_expr()
                .and(DayOfWeek::new(Weekday::Friday)),
        )
        .build();
    schedule.add(payday, Event::Payday);
    schedule.add(MonthDayRange::day(12, 25).unwrap(), Event::Holiday);

    let year = DateRange::closed(day(2020, 1, 1), day(2020, 12, 31)).unwrap();
    let paydays: Vec<(u32, u32)> = schedule
        .dates(&Event::Payday, &year)
        .iter()
        .map(|d| (d.month_number(), d.day_of_month()))
        .collect();
    assert_eq!(paydays.len(), 12);
    assert!(paydays.contains(&(2, 28)));
    assert!(paydays.contains(&(3, 31)));
    assert!(paydays.contains(&(5, 29)));
    assert!(paydays.contains(&(10, 30)));
    assert_eq!(schedule.dates(&Event::Holiday, &year).len(), 1);
}

#[test]
fn shorthand_forms_round_trip_through_display() {
    for name in ["last_friday", "weekly_monday_to_friday", "year_2010"] {
        let parsed: Shorthand = name.parse().unwrap();
        assert_eq!(parsed.to_string(), name);
    }
}
