use kairos_datetime::{CalendarContext, DateTime, DateTimeError, Tz, ISO8601_TIMESTAMP};

fn winter_base() -> DateTime {
    DateTime::parse_in(
        "2015-12-02T09:23:34+00:00",
        ISO8601_TIMESTAMP,
        CalendarContext::utc(),
    )
    .unwrap()
}

fn summer_base() -> DateTime {
    DateTime::parse_in(
        "2016-07-18T09:23:34+00:00",
        ISO8601_TIMESTAMP,
        CalendarContext::utc(),
    )
    .unwrap()
}

#[test]
fn year_deltas_forward_and_back() {
    let mut dt = winter_base();

    dt.add_years(1).unwrap();
    assert_eq!(dt.to_string(), "2016-12-02T09:23:34+00:00");

    dt.add_years(-2).unwrap();
    assert_eq!(dt.to_string(), "2014-12-02T09:23:34+00:00");
}

#[test]
fn month_deltas_carry_across_year() {
    let mut dt = winter_base();

    // December + 1 month rolls into January of the next year.
    dt.add_months(1).unwrap();
    assert_eq!(dt.to_string(), "2016-01-02T09:23:34+00:00");

    dt.add_months(-2).unwrap();
    assert_eq!(dt.to_string(), "2015-11-02T09:23:34+00:00");
}

#[test]
fn day_deltas_carry_across_month_and_year() {
    let mut dt = winter_base();

    // Dec 2 + 30 days lands on New Year's Day.
    dt.add_days(30).unwrap();
    assert_eq!(dt.to_string(), "2016-01-01T09:23:34+00:00");

    dt.add_days(-61).unwrap();
    assert_eq!(dt.to_string(), "2015-11-01T09:23:34+00:00");
}

#[test]
fn hour_deltas_carry_across_day() {
    let mut dt = summer_base();

    dt.add_hours(21).unwrap();
    assert_eq!(dt.to_string(), "2016-07-19T06:23:34+00:00");

    dt.add_hours(-4).unwrap();
    assert_eq!(dt.to_string(), "2016-07-19T02:23:34+00:00");
}

#[test]
fn minute_deltas_carry_across_hour() {
    let mut dt = summer_base();

    dt.add_minutes(8).unwrap();
    assert_eq!(dt.to_string(), "2016-07-18T09:31:34+00:00");

    dt.add_minutes(-121).unwrap();
    assert_eq!(dt.to_string(), "2016-07-18T07:30:34+00:00");
}

#[test]
fn second_deltas_carry_across_minute() {
    let mut dt = summer_base();

    dt.add_seconds(26).unwrap();
    assert_eq!(dt.to_string(), "2016-07-18T09:24:00+00:00");

    dt.add_seconds(-1).unwrap();
    assert_eq!(dt.to_string(), "2016-07-18T09:23:59+00:00");
}

#[test]
fn set_chain_preserves_untouched_fields() {
    let mut dt = summer_base();

    dt.set_day(1).unwrap();
    assert_eq!(dt.to_string(), "2016-07-01T09:23:34+00:00");

    dt.set_month(3).unwrap();
    assert_eq!(dt.to_string(), "2016-03-01T09:23:34+00:00");

    dt.set_year(2000).unwrap();
    assert_eq!(dt.to_string(), "2000-03-01T09:23:34+00:00");
}

#[test]
fn set_month_and_day_carry_instead_of_wrapping() {
    let mut dt = summer_base();
    dt.set_month(13).unwrap();
    assert_eq!(dt.to_string(), "2017-01-18T09:23:34+00:00");

    let mut dt = summer_base();
    dt.set_month(0).unwrap();
    assert_eq!(dt.to_string(), "2015-12-18T09:23:34+00:00");

    let mut dt = summer_base();
    dt.set_day(0).unwrap();
    assert_eq!(dt.to_string(), "2016-06-30T09:23:34+00:00");

    let mut dt = summer_base();
    dt.set_day(32).unwrap();
    assert_eq!(dt.to_string(), "2016-08-01T09:23:34+00:00");
}

#[test]
fn set_hour_24_rolls_into_next_day() {
    let mut dt = summer_base();
    dt.set_hour(24).unwrap();
    assert_eq!(dt.to_string(), "2016-07-19T00:23:34+00:00");
}

#[test]
fn set_weekday_walks_the_sunday_based_week() {
    // July 17, 2016 is the Sunday opening the fixture's week.
    let expectations = [
        (1, "2016-07-17T09:23:34+00:00"),
        (2, "2016-07-18T09:23:34+00:00"),
        (3, "2016-07-19T09:23:34+00:00"),
        (4, "2016-07-20T09:23:34+00:00"),
        (5, "2016-07-21T09:23:34+00:00"),
        (6, "2016-07-22T09:23:34+00:00"),
        (7, "2016-07-23T09:23:34+00:00"),
    ];
    for (weekday, expected) in expectations {
        let mut dt = summer_base();
        dt.set_weekday(weekday).unwrap();
        assert_eq!(dt.to_string(), expected, "weekday {weekday}");
        assert_eq!(dt.weekday(), weekday);
    }
}

#[test]
fn set_weekday_eight_carries_past_saturday() {
    let mut dt = summer_base();
    dt.set_weekday(8).unwrap();
    assert_eq!(dt.to_string(), "2016-07-24T09:23:34+00:00");
    assert_eq!(dt.weekday(), 1);
}

#[test]
fn failed_set_leaves_value_untouched() {
    let mut dt = summer_base();
    let err = dt.set_year(999_999).unwrap_err();
    assert_eq!(
        err,
        DateTimeError::InvalidComponents {
            year: Some(999_999),
            month: None,
            day: None,
        }
    );
    assert_eq!(dt.to_string(), "2016-07-18T09:23:34+00:00");
}

#[test]
fn put_variants_swallow_failures() {
    let mut dt = summer_base();
    dt.put_year(999_999);
    dt.put_month(i32::MAX);
    dt.put_day(i32::MIN);
    assert_eq!(dt.to_string(), "2016-07-18T09:23:34+00:00");

    dt.put_month(12);
    dt.put_day(24);
    assert_eq!(dt.to_string(), "2016-12-24T09:23:34+00:00");
}

#[test]
fn spring_forward_gap_resolves_one_hour_later() {
    // 02:30 does not exist on March 13, 2016 in New York; moving a day
    // onto it settles on 03:30 EDT, which is 07:30 UTC.
    let new_york = CalendarContext::utc().with_time_zone(Tz::America__New_York);
    let mut dt =
        DateTime::parse_in("2016-03-12T02:30:00", "yyyy-MM-dd'T'HH:mm:ss", new_york).unwrap();
    dt.add_days(1).unwrap();
    assert_eq!(dt.format(ISO8601_TIMESTAMP), "2016-03-13T07:30:00+00:00");
}

#[test]
fn fall_back_fold_takes_earliest_instant() {
    // 01:30 happens twice on November 6, 2016 in New York; the earlier
    // pass (EDT, UTC-4) wins, giving 05:30 UTC.
    let new_york = CalendarContext::utc().with_time_zone(Tz::America__New_York);
    let mut dt =
        DateTime::parse_in("2016-11-05T01:30:00", "yyyy-MM-dd'T'HH:mm:ss", new_york).unwrap();
    dt.add_days(1).unwrap();
    assert_eq!(dt.format(ISO8601_TIMESTAMP), "2016-11-06T05:30:00+00:00");
}

#[test]
fn setters_track_the_context_zone() {
    let zurich = CalendarContext::utc().with_time_zone(Tz::Europe__Zurich);
    let mut dt =
        DateTime::parse_in("2016-07-18T23:30:00+00:00", ISO8601_TIMESTAMP, zurich).unwrap();
    // The Zurich wall clock already shows July 19, 01:30.
    assert_eq!(dt.day(), 19);

    dt.set_day(20).unwrap();
    assert_eq!(dt.format(ISO8601_TIMESTAMP), "2016-07-19T23:30:00+00:00");
    assert_eq!(dt.day(), 20);
}

#[test]
fn zone_swap_changes_readings_not_instant() {
    let mut dt = summer_base();
    let instant = dt.instant();

    dt.set_time_zone(Tz::America__New_York);
    assert_eq!(dt.instant(), instant);
    assert_eq!(dt.hour(), 5);

    dt.set_time_zone(Tz::UTC);
    assert_eq!(dt.hour(), 9);
}
