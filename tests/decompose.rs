use chrono::{DateTime, Datelike, NaiveDate, Timelike};
use epoch_parser::{
    CalendarDateTime, EpochMillis, MAX_EPOCH_MILLIS, MAX_EPOCH_SECONDS, days_in_month, decompose,
    validate_epoch_millis,
};

fn start_of_year(year: i32) -> i64 {
    NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap()
        .and_utc()
        .timestamp()
}

/// Checks every field of `decompose(seconds)` against chrono.
#[track_caller]
fn assert_matches_chrono(seconds: i64) {
    let dt = decompose(seconds);
    let expected = DateTime::from_timestamp(seconds, 0).unwrap();

    assert_eq!(dt.year, i64::from(expected.year()), "year of {seconds}");
    assert_eq!(u32::from(dt.month), expected.month(), "month of {seconds}");
    assert_eq!(
        u32::from(dt.day_of_month),
        expected.day(),
        "day of {seconds}"
    );
    assert_eq!(u32::from(dt.hour), expected.hour(), "hour of {seconds}");
    assert_eq!(
        u32::from(dt.minute),
        expected.minute(),
        "minute of {seconds}"
    );
    assert_eq!(
        u32::from(dt.second),
        expected.second(),
        "second of {seconds}"
    );
    assert_eq!(
        u32::from(dt.weekday),
        expected.weekday().num_days_from_sunday(),
        "weekday of {seconds}"
    );
    assert_eq!(
        u32::from(dt.day_of_year),
        expected.ordinal0(),
        "day of year of {seconds}"
    );
    assert_eq!(dt.microsecond, 0);
}

/// Rebuilds seconds from the record's fields through chrono.
fn reassemble(dt: &CalendarDateTime) -> i64 {
    NaiveDate::from_ymd_opt(
        i32::try_from(dt.year).unwrap(),
        dt.month.into(),
        dt.day_of_month.into(),
    )
    .and_then(|d| {
        d.and_hms_micro_opt(
            dt.hour.into(),
            dt.minute.into(),
            dt.second.into(),
            dt.microsecond,
        )
    })
    .unwrap()
    .and_utc()
    .timestamp()
}

#[test]
fn cycle_boundaries_match_chrono() {
    // First and last seconds of every year whose start or end closes a
    // 4-, 100- or 400-year cycle between 1200 and 2800
    for year in (1200..=2800).filter(|y| y % 4 == 0 || y % 4 == 1) {
        let start = start_of_year(year);
        for offset in [-1, 0, 1, 59 * 86_400, 60 * 86_400] {
            assert_matches_chrono(start + offset);
        }
    }
}

#[test]
fn sweep_six_centuries_round_trips() {
    let first = start_of_year(1601);
    let last = start_of_year(2201);
    // Odd stride so the samples drift through every time of day
    let stride = 86_400 * 13 + 3_607;

    let mut seconds = first;
    let mut count = 0;
    while seconds < last {
        let dt = decompose(seconds);
        assert_eq!(reassemble(&dt), seconds, "round trip of {seconds} ({dt})");
        assert_matches_chrono(seconds);
        seconds += stride;
        count += 1;
    }
    assert!(count > 15_000);
}

#[test]
fn every_day_of_leap_and_common_years() {
    for year in [1700, 1900, 2000, 2023, 2024, 2100, 2400] {
        let start = start_of_year(year);
        let end = start_of_year(year + 1);
        let mut seconds = start;
        while seconds < end {
            let dt = decompose(seconds);
            assert!(dt.day_of_month <= days_in_month(dt.year, dt.month));
            assert_matches_chrono(seconds + 43_200);
            seconds += 86_400;
        }
    }
}

#[test]
fn fields_stay_within_bounds() {
    let mut millis = -11_644_473_600_000i64;
    while millis <= MAX_EPOCH_MILLIS {
        let seconds = validate_epoch_millis(millis).unwrap();
        let dt = decompose(seconds);
        assert!(dt.hour <= 23);
        assert!(dt.minute <= 59);
        assert!(dt.second <= 59);
        assert!(dt.microsecond <= 999_999);
        assert!((1..=12).contains(&dt.month));
        let max_day = days_in_month(dt.year, dt.month);
        assert!((1..=max_day).contains(&dt.day_of_month));
        assert!(dt.weekday <= 6);
        assert!(dt.day_of_year <= 365);
        millis += 7_777_777_777;
    }
}

#[test]
fn pre_1601_matches_proleptic_gregorian() {
    for year in [1, 4, 100, 400, 1000, 1582, 1600] {
        let start = start_of_year(year);
        assert_matches_chrono(start);
        assert_matches_chrono(start - 1);
    }
}

#[test]
fn max_epoch_boundary() {
    let epoch = EpochMillis::new(253_402_300_799_000).unwrap();
    assert_eq!(epoch.seconds(), MAX_EPOCH_SECONDS);
    assert_matches_chrono(epoch.seconds());

    let dt = epoch.to_datetime();
    assert_eq!(
        (dt.year, dt.month, dt.day_of_month, dt.hour, dt.minute, dt.second),
        (9999, 12, 31, 23, 59, 59)
    );
    assert!(EpochMillis::new(253_402_300_800_000).is_err());
}

#[test]
fn sub_second_millis_round_trip() {
    for millis in [-1_500i64, -1, 0, 1, 999, 1_704_467_045_123] {
        let dt = EpochMillis::new(millis).unwrap().to_datetime();
        let micros = reassemble(&dt) * 1_000_000 + i64::from(dt.microsecond);
        assert_eq!(micros, millis * 1_000, "round trip of {millis} ms");
    }
}
