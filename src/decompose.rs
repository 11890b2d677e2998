//! Closed-form conversion of epoch seconds into calendar fields.
//!
//! The count is re-biased to 1601-01-01, the first day of a 400-year
//! Gregorian cycle, and then whole 400-, 100-, 4- and 1-year periods are
//! peeled off in that order. The caps on the inner three steps absorb the
//! extra leap day that closes a 400-year cycle and the missing one that
//! closes a century.

use crate::consts::{
    ANNUAL_SECONDS, BASE_WEEKDAY, BASE_YEAR, CENTENNIAL_SECONDS, CENTURY_CYCLE, DAYS_PER_WEEK,
    DAYS_SINCE_JAN_1ST, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_ANNUALS, MAX_CENTENNIALS, MAX_MONTH,
    MAX_QUADRENNIALS, QUADRENNIAL_SECONDS, QUADRICENTENNIAL_SECONDS, SECONDS_FROM_1601_TO_1970,
    SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::datetime::CalendarDateTime;
use crate::types::{days_in_month, is_leap_year};

/// Splits `seconds` since 1970-01-01T00:00:00Z into UTC calendar fields.
///
/// Total over `i64`: every input yields a valid proleptic Gregorian record.
/// Inputs before 1601 produce years counted astronomically (year 0 is 1 BC).
/// `microsecond` is always 0; see [`EpochMillis::to_datetime`] for
/// sub-second input.
///
/// [`EpochMillis::to_datetime`]: crate::EpochMillis::to_datetime
// Every narrowing cast below is bounded by the reduction that precedes it.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn decompose(seconds: i64) -> CalendarDateTime {
    // i128 so that no i64 input overflows when re-biased
    let t = i128::from(seconds) + i128::from(SECONDS_FROM_1601_TO_1970);
    let weekday = weekday(t);

    let (quadricentennials, t) = remove_quadricentennials(t);
    let (centennials, t) = remove_centennials(t);
    let (quadrennials, t) = remove_quadrennials(t);
    let (annuals, t) = remove_annuals(t);

    let year = BASE_YEAR
        + quadricentennials * GREGORIAN_CYCLE
        + centennials * CENTURY_CYCLE
        + quadrennials * LEAP_YEAR_CYCLE
        + annuals;
    let leap = is_leap_year(year);

    let day_of_year = t / SECONDS_PER_DAY;
    let t = t % SECONDS_PER_DAY;
    let hour = t / SECONDS_PER_HOUR;
    let t = t % SECONDS_PER_HOUR;
    let minute = t / SECONDS_PER_MINUTE;
    let second = t % SECONDS_PER_MINUTE;

    let day_of_year = day_of_year as u16;
    let (month, day_of_month) = month_and_day(day_of_year, leap);
    debug_assert!(day_of_month <= days_in_month(year, month));

    CalendarDateTime {
        hour: hour as u8,
        minute: minute as u8,
        second: second as u8,
        microsecond: 0,
        day_of_month,
        month,
        year,
        weekday,
        day_of_year,
    }
}

/// Day of the week for a count of seconds since 1601-01-01, Sunday as 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn weekday(since_1601: i128) -> u8 {
    let days = since_1601.div_euclid(i128::from(SECONDS_PER_DAY));
    (days + i128::from(BASE_WEEKDAY)).rem_euclid(i128::from(DAYS_PER_WEEK)) as u8
}

/// Removes whole 400-year cycles, returning `(cycles, remainder)`.
///
/// Floor division, so the remainder is in `0..QUADRICENTENNIAL_SECONDS` even
/// for instants before 1601.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn remove_quadricentennials(since_1601: i128) -> (i64, i64) {
    let period = i128::from(QUADRICENTENNIAL_SECONDS);
    // |since_1601| <= 2^63 + bias, so the quotient is far below i64::MAX
    let cycles = since_1601.div_euclid(period) as i64;
    let remainder = since_1601.rem_euclid(period) as i64;
    (cycles, remainder)
}

/// Removes at most 3 centuries from the remainder of a 400-year cycle.
///
/// The last day of a 400-year cycle is the extra leap day of year 400; the
/// cap keeps it in the fourth century instead of wrapping to a fifth.
pub(crate) fn remove_centennials(seconds: i64) -> (i64, i64) {
    remove_capped(seconds, CENTENNIAL_SECONDS, MAX_CENTENNIALS)
}

/// Removes at most 24 quadrennials from the remainder of a century.
///
/// A century is 24 whole quadrennials plus a tail of 4 years that is one day
/// short of a quadrennial (the fourth century's tail is a full one).
pub(crate) fn remove_quadrennials(seconds: i64) -> (i64, i64) {
    remove_capped(seconds, QUADRENNIAL_SECONDS, MAX_QUADRENNIALS)
}

/// Removes at most 3 common years from the remainder of a quadrennial.
///
/// Dec 31 of the leap year that closes a quadrennial is the 1461st day; the
/// cap keeps it in the fourth year.
pub(crate) fn remove_annuals(seconds: i64) -> (i64, i64) {
    remove_capped(seconds, ANNUAL_SECONDS, MAX_ANNUALS)
}

#[inline]
const fn remove_capped(seconds: i64, period: i64, cap: i64) -> (i64, i64) {
    debug_assert!(seconds >= 0);
    let count = if seconds / period < cap {
        seconds / period
    } else {
        cap
    };
    (count, seconds - count * period)
}

/// Maps a zero-based day of the year to `(month, day_of_month)`.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn month_and_day(day_of_year: u16, leap: bool) -> (u8, u8) {
    let table = &DAYS_SINCE_JAN_1ST[usize::from(leap)];
    let month = (1..=MAX_MONTH)
        .find(|&m| day_of_year < table[usize::from(m)])
        .unwrap_or(MAX_MONTH);
    let day = 1 + day_of_year - table[usize::from(month) - 1];
    (month, day as u8)
}
