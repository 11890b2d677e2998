/// Latest representable instant, 9999-12-31T23:59:59Z, in seconds since the Unix epoch
pub const MAX_EPOCH_SECONDS: i64 = 253_402_300_799;

/// Latest accepted timestamp in milliseconds since the Unix epoch
pub const MAX_EPOCH_MILLIS: i64 = MAX_EPOCH_SECONDS * MILLIS_PER_SECOND;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MICROS_PER_MILLI: u32 = 1_000;

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Seconds between 1601-01-01T00:00:00Z and 1970-01-01T00:00:00Z.
///
/// 1970 - 1601 = 369 years = 3 centuries + 17 quadrennials + 1 year, which
/// carries 89 leap days.
pub const SECONDS_FROM_1601_TO_1970: i64 = 11_644_473_600;

/// First year of the re-biased calendar; the start of a 400-year cycle.
pub const BASE_YEAR: i64 = 1601;

/// 400 years including 97 leap days
pub const QUADRICENTENNIAL_SECONDS: i64 = 12_622_780_800;
/// 100 years including 24 leap days
pub const CENTENNIAL_SECONDS: i64 = 3_155_673_600;
/// 4 years including 1 leap day
pub const QUADRENNIAL_SECONDS: i64 = 126_230_400;
/// 365 days
pub const ANNUAL_SECONDS: i64 = 31_536_000;

/// Centennials left after removing whole 400-year cycles can't exceed 3
pub(crate) const MAX_CENTENNIALS: i64 = 3;
/// Quadrennials left after removing whole centennials can't exceed 24
pub(crate) const MAX_QUADRENNIALS: i64 = 24;
/// Years left after removing whole quadrennials can't exceed 3
pub(crate) const MAX_ANNUALS: i64 = 3;

/// Weekday of 1601-01-01 (Monday) with Sunday as 0
pub(crate) const BASE_WEEKDAY: i64 = 1;
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before the first of each month.
///
/// Row 0 is a common year, row 1 a leap year. Index `m` holds the days before
/// month `m + 1`, so index 12 is the length of the year.
pub const DAYS_SINCE_JAN_1ST: [[u16; 13]; 2] = [cumulative_days(false), cumulative_days(true)];

const fn cumulative_days(leap: bool) -> [u16; 13] {
    let mut table = [0u16; 13];
    let mut month = 1;
    while month <= MAX_MONTH as usize {
        let days = if leap && month == FEBRUARY as usize {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month]
        };
        table[month] = table[month - 1] + days as u16;
        month += 1;
    }
    table
}

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Weekday names indexed by `CalendarDateTime::weekday` (Sunday is 0)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Default output template, e.g. `Jan 5, 2024 3:04:05 PM +0000`
pub const DEFAULT_FORMAT: &str = "%b %-d, %Y %-I:%M:%S %p %z";

/// Zone identifier resolving to the system's local timezone
pub const LOCAL_ZONE: &str = "local";
