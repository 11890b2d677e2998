use crate::consts::WEEKDAY_NAMES;
use crate::types::is_leap_year;
use serde::{Deserialize, Serialize};
use std::fmt;

/// UTC calendar fields of a single instant in the proleptic Gregorian
/// calendar, as produced by [`decompose`](crate::decompose).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarDateTime {
    /// Hour of the day, 0..=23
    pub hour: u8,
    /// Minute of the hour, 0..=59
    pub minute: u8,
    /// Second of the minute, 0..=59
    pub second: u8,
    /// Microsecond of the second, 0..=999_999
    pub microsecond: u32,
    /// Day of the month, 1..=31
    pub day_of_month: u8,
    /// Month of the year, 1..=12
    pub month: u8,
    pub year: i64,
    /// Day of the week, 0..=6 with Sunday as 0
    pub weekday: u8,
    /// Zero-based day of the year, 0..=365
    pub day_of_year: u16,
}

impl CalendarDateTime {
    /// Whether `year` has a February 29th
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// English name of `weekday`
    pub const fn weekday_name(&self) -> &'static str {
        WEEKDAY_NAMES[self.weekday as usize % WEEKDAY_NAMES.len()]
    }
}

/// ISO 8601 in UTC, with a microsecond fraction only when it is non-zero.
/// Negative years use the expanded `-YYYY` form.
impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.year < 0 {
            write!(f, "{:05}", self.year)?;
        } else {
            write!(f, "{:04}", self.year)?;
        }
        write!(
            f,
            "-{:02}-{:02}T{:02}:{:02}:{:02}",
            self.month, self.day_of_month, self.hour, self.minute, self.second
        )?;
        if self.microsecond != 0 {
            write!(f, ".{:06}", self.microsecond)?;
        }
        write!(f, "Z")
    }
}
