use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_EPOCH_MILLIS, MAX_MONTH, MICROS_PER_MILLI, MILLIS_PER_SECOND,
};
use crate::datetime::CalendarDateTime;
use crate::decompose::decompose;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A millisecond Unix timestamp guaranteed to be at most `MAX_EPOCH_MILLIS`
/// (9999-12-31T23:59:59Z). Earlier instants, including negative values, are
/// accepted without a lower bound.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, Into,
)]
#[serde(try_from = "i64", into = "i64")]
#[display(fmt = "{_0}")]
pub struct EpochMillis(i64);

/// Error type for timestamp validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Timestamp is later than 9999-12-31T23:59:59Z.
    #[error(
        "timestamp overflow {millis} (must be <= {max})",
        max = MAX_EPOCH_MILLIS
    )]
    Overflow { millis: i64 },
}

impl EpochMillis {
    /// Creates a new `EpochMillis`, validating that it's <= `MAX_EPOCH_MILLIS`
    ///
    /// # Errors
    /// Returns `RangeError::Overflow` if the value is past the end of year 9999.
    pub const fn new(millis: i64) -> Result<Self, RangeError> {
        if millis > MAX_EPOCH_MILLIS {
            return Err(RangeError::Overflow { millis });
        }
        Ok(Self(millis))
    }

    /// Returns the raw millisecond count
    #[inline]
    pub const fn millis(self) -> i64 {
        self.0
    }

    /// Whole seconds since the Unix epoch, rounded toward negative infinity.
    ///
    /// `-1` ms is 1969-12-31T23:59:59.999Z, so it lands on second `-1`, not `0`.
    #[inline]
    pub const fn seconds(self) -> i64 {
        self.0.div_euclid(MILLIS_PER_SECOND)
    }

    /// Milliseconds past `seconds()`, always in `0..1000`
    #[inline]
    pub const fn subsec_millis(self) -> u32 {
        // rem_euclid keeps this in 0..1000
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let millis = self.0.rem_euclid(MILLIS_PER_SECOND) as u32;
        millis
    }

    /// Decomposes the timestamp into UTC calendar fields, keeping the
    /// sub-second part as microseconds.
    pub fn to_datetime(self) -> CalendarDateTime {
        CalendarDateTime {
            microsecond: self.subsec_millis() * MICROS_PER_MILLI,
            ..decompose(self.seconds())
        }
    }
}

/// Validates a millisecond timestamp and returns its whole seconds.
///
/// # Errors
/// Returns `RangeError::Overflow` if `millis > MAX_EPOCH_MILLIS`.
pub const fn validate_epoch_millis(millis: i64) -> Result<i64, RangeError> {
    match EpochMillis::new(millis) {
        Ok(epoch) => Ok(epoch.seconds()),
        Err(err) => Err(err),
    }
}

impl TryFrom<i64> for EpochMillis {
    type Error = RangeError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for EpochMillis {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        let millis = trimmed
            .parse::<i64>()
            .map_err(|_| ParseError::InvalidFormat(trimmed.to_owned()))?;
        Ok(Self::new(millis)?)
    }
}

// Helper functions

pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
