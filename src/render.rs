//! Text rendering of decomposed instants in a target timezone.

use crate::consts::LOCAL_ZONE;
use crate::datetime::CalendarDateTime;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, FixedOffset, Local, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use std::fmt;
use std::str::FromStr;

/// Timezone an instant is rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    /// The system's local timezone
    Local,
    Utc,
    /// A fixed offset such as `+05:30`
    Fixed(FixedOffset),
    /// An IANA timezone such as `Europe/Berlin`
    Named(Tz),
}

/// Error type for rendering.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// Zone identifier is neither `local`, `utc`, an offset nor an IANA name.
    #[error("unknown timezone: {0}")]
    UnknownZone(String),

    /// Format template contains an invalid specifier.
    #[error("invalid format template: {0:?}")]
    InvalidFormat(String),

    /// Year is outside what the formatter can represent.
    #[error("{0} is outside the renderable range")]
    Unrepresentable(CalendarDateTime),
}

impl FromStr for Zone {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(LOCAL_ZONE) {
            return Ok(Self::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Self::Utc);
        }
        if trimmed.starts_with(['+', '-']) {
            return trimmed
                .parse::<FixedOffset>()
                .map(Self::Fixed)
                .map_err(|_| RenderError::UnknownZone(trimmed.to_owned()));
        }
        trimmed
            .parse::<Tz>()
            .map(Self::Named)
            .map_err(|_| RenderError::UnknownZone(trimmed.to_owned()))
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str(LOCAL_ZONE),
            Self::Utc => f.write_str("UTC"),
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Checks that `format` only contains specifiers the renderer understands.
///
/// # Errors
/// Returns `RenderError::InvalidFormat` on the first bad specifier.
pub fn validate_format(format: &str) -> Result<(), RenderError> {
    parse_format(format).map(drop)
}

fn parse_format(format: &str) -> Result<Vec<Item<'_>>, RenderError> {
    let items: Vec<Item<'_>> = StrftimeItems::new(format).collect();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(RenderError::InvalidFormat(format.to_owned()));
    }
    Ok(items)
}

/// Renders `dt` (UTC fields) in `zone` using a strftime-style `format`.
///
/// # Errors
/// Returns `RenderError::InvalidFormat` for a bad template and
/// `RenderError::Unrepresentable` when the year can't be formatted.
pub fn render(dt: &CalendarDateTime, zone: &Zone, format: &str) -> Result<String, RenderError> {
    let items = parse_format(format)?;
    let utc = to_utc(dt)?;
    tracing::trace!(%utc, %zone, "rendering instant");

    let text = match zone {
        Zone::Local => format_in(&utc, &Local, &items),
        Zone::Utc => format_in(&utc, &Utc, &items),
        Zone::Fixed(offset) => format_in(&utc, offset, &items),
        Zone::Named(tz) => format_in(&utc, tz, &items),
    };
    Ok(text)
}

fn to_utc(dt: &CalendarDateTime) -> Result<DateTime<Utc>, RenderError> {
    let unrepresentable = || RenderError::Unrepresentable(*dt);
    let year = i32::try_from(dt.year).map_err(|_| unrepresentable())?;
    NaiveDate::from_ymd_opt(year, dt.month.into(), dt.day_of_month.into())
        .and_then(|date| {
            date.and_hms_micro_opt(
                dt.hour.into(),
                dt.minute.into(),
                dt.second.into(),
                dt.microsecond,
            )
        })
        .map(|naive| naive.and_utc())
        .ok_or_else(unrepresentable)
}

fn format_in<Z>(utc: &DateTime<Utc>, zone: &Z, items: &[Item<'_>]) -> String
where
    Z: TimeZone,
    Z::Offset: fmt::Display,
{
    utc.with_timezone(zone)
        .format_with_items(items.iter())
        .to_string()
}
