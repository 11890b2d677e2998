//! Converts Unix epoch timestamps in milliseconds into calendar fields and
//! human readable text.
//!
//! ```
//! use epoch_parser::{DEFAULT_FORMAT, EpochMillis, Zone, decompose, render};
//!
//! let epoch: EpochMillis = "1704467045000".parse().unwrap();
//! let dt = decompose(epoch.seconds());
//! assert_eq!((dt.year, dt.month, dt.day_of_month), (2024, 1, 5));
//!
//! let text = render(&dt, &Zone::Utc, DEFAULT_FORMAT).unwrap();
//! assert_eq!(text, "Jan 5, 2024 3:04:05 PM +0000");
//! ```

mod consts;
mod datetime;
mod decompose;
mod input;
mod prelude;
mod render;
mod types;

pub use consts::*;
pub use datetime::CalendarDateTime;
pub use decompose::decompose;
pub use input::{ConvertError, convert, convert_one, convert_stream, parse_timestamp};
pub use render::{RenderError, Zone, render, validate_format};
pub use types::{EpochMillis, RangeError, days_in_month, is_leap_year, validate_epoch_millis};

use crate::prelude::*;

/// Error returned when raw text can't be turned into an [`EpochMillis`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "invalid timestamp {_0:?}: not an integer")]
    InvalidFormat(String),
    #[display(fmt = "{_0}")]
    OutOfRange(RangeError),
    #[display(fmt = "empty timestamp string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl From<RangeError> for ParseError {
    fn from(err: RangeError) -> Self {
        Self::OutOfRange(err)
    }
}
