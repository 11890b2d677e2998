//! Turning raw timestamp text into rendered lines.

use crate::ParseError;
use crate::render::{RenderError, Zone, render};
use crate::types::EpochMillis;
use std::io::{self, BufRead};

/// Error type for converting a single timestamp.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    /// Input isn't a valid timestamp.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Timestamp is valid but couldn't be rendered.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The underlying reader failed.
    #[error("failed to read line {line}")]
    Io {
        line: usize,
        #[source]
        source: io::Error,
    },
}

/// Parses one raw timestamp, ignoring surrounding whitespace.
///
/// # Errors
/// Returns `ParseError` for empty, non-integer or out of range input.
pub fn parse_timestamp(raw: &str) -> Result<EpochMillis, ParseError> {
    raw.parse()
}

/// Decomposes and renders an already validated timestamp.
///
/// # Errors
/// Returns `RenderError` if the template is invalid or the instant can't be
/// formatted.
pub fn convert(epoch: EpochMillis, zone: &Zone, format: &str) -> Result<String, RenderError> {
    let dt = epoch.to_datetime();
    tracing::debug!(%epoch, %dt, "decomposed timestamp");
    render(&dt, zone, format)
}

/// Parses, decomposes and renders one raw timestamp.
///
/// # Errors
/// Returns `ConvertError::Parse` or `ConvertError::Render`.
pub fn convert_one(raw: &str, zone: &Zone, format: &str) -> Result<String, ConvertError> {
    let epoch = parse_timestamp(raw)?;
    Ok(convert(epoch, zone, format)?)
}

/// Converts a newline separated stream of timestamps, one result per line.
///
/// A bad line yields an `Err` for that line only; later lines are still
/// converted. Lines that aren't valid UTF-8 are reported as
/// `ParseError::InvalidFormat`; `ConvertError::Io` is left for failures of
/// the reader itself.
pub fn convert_stream<'a, R>(
    reader: R,
    zone: &'a Zone,
    format: &'a str,
) -> impl Iterator<Item = Result<String, ConvertError>> + 'a
where
    R: BufRead + 'a,
{
    reader.split(b'\n').enumerate().map(move |(index, line)| {
        let line_no = index + 1;
        let bytes = line.map_err(|source| ConvertError::Io {
            line: line_no,
            source,
        })?;
        let result = decode_line(&bytes)
            .map_err(ConvertError::from)
            .and_then(|raw| convert_one(raw, zone, format));
        if let Err(err) = &result {
            tracing::debug!(line = line_no, %err, "skipping timestamp");
        }
        result
    })
}

/// Borrows a line as text, keeping its lossy form for the error message.
fn decode_line(bytes: &[u8]) -> Result<&str, ParseError> {
    std::str::from_utf8(bytes).map_err(|_| {
        let lossy = String::from_utf8_lossy(bytes);
        ParseError::InvalidFormat(lossy.trim().to_owned())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DEFAULT_FORMAT;
    use crate::types::RangeError;
    use std::io::{Cursor, Read};

    #[test]
    fn test_parse_timestamp() {
        assert_eq!(
            parse_timestamp(" 1704467045000 ").unwrap().millis(),
            1_704_467_045_000
        );
        assert_eq!(parse_timestamp("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(
            parse_timestamp("253402300800000").unwrap_err(),
            ParseError::OutOfRange(RangeError::Overflow {
                millis: 253_402_300_800_000
            })
        );
    }

    #[test]
    fn test_convert_one() {
        assert_eq!(
            convert_one("1704467045000", &Zone::Utc, DEFAULT_FORMAT).unwrap(),
            "Jan 5, 2024 3:04:05 PM +0000"
        );
        assert_eq!(
            convert_one("-1", &Zone::Utc, "%Y-%m-%d %H:%M:%S%.3f").unwrap(),
            "1969-12-31 23:59:59.999"
        );
        assert!(matches!(
            convert_one("nope", &Zone::Utc, DEFAULT_FORMAT),
            Err(ConvertError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            convert_one("0", &Zone::Utc, "%"),
            Err(ConvertError::Render(RenderError::InvalidFormat(_)))
        ));
    }

    #[test]
    fn test_convert_stream_skips_bad_lines() {
        let input = "0\nnot a number\n\n253402300799000\n253402300800000\n946684800000\n";
        let reader = Cursor::new(input);
        let converted: Vec<_> = convert_stream(reader, &Zone::Utc, "%F %T").collect();

        assert_eq!(converted.len(), 6);
        assert_eq!(converted[0].as_deref().unwrap(), "1970-01-01 00:00:00");
        assert!(matches!(
            converted[1],
            Err(ConvertError::Parse(ParseError::InvalidFormat(_)))
        ));
        assert!(matches!(
            converted[2],
            Err(ConvertError::Parse(ParseError::EmptyInput))
        ));
        assert_eq!(converted[3].as_deref().unwrap(), "9999-12-31 23:59:59");
        assert!(matches!(
            converted[4],
            Err(ConvertError::Parse(ParseError::OutOfRange(_)))
        ));
        assert_eq!(converted[5].as_deref().unwrap(), "2000-01-01 00:00:00");
    }

    #[test]
    fn test_convert_stream_skips_invalid_utf8() {
        let reader = Cursor::new(b"0\n\xff\n946684800000\n".to_vec());
        let converted: Vec<_> = convert_stream(reader, &Zone::Utc, "%Y").collect();

        assert_eq!(converted.len(), 3);
        assert_eq!(converted[0].as_deref().unwrap(), "1970");
        match &converted[1] {
            Err(ConvertError::Parse(ParseError::InvalidFormat(raw))) => {
                assert_eq!(raw, "\u{fffd}");
            }
            other => panic!("expected a parse error, got {other:?}"),
        }
        assert_eq!(converted[2].as_deref().unwrap(), "2000");
    }

    #[test]
    fn test_convert_stream_handles_crlf_and_missing_trailing_newline() {
        let input = "0\r\n1000";
        let results: Vec<String> = convert_stream(Cursor::new(input), &Zone::Utc, "%H:%M:%S")
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(results, ["00:00:00", "00:00:01"]);
    }

    #[test]
    fn test_convert_stream_reports_io_errors() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("disk on fire"))
            }
        }

        let reader = io::BufReader::new(FailingReader);
        let first = convert_stream(reader, &Zone::Utc, DEFAULT_FORMAT).next();
        assert!(matches!(first, Some(Err(ConvertError::Io { line: 1, .. }))));
    }

    #[test]
    fn test_convert_error_display() {
        let err = ConvertError::from(ParseError::EmptyInput);
        assert_eq!(err.to_string(), "empty timestamp string");

        let err = ConvertError::Io {
            line: 3,
            source: io::Error::other("boom"),
        };
        assert_eq!(err.to_string(), "failed to read line 3");
    }
}
