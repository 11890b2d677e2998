use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use epoch_parser::{DEFAULT_FORMAT, LOCAL_ZONE, RenderError, Zone, validate_format};

/// Converts Unix epoch time to human readable date and time in local timezone.
#[derive(Parser)]
#[command(
    name = "epoch-parser",
    version,
    about = "Converts Unix epoch time to human readable date and time in local timezone"
)]
#[command(group(ArgGroup::new("input").required(true).args(["timestamp", "file"])))]
pub struct Cli {
    /// Unix epoch timestamp in milliseconds.
    #[arg(
        short,
        long,
        visible_alias = "ts",
        value_name = "MILLIS",
        allow_negative_numbers = true
    )]
    pub timestamp: Option<i64>,

    /// Path to file containing newline separated epoch timestamps ("-" reads stdin).
    #[arg(short, long, value_name = "FILEPATH")]
    pub file: Option<PathBuf>,

    /// Timezone to render in: "local", "utc", an offset like "+05:30" or an IANA name.
    #[arg(
        long = "tz",
        env = "EPOCH_PARSER_TZ",
        default_value = LOCAL_ZONE,
        value_name = "ZONE"
    )]
    pub zone: Zone,

    /// strftime-style output template.
    #[arg(
        long,
        env = "EPOCH_PARSER_FORMAT",
        default_value = DEFAULT_FORMAT,
        value_name = "FMT",
        value_parser = parse_format
    )]
    pub format: String,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

fn parse_format(s: &str) -> Result<String, RenderError> {
    validate_format(s)?;
    Ok(s.to_owned())
}
