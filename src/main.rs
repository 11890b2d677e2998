mod cli;
mod logging;

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process;

use anyhow::{Context, Result, bail};
use clap::Parser;
use epoch_parser::{ConvertError, EpochMillis, Zone, convert, convert_stream};

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    tracing::info!(zone = %cli.zone, format = %cli.format, "converting");
    match (cli.timestamp, cli.file.as_deref()) {
        (Some(millis), _) => convert_single(millis, &cli.zone, &cli.format),
        (None, Some(path)) => convert_file(path, &cli.zone, &cli.format),
        (None, None) => bail!("one of --timestamp or --file is required"),
    }
}

fn convert_single(millis: i64, zone: &Zone, format: &str) -> Result<()> {
    let epoch = EpochMillis::new(millis).context("invalid epoch timestamp")?;
    let line = convert(epoch, zone, format).context("invalid epoch timestamp")?;
    println!("{line}");
    Ok(())
}

fn convert_file(path: &Path, zone: &Zone, format: &str) -> Result<()> {
    let reader: Box<dyn BufRead> = if path == Path::new("-") {
        Box::new(io::stdin().lock())
    } else {
        let file =
            File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        Box::new(BufReader::new(file))
    };

    let mut out = io::stdout().lock();
    let (mut converted, mut skipped) = (0usize, 0usize);
    for result in convert_stream(reader, zone, format) {
        match result {
            Ok(line) => {
                writeln!(out, "{line}")?;
                converted += 1;
            }
            Err(err @ ConvertError::Io { .. }) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()));
            }
            Err(err) => {
                writeln!(out, "invalid epoch timestamp: {err}")?;
                skipped += 1;
            }
        }
    }
    out.flush()?;

    tracing::info!(converted, skipped, "done");
    Ok(())
}
