// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod util;

use std::path::{Path, PathBuf};
use anyhow::{bail, Context, Result};
use application::{BatchConverter, FormatOptions};
use domain::ConversionSummary;
use infrastructure::{csv_reader, Config, FileNoteSink, StdoutNoteSink};
use tracing::{debug, info};
use crate::cli::args::{Args, Command};

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting papernote with arguments");

    match args.command {
        Command::Convert {
            sources,
            output,
            recursive,
            fail_fast,
            json,
            format,
        } => {
            let config = Config::resolve(args.config.as_deref())?;
            let options = format.apply(config.format);

            // Command line wins over the config file
            let sources = if sources.is_empty() {
                config.paths.sources
            } else {
                sources
            };
            if sources.is_empty() {
                bail!("No source directories given, pass them as arguments or set paths.sources in the config");
            }
            let output = output.unwrap_or(config.paths.output);
            let recursive = recursive || config.paths.recursive;

            let summary = convert(&sources, &output, options, recursive, fail_fast)?;
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&summary).context("Failed to serialize summary")?
                );
            } else {
                println!("{}", summary);
            }
        }
        Command::Preview {
            file,
            limit,
            format,
        } => {
            let config = Config::resolve(args.config.as_deref())?;
            preview(&file, limit, format.apply(config.format))?;
        }
        Command::InitConfig { path } => {
            let path = match path {
                Some(path) => path,
                None => Config::default_path().context("Could not find config directory")?,
            };
            Config::create_default(&path)?;
            println!("Wrote default configuration to {}", path.display());
        }
    }

    Ok(())
}

/// Convert all exports under `sources` into notes in `output`
pub fn convert(
    sources: &[PathBuf],
    output: &Path,
    options: FormatOptions,
    recursive: bool,
    fail_fast: bool,
) -> Result<ConversionSummary> {
    info!(?sources, output = %output.display(), "Converting exports");

    let sink = FileNoteSink::new(output)?;
    let mut converter = BatchConverter::new(sink, options, fail_fast);
    converter.convert_dirs(sources, recursive)
}

/// Print the notes of one export to stdout
pub fn preview(file: &Path, limit: Option<usize>, options: FormatOptions) -> Result<ConversionSummary> {
    let mut rows = csv_reader::read_records(file)?;
    if let Some(limit) = limit {
        rows.truncate(limit);
    }

    let mut converter = BatchConverter::new(StdoutNoteSink::new(), options, false);
    converter.convert_rows(file, rows)?;
    info!(summary = %converter.summary(), "Preview finished");

    Ok(converter.summary().clone())
}
