//! Command implementation for the readings processor CLI
//!
//! This module contains the main execution logic: logging setup, path
//! resolution, the parse-then-format pass, and status reporting.

use crate::app::services::formatter::ReadingFormatter;
use crate::app::services::readings_parser::{ParseResult, ParseStats, ReadingsParser};
use crate::cli::args::Args;
use crate::cli::input::{prompt_input_path, prompt_output_path};
use crate::config::Config;
use crate::{Error, Result};
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Summary of one parse-then-format pass
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of years parsed
    pub years_read: usize,
    /// Number of sentences written
    pub lines_written: usize,
    /// Detailed parse statistics
    pub stats: ParseStats,
    /// Where the sentences were written
    pub output_path: PathBuf,
    /// Total processing time
    pub processing_time: Duration,
}

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Resolve input and output paths, prompting for missing ones
/// 3. Parse the whole input; nothing is written if this fails
/// 4. Write one sentence per reading and report the year count
pub fn run(args: Args) -> Result<RunSummary> {
    let start_time = Instant::now();

    setup_logging(&args);
    debug!("Command line arguments: {:?}", args);

    args.validate()?;
    let config = args.build_config()?;

    let input_path = match &args.input_path {
        Some(path) => path.clone(),
        None => prompt_input_path().map_err(prompt_error)?,
    };
    let input = File::open(&input_path).map_err(|e| {
        Error::io(format!("can't open input file {}", input_path.display()), e)
    })?;

    let output_path = match &args.output_path {
        Some(path) => path.clone(),
        None => prompt_output_path().map_err(prompt_error)?,
    };

    info!(
        "Rendering {} into {}",
        input_path.display(),
        output_path.display()
    );

    let mut summary = process_to_file(input, &output_path, &config)?;
    summary.processing_time = start_time.elapsed();

    println!("read {} years of readings", summary.years_read);
    debug!("Parse statistics: {:?}", summary.stats);
    info!(
        "Wrote {} lines to {} in {:.2?}",
        summary.lines_written,
        summary.output_path.display(),
        summary.processing_time
    );

    Ok(summary)
}

/// Parse `input`, then create `output_path` and write the sentences into it
pub fn process_to_file<R: Read>(input: R, output_path: &Path, config: &Config) -> Result<RunSummary> {
    let parsed = ReadingsParser::new(config.validation.clone()).parse_reader(input)?;

    let file = File::create(output_path).map_err(|e| {
        Error::io(format!("can't open output file {}", output_path.display()), e)
    })?;
    let mut writer = BufWriter::new(file);

    let mut summary = render(parsed, &mut writer, config)?;
    writer
        .flush()
        .map_err(|e| Error::io("Failed to flush output file", e))?;

    summary.output_path = output_path.to_path_buf();
    Ok(summary)
}

/// Write already parsed years to `output`
fn render<W: Write>(parsed: ParseResult, output: &mut W, config: &Config) -> Result<RunSummary> {
    let lines_written =
        ReadingFormatter::new(config.output.clone()).write_years(output, &parsed.years)?;

    Ok(RunSummary {
        years_read: parsed.years.len(),
        lines_written,
        stats: parsed.stats,
        ..Default::default()
    })
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("temp_readings={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

fn prompt_error(error: anyhow::Error) -> Error {
    Error::io(
        "Failed to read file name",
        std::io::Error::other(format!("{:#}", error)),
    )
}
