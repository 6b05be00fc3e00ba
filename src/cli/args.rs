//! Command-line argument definitions for the readings processor
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::{Config, DegreeEncoding};
use crate::constants::DEFAULT_LOG_LEVEL;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the temperature readings processor
///
/// Reads a hand-written log of hourly temperature readings and writes one
/// sentence per recorded hour to the output file.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "temp-readings",
    version,
    about = "Render hand-written hourly temperature logs as readable sentences",
    long_about = "Parses a log of hourly temperature readings grouped as \
                  {year N {month mmm (day hour temperature) ...} ...}, rejects months with \
                  implausible or duplicate readings, and writes one sentence per recorded hour. \
                  Paths that are not given on the command line are prompted for."
)]
pub struct Args {
    /// Readings file to parse
    ///
    /// If not specified, the file name is read from standard input.
    #[arg(value_name = "INPUT", help = "Readings file to parse")]
    pub input_path: Option<PathBuf>,

    /// File to write the rendered sentences to
    ///
    /// If not specified, the file name is read from standard input. The file
    /// is only created once the whole input has parsed successfully.
    #[arg(value_name = "OUTPUT", help = "File to write the rendered sentences to")]
    pub output_path: Option<PathBuf>,

    /// Lowest plausible temperature (inclusive)
    #[arg(
        long = "implausible-min",
        value_name = "TEMP",
        allow_hyphen_values = true,
        help = "Lowest plausible temperature (default -200)"
    )]
    pub implausible_min: Option<f64>,

    /// Highest plausible temperature (inclusive)
    #[arg(
        long = "implausible-max",
        value_name = "TEMP",
        allow_hyphen_values = true,
        help = "Highest plausible temperature (default 200)"
    )]
    pub implausible_max: Option<f64>,

    /// Write the degree sign as the single Latin-1 byte 0xB0
    #[arg(
        long = "latin1-degree",
        help = "Write the degree sign as a Latin-1 byte instead of UTF-8"
    )]
    pub latin1_degree: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input_path) = &self.input_path {
            if input_path.is_dir() {
                return Err(Error::configuration(format!(
                    "Input path is a directory: {}",
                    input_path.display()
                )));
            }
        }

        if let (Some(input), Some(output)) = (&self.input_path, &self.output_path) {
            if input == output {
                return Err(Error::configuration(
                    "Input and output paths must differ".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// Build the pass configuration from defaults plus CLI overrides
    pub fn build_config(&self) -> Result<Config> {
        let mut config = Config::default();

        if let Some(min) = self.implausible_min {
            config = config.with_implausible_min(min);
        }
        if let Some(max) = self.implausible_max {
            config = config.with_implausible_max(max);
        }
        if self.latin1_degree {
            config = config.with_degree_encoding(DegreeEncoding::Latin1);
        }

        config.validate()?;
        Ok(config)
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => DEFAULT_LOG_LEVEL,
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
