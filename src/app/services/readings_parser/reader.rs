//! Collection reader: parses years until the input runs out
//!
//! This module provides the parser entry points, handling input reading and
//! the outer year loop. A hard failure anywhere discards every year parsed
//! so far; there are no partial results.

use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

use super::grammar::{Grammar, Parsed};
use super::stats::ParseResult;
use crate::app::services::validator::ReadingValidator;
use crate::config::ValidationConfig;
use crate::{Error, Result};

/// Parser for readings files
#[derive(Debug, Clone, Default)]
pub struct ReadingsParser {
    validator: ReadingValidator,
}

impl ReadingsParser {
    /// Create a parser with the given plausibility bounds
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            validator: ReadingValidator::new(config),
        }
    }

    /// Parse every year in `source`, in input order
    pub fn parse_str(&self, source: &str) -> Result<ParseResult> {
        let mut grammar = Grammar::new(source, self.validator.clone());
        let mut years = Vec::new();

        while let Parsed::Matched(year) = grammar.parse_year()? {
            years.push(year);
        }

        let leftover = (!grammar.at_end())
            .then(|| grammar.remaining().chars().take(20).collect::<String>());

        let mut stats = grammar.into_stats();
        if let Some(leftover) = leftover {
            warn!("Ignoring input after the last year: {:?}", leftover);
            stats.trailing_input = true;
        }

        info!(
            "Parsed {} years, {} months, {} readings",
            stats.years, stats.months, stats.readings_accepted
        );

        Ok(ParseResult { years, stats })
    }

    /// Drain `reader` and parse its contents
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<ParseResult> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|e| Error::io("Failed to read readings input", e))?;
        self.parse_str(&source)
    }

    /// Read and parse a readings file
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing readings file: {}", path.display());

        let source = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("can't open input file {}", path.display()), e)
        })?;
        self.parse_str(&source)
    }
}

/// Parse every year in `source` with default bounds
pub fn read_collection(source: &str) -> Result<ParseResult> {
    ReadingsParser::default().parse_str(source)
}

/// Parse every year from `reader` with the given bounds
pub fn read_collection_from<R: Read>(reader: R, config: &ValidationConfig) -> Result<ParseResult> {
    ReadingsParser::new(config.clone()).parse_reader(reader)
}
