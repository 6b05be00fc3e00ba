//! Temperature Readings Library
//!
//! A Rust library for reading hand-written hourly temperature logs, grouped by
//! year, month and day, and rendering them back as human-readable sentences.
//!
//! This library provides tools for:
//! - Parsing the nested `{year ... {month ... (day hour temp)}}` grammar in a single pass
//! - Validating readings against plausibility bounds
//! - Detecting duplicate readings within a month
//! - Formatting the parsed years as one sentence per recorded hour
//! - Comprehensive error handling with line/column positions

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod formatter;
        pub mod month_lookup;
        pub mod readings_parser;
        pub mod validator;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
}

// Re-export commonly used types
pub use app::models::{Day, Month, Reading, Year};
pub use app::services::formatter::{ReadingFormatter, format_years};
pub use app::services::readings_parser::{ParseResult, ParseStats, read_collection};
pub use config::Config;

/// Result type alias for the readings processor
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for parsing, validating and rendering temperature readings
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Missing or wrong literal, malformed number, or missing closing delimiter
    #[error("{message} at line {line}, column {column}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// Month code that is not one of the twelve known codes
    #[error("unknown month code '{code}' at line {line}, column {column}")]
    UnknownMonth {
        code: String,
        line: usize,
        column: usize,
    },

    /// One or more readings in a month failed validation
    #[error("invalid readings from month {month}: {count} rejected")]
    InvalidReadings { month: String, count: usize },

    /// One or more readings in a month hit an already recorded hour
    #[error("duplicate readings in month {month}: {count} repeated")]
    DuplicateReadings { month: String, count: usize },

    /// Month index outside 0..12 reached the month lookup
    #[error("bad month index: {index}")]
    MonthOutOfRange { index: i64 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a syntax error at the given position
    pub fn syntax(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::Syntax {
            message: message.into(),
            line,
            column,
        }
    }

    /// Create an unknown month code error
    pub fn unknown_month(code: impl Into<String>, line: usize, column: usize) -> Self {
        Self::UnknownMonth {
            code: code.into(),
            line,
            column,
        }
    }

    /// Create an invalid readings error for a month
    pub fn invalid_readings(month: impl Into<String>, count: usize) -> Self {
        Self::InvalidReadings {
            month: month.into(),
            count,
        }
    }

    /// Create a duplicate readings error for a month
    pub fn duplicate_readings(month: impl Into<String>, count: usize) -> Self {
        Self::DuplicateReadings {
            month: month.into(),
            count,
        }
    }

    /// Create a month index lookup error
    pub fn month_out_of_range(index: i64) -> Self {
        Self::MonthOutOfRange { index }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
