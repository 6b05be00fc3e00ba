//! Parser for hand-written hourly temperature logs
//!
//! This module reads the nested year → month → reading text format in a
//! single forward pass, validating each reading and rejecting months with
//! invalid or duplicate readings.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`cursor`] - Whitespace-skipping character cursor with line/column tracking
//! - [`grammar`] - The Reading, Month and Year routines
//! - [`reader`] - Collection loop and input handling
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use temp_readings::app::services::readings_parser::read_collection;
//!
//! # fn example() -> temp_readings::Result<()> {
//! let result = read_collection("{year 2001 {month jan (1 5 20.0)}}")?;
//!
//! println!("read {} years of readings", result.years.len());
//! # Ok(())
//! # }
//! ```

pub mod cursor;
pub mod grammar;
pub mod reader;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use grammar::{Grammar, Parsed};
pub use reader::{ReadingsParser, read_collection, read_collection_from};
pub use stats::{ParseResult, ParseStats};
