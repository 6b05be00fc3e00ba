//! Parsing statistics and result structures for readings files
//!
//! This module provides types for tracking what a parse pass consumed and
//! for handing the parsed years to the formatter.

use crate::app::models::Year;

/// Parsing result with years in input order and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Successfully parsed years, in input order
    pub years: Vec<Year>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

/// Simple parsing statistics
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Number of years parsed
    pub years: usize,

    /// Number of months parsed
    pub months: usize,

    /// Number of readings stored
    pub readings_accepted: usize,

    /// Months that replaced an earlier month with the same code in one year
    pub month_overwrites: usize,

    /// Set when unparsed text followed the last year
    pub trailing_input: bool,
}

impl ParseStats {
    /// Create new empty statistics
    pub fn new() -> Self {
        Self::default()
    }
}
