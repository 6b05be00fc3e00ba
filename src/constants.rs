//! Application constants for the readings processor
//!
//! This module contains the month tables, slot counts, plausibility defaults
//! and grammar literals used throughout the application.

// =============================================================================
// Calendar Tables
// =============================================================================

/// Three-letter month codes accepted by the input grammar, indexed 0..12
pub const MONTH_CODES: [&str; MONTHS_PER_YEAR] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Full month names used when rendering, indexed 0..12
pub const MONTH_NAMES: [&str; MONTHS_PER_YEAR] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// =============================================================================
// Data Model Slot Counts
// =============================================================================

/// Month slots per year
pub const MONTHS_PER_YEAR: usize = 12;

/// Day slots per month; slot 0 is never written
pub const DAY_SLOTS: usize = 32;

/// Hour slots per day
pub const HOURS_PER_DAY: usize = 24;

// =============================================================================
// Validation Bounds
// =============================================================================

/// First valid day of month
pub const MIN_DAY: i64 = 1;

/// Last valid day of month
pub const MAX_DAY: i64 = 31;

/// First valid hour
pub const MIN_HOUR: i64 = 0;

/// Upper hour bound accepted by validation.
///
/// Inclusive, so 24 validates even though a day only stores hours 0..=23.
pub const MAX_HOUR: i64 = 24;

/// Default lower plausibility bound for temperatures
pub const DEFAULT_IMPLAUSIBLE_MIN: f64 = -200.0;

/// Default upper plausibility bound for temperatures
pub const DEFAULT_IMPLAUSIBLE_MAX: f64 = 200.0;

/// Significant digits kept when rendering a temperature
pub const TEMPERATURE_SIGNIFICANT_DIGITS: usize = 6;

// =============================================================================
// Grammar Literals
// =============================================================================

pub mod grammar {
    pub const YEAR_KEYWORD: &str = "year";
    pub const MONTH_KEYWORD: &str = "month";

    pub const RECORD_OPEN: char = '{';
    pub const RECORD_CLOSE: char = '}';
    pub const READING_OPEN: char = '(';
    pub const READING_CLOSE: char = ')';
}

// =============================================================================
// Output Rendering
// =============================================================================

/// Latin-1 byte for the degree sign, used for legacy byte-for-byte output
pub const LATIN1_DEGREE_BYTE: u8 = 0xB0;

/// Unicode degree sign
pub const UTF8_DEGREE: &str = "\u{00B0}";

/// Default log level when no verbosity flag is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";
