//! Test utilities for readings parser testing
//!
//! This module provides sample inputs and helper functions used across the
//! parser test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::app::services::validator::ReadingValidator;

use super::grammar::Grammar;


/// Helper to create a grammar over `source` with default bounds
pub fn grammar(source: &str) -> Grammar<'_> {
    Grammar::new(source, ReadingValidator::default())
}

/// Helper to create a multi-year sample with sparse readings
pub fn create_sample_log() -> String {
    r#"{ year 1990 }
{year 1991 { month jun }}
{ year 1992 { month jan ( 1 0 61.5) } {month feb (1 1 64) (2 2 65.2) } }
{year 2000
	{ month feb (1 1 68 ) (2 3 66.66 ) ( 1 0 67.2)}
	{ month dec (15 15 -9.2 ) (15 14 -8.8) (14 0 -2) }
}
"#
    .to_string()
}

/// Helper to create a temporary file with given content
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}
