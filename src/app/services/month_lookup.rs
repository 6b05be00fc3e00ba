//! Month code and name lookup.
//!
//! Maps the three-letter codes used in the input grammar to zero-based month
//! indices, and indices to the full names used when rendering.

use crate::constants::{MONTH_CODES, MONTH_NAMES};
use crate::{Error, Result};

/// Decode a three-letter month code (exact, case-sensitive match).
///
/// Returns `None` when the code is not one of the twelve known codes; that is
/// a normal outcome, not an error.
pub fn month_to_int(code: &str) -> Option<usize> {
    MONTH_CODES.iter().position(|&known| known == code)
}

/// Full month name for a zero-based index
pub fn int_to_month(index: i64) -> Result<&'static str> {
    usize::try_from(index)
        .ok()
        .and_then(|i| MONTH_NAMES.get(i))
        .copied()
        .ok_or_else(|| Error::month_out_of_range(index))
}
