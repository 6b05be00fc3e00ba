//! Rendering of parsed readings as human-readable sentences
//!
//! Each recorded hour becomes one line:
//!
//! ```text
//! On the 1st of January 2001 at 5:00 it was 20°
//! ```
//!
//! - [`sentence`] - Ordinal suffixes and single-line rendering
//! - [`writer`] - Walking years/months/days and writing to a sink

pub mod sentence;
pub mod writer;

#[cfg(test)]
mod tests;

pub use sentence::{format_temperature, ordinal_suffix};
pub use writer::{ReadingFormatter, format_years};
