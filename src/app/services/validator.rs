//! Plausibility checks for individual readings.
//!
//! A reading is accepted when its day, hour and temperature all fall inside
//! the configured bounds. No calendar checks (month lengths, leap years) are
//! made.

use crate::app::models::Reading;
use crate::config::ValidationConfig;
use crate::constants::{MAX_DAY, MAX_HOUR, MIN_DAY, MIN_HOUR};

/// Validator for readings against day, hour and temperature bounds
#[derive(Debug, Clone, Default)]
pub struct ReadingValidator {
    config: ValidationConfig,
}

impl ReadingValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Check a reading against all bounds.
    ///
    /// Hour 24 passes; the month has no slot for it, which the parser
    /// reports separately.
    pub fn is_valid(&self, reading: &Reading) -> bool {
        (MIN_DAY..=MAX_DAY).contains(&reading.day)
            && (MIN_HOUR..=MAX_HOUR).contains(&reading.hour)
            && (self.config.implausible_min..=self.config.implausible_max)
                .contains(&reading.temperature)
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }
}

/// Check a reading against the default bounds
pub fn is_valid(reading: &Reading) -> bool {
    ReadingValidator::default().is_valid(reading)
}
