//! Configuration management and validation.
//!
//! Provides configuration structures for reading validation bounds and
//! output rendering, with builder-style overrides and consistency checks.

use crate::constants::{DEFAULT_IMPLAUSIBLE_MAX, DEFAULT_IMPLAUSIBLE_MIN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Top-level configuration for a parse-then-format pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Plausibility bounds applied to each reading
    pub validation: ValidationConfig,

    /// Rendering options for the formatter
    pub output: OutputConfig,
}

/// Plausibility bounds for temperature readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Lowest accepted temperature (inclusive)
    pub implausible_min: f64,

    /// Highest accepted temperature (inclusive)
    pub implausible_max: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            implausible_min: DEFAULT_IMPLAUSIBLE_MIN,
            implausible_max: DEFAULT_IMPLAUSIBLE_MAX,
        }
    }
}

/// Output rendering options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// How the trailing degree sign is encoded
    pub degree_encoding: DegreeEncoding,
}

/// Encodings for the degree sign written after each temperature
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DegreeEncoding {
    /// UTF-8 `°` (two bytes)
    #[default]
    Utf8,
    /// Single Latin-1 byte 0xB0, for legacy byte-compatible output
    Latin1,
}

impl Config {
    /// Set the lower plausibility bound
    pub fn with_implausible_min(mut self, min: f64) -> Self {
        self.validation.implausible_min = min;
        self
    }

    /// Set the upper plausibility bound
    pub fn with_implausible_max(mut self, max: f64) -> Self {
        self.validation.implausible_max = max;
        self
    }

    /// Select the degree sign encoding
    pub fn with_degree_encoding(mut self, encoding: DegreeEncoding) -> Self {
        self.output.degree_encoding = encoding;
        self
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        self.validation.validate()?;
        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

impl ValidationConfig {
    /// Check that both bounds are finite and ordered
    pub fn validate(&self) -> Result<()> {
        if !self.implausible_min.is_finite() || !self.implausible_max.is_finite() {
            return Err(Error::configuration(format!(
                "Plausibility bounds must be finite, got [{}, {}]",
                self.implausible_min, self.implausible_max
            )));
        }

        if self.implausible_min > self.implausible_max {
            return Err(Error::configuration(format!(
                "Lower plausibility bound {} exceeds upper bound {}",
                self.implausible_min, self.implausible_max
            )));
        }

        Ok(())
    }
}
