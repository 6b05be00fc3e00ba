//! Formatter that walks parsed years and writes one line per reading
//!
//! Lines come out in ascending (year position, month, day, hour) order.
//! Months absent from the input and hours without a reading are skipped.

use std::io::Write;
use tracing::{debug, info};

use super::sentence::sentence;
use crate::app::models::{Month, Year};
use crate::config::{DegreeEncoding, OutputConfig};
use crate::constants::{LATIN1_DEGREE_BYTE, UTF8_DEGREE};
use crate::{Error, Result};

/// Writes readings as sentences to any byte sink
#[derive(Debug, Clone, Default)]
pub struct ReadingFormatter {
    config: OutputConfig,
}

impl ReadingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write every year in order, returning the number of lines written
    pub fn write_years<W: Write>(&self, out: &mut W, years: &[Year]) -> Result<usize> {
        let mut lines = 0;
        for year in years {
            lines += self.write_year(out, year)?;
        }

        info!("Wrote {} readings from {} years", lines, years.len());
        Ok(lines)
    }

    /// Write every present month of one year
    pub fn write_year<W: Write>(&self, out: &mut W, year: &Year) -> Result<usize> {
        let mut lines = 0;
        for month in year.present_months() {
            lines += self.write_month(out, year.year, month)?;
        }

        debug!("Wrote {} readings for year {}", lines, year.year);
        Ok(lines)
    }

    fn write_month<W: Write>(&self, out: &mut W, year: i64, month: &Month) -> Result<usize> {
        let Some(index) = month.index() else {
            return Ok(0);
        };

        let mut lines = 0;
        for (day, hour, temperature) in month.recorded() {
            let line = sentence(year, index, day, hour, temperature)?;
            self.write_line(out, &line)
                .map_err(|e| Error::io("Failed to write formatted reading", e))?;
            lines += 1;
        }
        Ok(lines)
    }

    fn write_line<W: Write>(&self, out: &mut W, line: &str) -> std::io::Result<()> {
        out.write_all(line.as_bytes())?;
        match self.config.degree_encoding {
            DegreeEncoding::Utf8 => out.write_all(UTF8_DEGREE.as_bytes())?,
            DegreeEncoding::Latin1 => out.write_all(&[LATIN1_DEGREE_BYTE])?,
        }
        out.write_all(b"\n")
    }
}

/// Render years to a UTF-8 string with default settings
pub fn format_years(years: &[Year]) -> Result<String> {
    let mut buffer = Vec::new();
    ReadingFormatter::default().write_years(&mut buffer, years)?;
    String::from_utf8(buffer).map_err(|e| {
        Error::io(
            "Formatted output was not valid UTF-8",
            std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        )
    })
}
