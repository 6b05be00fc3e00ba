//! Recursive-descent routines for the readings grammar
//!
//! ```text
//! Year    := '{' 'year' <int> Month* '}'
//! Month   := '{' 'month' <code> Reading* '}'
//! Reading := '(' <int:day> <int:hour> <float:temperature> ')'
//! ```
//!
//! Each routine returns `Ok(Parsed::NoMatch)` when its opening delimiter is
//! absent, which ends the enclosing repetition, and `Err(..)` for anything
//! that must abort the whole pass.
//!
//! End of input counts as an absent opening delimiter at every level, so an
//! unterminated record reports the missing close (`bad end of month`,
//! `bad end of year`) rather than the `bad reading` or `bad start of month`
//! a reader expecting another construct there would report.

use tracing::{debug, trace, warn};

use super::cursor::Cursor;
use super::stats::ParseStats;
use crate::app::models::{Month, Reading, RecordOutcome, Year};
use crate::app::services::month_lookup::month_to_int;
use crate::app::services::validator::ReadingValidator;
use crate::constants::grammar::{
    MONTH_KEYWORD, READING_CLOSE, READING_OPEN, RECORD_CLOSE, RECORD_OPEN, YEAR_KEYWORD,
};
use crate::{Error, Result};

/// Outcome of a routine that did not hard-fail
#[derive(Debug, Clone, PartialEq)]
pub enum Parsed<T> {
    /// The construct was present and fully parsed
    Matched(T),
    /// The opening delimiter was absent; nothing was consumed
    NoMatch,
}

/// The three grammar routines sharing one cursor
#[derive(Debug)]
pub struct Grammar<'src> {
    cursor: Cursor<'src>,
    validator: ReadingValidator,
    stats: ParseStats,
}

impl<'src> Grammar<'src> {
    pub fn new(source: &'src str, validator: ReadingValidator) -> Self {
        Self {
            cursor: Cursor::new(source),
            validator,
            stats: ParseStats::new(),
        }
    }

    /// Parse one `(day hour temperature)` reading
    pub fn parse_reading(&mut self) -> Result<Parsed<Reading>> {
        let start = self.cursor.location();
        if !self.cursor.eat(READING_OPEN) {
            return Ok(Parsed::NoMatch);
        }

        let day = self.cursor.read_int();
        let hour = self.cursor.read_int();
        let temperature = self.cursor.read_float();

        match (day, hour, temperature) {
            (Some(day), Some(hour), Some(temperature)) if self.cursor.eat(READING_CLOSE) => {
                let reading = Reading::new(day, hour, temperature);
                trace!("Parsed reading {:?}", reading);
                Ok(Parsed::Matched(reading))
            }
            _ => Err(Error::syntax("bad reading", start.line, start.column)),
        }
    }

    /// Parse one `{month code readings...}` record.
    ///
    /// Invalid and duplicate readings are counted across the whole month and
    /// reported once, after the last reading.
    pub fn parse_month(&mut self) -> Result<Parsed<Month>> {
        if !self.cursor.eat(RECORD_OPEN) {
            return Ok(Parsed::NoMatch);
        }

        let start = self.cursor.location();
        if self.cursor.read_word() != Some(MONTH_KEYWORD) {
            return Err(Error::syntax("bad start of month", start.line, start.column));
        }

        let code_at = self.cursor.location();
        let code = self
            .cursor
            .read_word()
            .ok_or_else(|| Error::syntax("bad start of month", code_at.line, code_at.column))?;
        let index = month_to_int(code)
            .ok_or_else(|| Error::unknown_month(code, code_at.line, code_at.column))?;

        let mut month = Month::new(index);
        let mut invalids = 0;
        let mut duplicates = 0;
        let mut accepted = 0;

        while let Parsed::Matched(reading) = self.parse_reading()? {
            if !self.validator.is_valid(&reading) {
                warn!("Rejected implausible reading in {}: {:?}", code, reading);
                invalids += 1;
                continue;
            }

            match month.record(&reading) {
                RecordOutcome::Stored => accepted += 1,
                RecordOutcome::Overwrote { previous } => {
                    warn!(
                        "Duplicate reading in {} for day {} hour {}: {} replaces {}",
                        code, reading.day, reading.hour, reading.temperature, previous
                    );
                    duplicates += 1;
                }
                RecordOutcome::NoSlot => {
                    warn!(
                        "Reading in {} has no hour slot (day {} hour {})",
                        code, reading.day, reading.hour
                    );
                    invalids += 1;
                }
            }
        }

        if invalids > 0 {
            return Err(Error::invalid_readings(code, invalids));
        }
        if duplicates > 0 {
            return Err(Error::duplicate_readings(code, duplicates));
        }
        self.expect_close("bad end of month")?;

        self.stats.months += 1;
        self.stats.readings_accepted += accepted;
        debug!("Parsed month {} with {} readings", code, accepted);

        Ok(Parsed::Matched(month))
    }

    /// Parse one `{year n months...}` record
    pub fn parse_year(&mut self) -> Result<Parsed<Year>> {
        if !self.cursor.eat(RECORD_OPEN) {
            return Ok(Parsed::NoMatch);
        }

        let start = self.cursor.location();
        if self.cursor.read_word() != Some(YEAR_KEYWORD) {
            return Err(Error::syntax("bad start of year", start.line, start.column));
        }

        let number_at = self.cursor.location();
        let number = self
            .cursor
            .read_int()
            .ok_or_else(|| Error::syntax("bad start of year", number_at.line, number_at.column))?;

        let mut year = Year::new(number);
        while let Parsed::Matched(month) = self.parse_month()? {
            let index = month.index();
            if year.store_month(month) {
                warn!(
                    "Month {:?} appears more than once in year {}; keeping the later one",
                    index, number
                );
                self.stats.month_overwrites += 1;
            }
        }
        self.expect_close("bad end of year")?;

        self.stats.years += 1;
        debug!(
            "Parsed year {} with {} months",
            number,
            year.present_months().count()
        );

        Ok(Parsed::Matched(year))
    }

    /// True once only whitespace remains
    pub fn at_end(&mut self) -> bool {
        self.cursor.at_end()
    }

    /// Unconsumed input, for diagnostics after the last year
    pub fn remaining(&mut self) -> &'src str {
        self.cursor.remaining()
    }

    pub fn stats(&self) -> &ParseStats {
        &self.stats
    }

    pub fn into_stats(self) -> ParseStats {
        self.stats
    }

    fn expect_close(&mut self, message: &str) -> Result<()> {
        let at = self.cursor.location();
        if self.cursor.eat(RECORD_CLOSE) {
            Ok(())
        } else {
            Err(Error::syntax(message, at.line, at.column))
        }
    }
}
