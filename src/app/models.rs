//! Core data structures for hourly temperature readings.
//!
//! The model is arena-by-index: a year holds twelve month slots, a month
//! holds thirty-two day slots (slot 0 unused) and a day holds twenty-four
//! hour slots. The index of each slot is its calendar meaning.
//!
//! Month and day slot arrays are boxed. A full year is roughly 150 KB of
//! slots, and moving that by value through the parser must not land on the
//! stack.

use crate::constants::{DAY_SLOTS, HOURS_PER_DAY, MONTHS_PER_YEAR};

/// A single parsed `(day hour temperature)` triple.
///
/// Only lives for the duration of one month's reading loop; the values are
/// raw so that validation can see out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub day: i64,
    pub hour: i64,
    pub temperature: f64,
}

impl Reading {
    pub fn new(day: i64, hour: i64, temperature: f64) -> Self {
        Self {
            day,
            hour,
            temperature,
        }
    }
}

/// Hour slots for one day; `None` means no reading was recorded
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Day {
    hours: [Option<f64>; HOURS_PER_DAY],
}

impl Default for Day {
    fn default() -> Self {
        Self {
            hours: [None; HOURS_PER_DAY],
        }
    }
}

impl Day {
    /// Temperature recorded at `hour`, if any
    pub fn get(&self, hour: usize) -> Option<f64> {
        self.hours.get(hour).copied().flatten()
    }

    /// Iterate recorded `(hour, temperature)` pairs in ascending hour order
    pub fn recorded(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.hours
            .iter()
            .enumerate()
            .filter_map(|(hour, slot)| slot.map(|temperature| (hour, temperature)))
    }

    pub fn is_empty(&self) -> bool {
        self.hours.iter().all(Option::is_none)
    }

    fn slot_mut(&mut self, hour: usize) -> Option<&mut Option<f64>> {
        self.hours.get_mut(hour)
    }
}

/// Result of writing a reading into a month
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordOutcome {
    /// The slot was empty and now holds the reading
    Stored,
    /// The slot already held a value; it now holds the new reading
    Overwrote { previous: f64 },
    /// The day or hour has no storage slot; nothing was written
    NoSlot,
}

/// One month of readings.
///
/// `index` is `None` until the parser sets it from the month code, and a
/// year slot whose month is still unset was absent from the input.
#[derive(Debug, Clone, PartialEq)]
pub struct Month {
    index: Option<usize>,
    days: Box<[Day; DAY_SLOTS]>,
}

impl Default for Month {
    fn default() -> Self {
        Self {
            index: None,
            days: Box::new([Day::default(); DAY_SLOTS]),
        }
    }
}

impl Month {
    /// Create an empty month with its calendar index set
    pub fn new(index: usize) -> Self {
        Self {
            index: Some(index),
            ..Self::default()
        }
    }

    /// Zero-based calendar index, `None` when unset
    pub fn index(&self) -> Option<usize> {
        self.index
    }

    pub fn is_set(&self) -> bool {
        self.index.is_some()
    }

    /// Day slot `day` (1..=31; slot 0 exists but is never written)
    pub fn day(&self, day: usize) -> Option<&Day> {
        self.days.get(day)
    }

    /// Write a reading into `days[day].hours[hour]`.
    ///
    /// The write happens even if the slot is already occupied; callers count
    /// `Overwrote` as a duplicate. Day 0 is never written.
    pub fn record(&mut self, reading: &Reading) -> RecordOutcome {
        let (Ok(day), Ok(hour)) = (usize::try_from(reading.day), usize::try_from(reading.hour))
        else {
            return RecordOutcome::NoSlot;
        };
        if day == 0 {
            return RecordOutcome::NoSlot;
        }

        let Some(slot) = self.days.get_mut(day).and_then(|d| d.slot_mut(hour)) else {
            return RecordOutcome::NoSlot;
        };

        match slot.replace(reading.temperature) {
            None => RecordOutcome::Stored,
            Some(previous) => RecordOutcome::Overwrote { previous },
        }
    }

    /// Iterate recorded `(day, hour, temperature)` triples in ascending
    /// (day, hour) order
    pub fn recorded(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.days
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.is_empty())
            .flat_map(|(day, d)| {
                d.recorded()
                    .map(move |(hour, temperature)| (day, hour, temperature))
            })
    }

    pub fn reading_count(&self) -> usize {
        self.recorded().count()
    }
}

/// One year: a year number plus twelve month slots
#[derive(Debug, Clone, PartialEq)]
pub struct Year {
    pub year: i64,
    months: Box<[Month; MONTHS_PER_YEAR]>,
}

impl Year {
    /// Create a year with every month slot unset
    pub fn new(year: i64) -> Self {
        Self {
            year,
            months: Box::new(std::array::from_fn(|_| Month::default())),
        }
    }

    /// All twelve slots in calendar order, set or not
    pub fn months(&self) -> &[Month; MONTHS_PER_YEAR] {
        &self.months
    }

    /// Store a parsed month at its own index.
    ///
    /// A month already present at that index is replaced silently; the return
    /// value reports whether that happened. Unset months are not stored.
    pub fn store_month(&mut self, month: Month) -> bool {
        let Some(index) = month.index() else {
            return false;
        };
        let Some(slot) = self.months.get_mut(index) else {
            return false;
        };

        let overwrote = slot.is_set();
        *slot = month;
        overwrote
    }

    /// Months present in the input, in calendar order
    pub fn present_months(&self) -> impl Iterator<Item = &Month> {
        self.months().iter().filter(|m| m.is_set())
    }

    pub fn reading_count(&self) -> usize {
        self.present_months().map(Month::reading_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_day_has_no_readings() {
        let day = Day::default();
        assert!(day.is_empty());
        assert_eq!(day.recorded().count(), 0);
        assert_eq!(day.get(0), None);
        assert_eq!(day.get(99), None);
    }

    #[test]
    fn test_month_record_and_overwrite() {
        let mut month = Month::new(3);

        let outcome = month.record(&Reading::new(5, 10, 12.5));
        assert_eq!(outcome, RecordOutcome::Stored);

        let outcome = month.record(&Reading::new(5, 10, 14.0));
        assert_eq!(outcome, RecordOutcome::Overwrote { previous: 12.5 });

        assert_eq!(month.day(5).unwrap().get(10), Some(14.0));
        assert_eq!(month.reading_count(), 1);
    }

    #[test]
    fn test_month_record_without_slot() {
        let mut month = Month::new(0);

        assert_eq!(month.record(&Reading::new(1, 24, 0.0)), RecordOutcome::NoSlot);
        assert_eq!(month.record(&Reading::new(32, 0, 0.0)), RecordOutcome::NoSlot);
        assert_eq!(month.record(&Reading::new(-1, 0, 0.0)), RecordOutcome::NoSlot);
        assert_eq!(month.record(&Reading::new(0, 0, 0.0)), RecordOutcome::NoSlot);
        assert_eq!(month.reading_count(), 0);
    }

    #[test]
    fn test_month_recorded_order() {
        let mut month = Month::new(0);
        month.record(&Reading::new(3, 1, 1.0));
        month.record(&Reading::new(1, 23, 2.0));
        month.record(&Reading::new(1, 2, 3.0));

        let triples: Vec<_> = month.recorded().collect();
        assert_eq!(triples, vec![(1, 2, 3.0), (1, 23, 2.0), (3, 1, 1.0)]);
    }

    #[test]
    fn test_year_store_month_overwrites_silently() {
        let mut year = Year::new(2001);
        assert_eq!(year.present_months().count(), 0);

        let mut first = Month::new(1);
        first.record(&Reading::new(1, 1, 1.0));
        assert!(!year.store_month(first));

        let mut second = Month::new(1);
        second.record(&Reading::new(2, 2, 2.0));
        assert!(year.store_month(second));

        let feb = &year.months()[1];
        assert_eq!(feb.day(1).unwrap().get(1), None);
        assert_eq!(feb.day(2).unwrap().get(2), Some(2.0));
        assert_eq!(year.reading_count(), 1);
    }

    #[test]
    fn test_full_year_fits_on_small_thread_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(2 << 20)
            .spawn(|| {
                let mut year = Year::new(2001);
                for index in 0..MONTHS_PER_YEAR {
                    let mut month = Month::new(index);
                    for day in 1..DAY_SLOTS {
                        for hour in 0..HOURS_PER_DAY {
                            month.record(&Reading::new(day as i64, hour as i64, 1.5));
                        }
                    }
                    year.store_month(month);
                }
                let copies = vec![year.clone(), year.clone(), year];
                copies.iter().map(Year::reading_count).sum::<usize>()
            })
            .unwrap();

        assert_eq!(handle.join().unwrap(), 3 * 12 * 31 * 24);
    }

    #[test]
    fn test_year_ignores_unset_month() {
        let mut year = Year::new(-40);
        assert!(!year.store_month(Month::default()));
        assert_eq!(year.present_months().count(), 0);
    }
}
