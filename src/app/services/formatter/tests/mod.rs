//! Tests for rendering parsed years

use super::{ReadingFormatter, format_years};
use crate::app::models::{Month, Reading, Year};
use crate::app::services::readings_parser::read_collection;
use crate::config::{DegreeEncoding, OutputConfig};

fn year_with(number: i64, month_index: usize, readings: &[(i64, i64, f64)]) -> Year {
    let mut month = Month::new(month_index);
    for &(day, hour, temperature) in readings {
        month.record(&Reading::new(day, hour, temperature));
    }
    let mut year = Year::new(number);
    year.store_month(month);
    year
}

#[test]
fn test_single_reading_line() {
    let result = read_collection("{year 2001{month jan(1 5 20.0)}}").unwrap();
    let output = format_years(&result.years).unwrap();
    assert_eq!(output, "On the 1st of January 2001 at 5:00 it was 20°\n");
}

#[test]
fn test_empty_collection_writes_nothing() {
    assert_eq!(format_years(&[]).unwrap(), "");

    let result = read_collection("{year 1990} {year 1991 {month jun}}").unwrap();
    assert_eq!(format_years(&result.years).unwrap(), "");
}

#[test]
fn test_lines_in_ascending_order() {
    let result = read_collection(
        "{year 2000 {month dec (15 15 -9.2) (15 14 -8.8) (14 0 -2)} {month feb (2 3 66.66) (1 1 68)}}
         {year 1992 {month jan (1 0 61.5)}}",
    )
    .unwrap();
    let output = format_years(&result.years).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(
        lines,
        vec![
            "On the 1st of February 2000 at 1:00 it was 68°",
            "On the 2nd of February 2000 at 3:00 it was 66.66°",
            "On the 14th of December 2000 at 0:00 it was -2°",
            "On the 15th of December 2000 at 14:00 it was -8.8°",
            "On the 15th of December 2000 at 15:00 it was -9.2°",
            "On the 1st of January 1992 at 0:00 it was 61.5°",
        ]
    );
}

#[test]
fn test_one_line_per_recorded_hour() {
    let years = vec![
        year_with(2010, 6, &[(1, 0, 1.0), (1, 23, 2.0), (31, 12, 3.0)]),
        year_with(2011, 0, &[(11, 4, 4.5)]),
    ];

    let mut buffer = Vec::new();
    let lines = ReadingFormatter::default()
        .write_years(&mut buffer, &years)
        .unwrap();

    assert_eq!(lines, 4);
    let output = String::from_utf8(buffer).unwrap();
    assert_eq!(output.lines().count(), 4);
    assert!(output.contains("On the 11st of January 2011 at 4:00 it was 4.5°"));
    assert!(output.contains("On the 31st of July 2010 at 12:00 it was 3°"));
}

#[test]
fn test_latin1_degree_byte() {
    let years = vec![year_with(2001, 0, &[(1, 5, 20.0)])];
    let formatter = ReadingFormatter::new(OutputConfig {
        degree_encoding: DegreeEncoding::Latin1,
    });

    let mut buffer = Vec::new();
    formatter.write_years(&mut buffer, &years).unwrap();

    let mut expected = b"On the 1st of January 2001 at 5:00 it was 20".to_vec();
    expected.push(0xB0);
    expected.push(b'\n');
    assert_eq!(buffer, expected);
}

#[test]
fn test_write_year_skips_unset_months() {
    let year = Year::new(1999);
    let mut buffer = Vec::new();
    let lines = ReadingFormatter::default()
        .write_year(&mut buffer, &year)
        .unwrap();
    assert_eq!(lines, 0);
    assert!(buffer.is_empty());
}

#[test]
fn test_temperatures_rendered_with_six_significant_digits() {
    let result = read_collection("{year 2001 {month jan (1 5 21.1234567) (2 5 0.00001)}}").unwrap();
    let output = format_years(&result.years).unwrap();
    assert_eq!(
        output,
        "On the 1st of January 2001 at 5:00 it was 21.1235°\n\
         On the 2nd of January 2001 at 5:00 it was 1e-05°\n"
    );
}
