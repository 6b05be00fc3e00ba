//! Sentence rendering for a single recorded reading

use crate::Result;
use crate::app::services::month_lookup::int_to_month;
use crate::constants::TEMPERATURE_SIGNIFICANT_DIGITS;

/// Ordinal suffix for a day number.
///
/// Only the last digit is considered, so 11, 12 and 13 become "st", "nd"
/// and "rd".
pub fn ordinal_suffix(day: usize) -> &'static str {
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render one reading up to, but not including, the degree sign
pub fn sentence(
    year: i64,
    month_index: usize,
    day: usize,
    hour: usize,
    temperature: f64,
) -> Result<String> {
    let month_name = int_to_month(month_index as i64)?;
    Ok(format!(
        "On the {}{} of {} {} at {}:00 it was {}",
        day,
        ordinal_suffix(day),
        month_name,
        year,
        hour,
        format_temperature(temperature)
    ))
}

/// Format a temperature like printf's `%g`: six significant digits, no
/// trailing zeros, and scientific notation when the decimal exponent is
/// below -4 or at least six.
pub fn format_temperature(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "nan".to_string()
        } else if value.is_sign_negative() {
            "-inf".to_string()
        } else {
            "inf".to_string()
        };
    }

    let precision = TEMPERATURE_SIGNIFICANT_DIGITS;
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(digits: &str) -> &str {
    if digits.contains('.') {
        digits.trim_end_matches('0').trim_end_matches('.')
    } else {
        digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(10), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(30), "th");
    }

    #[test]
    fn test_ordinal_suffix_teens_follow_last_digit() {
        assert_eq!(ordinal_suffix(11), "st");
        assert_eq!(ordinal_suffix(12), "nd");
        assert_eq!(ordinal_suffix(13), "rd");
    }

    #[test]
    fn test_sentence() {
        assert_eq!(
            sentence(2001, 0, 1, 5, 20.0).unwrap(),
            "On the 1st of January 2001 at 5:00 it was 20"
        );
        assert_eq!(
            sentence(-12, 11, 23, 0, -9.25).unwrap(),
            "On the 23rd of December -12 at 0:00 it was -9.25"
        );
    }

    #[test]
    fn test_format_temperature_plain() {
        assert_eq!(format_temperature(20.0), "20");
        assert_eq!(format_temperature(66.66), "66.66");
        assert_eq!(format_temperature(-9.25), "-9.25");
        assert_eq!(format_temperature(0.0), "0");
        assert_eq!(format_temperature(0.0001), "0.0001");
        assert_eq!(format_temperature(123456.0), "123456");
    }

    #[test]
    fn test_format_temperature_six_significant_digits() {
        assert_eq!(format_temperature(21.1234567), "21.1235");
        assert_eq!(format_temperature(-199.99999), "-200");
        assert_eq!(format_temperature(1.0 / 3.0), "0.333333");
    }

    #[test]
    fn test_format_temperature_exponent_form() {
        assert_eq!(format_temperature(0.00001), "1e-05");
        assert_eq!(format_temperature(-0.000012345), "-1.2345e-05");
        assert_eq!(format_temperature(1234567.0), "1.23457e+06");
        assert_eq!(format_temperature(999999.5), "1e+06");
    }

    #[test]
    fn test_sentence_rejects_bad_month() {
        assert!(matches!(
            sentence(2001, 12, 1, 1, 1.0),
            Err(Error::MonthOutOfRange { index: 12 })
        ));
    }
}
