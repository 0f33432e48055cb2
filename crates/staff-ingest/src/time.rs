//! Time-of-day parsing.
//!
//! Source tables carry start and end times in whatever notation the person
//! filling them in preferred. Every accepted notation reduces to an
//! hour-of-day; minutes and seconds are dropped.
//!
//! Accepted inputs:
//! - Bare hours: `"0"` through `"24"` (taken literally, never parsed as a date)
//! - 24-hour clock: `"14:30"`, `"09:15"`, `"15:45:30"`
//! - 12-hour clock: `"2:30 PM"`, `"9:15am"`, `"1Pm"`, `"11 pm"`
//! - Any clock time after a date: `"2024-11-30 15:45"`, `"2024-11-30T15:45:00"`,
//!   `"11/30/2024 3:45 PM"`

use chrono::format::{self, Parsed, StrftimeItems};
use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::error::TimeFormatError;

/// Highest hour a bare integer may name; 24 marks the end of the day.
const MAX_BARE_HOUR: u32 = 24;

/// Clock notations carrying at least minutes.
///
/// A space in a pattern matches any amount of whitespace, including none.
const CLOCK_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%H:%M:%S%.f",
    "%I:%M %p",
    "%I:%M:%S %p",
];

/// Clock notations naming only the hour.
const HOUR_ONLY_FORMATS: &[&str] = &["%I %p"];

/// Date notations allowed in front of a clock time.
const DATE_PREFIX_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses a time expression into an hour in `0..=24`.
///
/// A string of ASCII digits is an hour on its own and must be at most 24.
/// Anything else must be a clock time (optionally preceded by a date); only
/// its hour is returned, so the result is then at most 23.
pub fn parse_time_to_hour(text: &str) -> Result<u8, TimeFormatError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(TimeFormatError::Empty);
    }

    if trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return match trimmed.parse::<u32>() {
            Ok(hour) if hour <= MAX_BARE_HOUR => Ok(hour as u8),
            _ => Err(TimeFormatError::HourOutOfRange(trimmed.to_string())),
        };
    }

    parse_clock(trimmed)
        .or_else(|| parse_dated_clock(trimmed))
        .map(|time| time.hour() as u8)
        .ok_or_else(|| TimeFormatError::Unrecognized(trimmed.to_string()))
}

/// Tries every clock notation against the whole input.
fn parse_clock(value: &str) -> Option<NaiveTime> {
    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            HOUR_ONLY_FORMATS
                .iter()
                .find_map(|fmt| parse_hour_only(value, fmt))
        })
}

/// Parses a notation without minutes, treating them as zero.
fn parse_hour_only(value: &str, fmt: &str) -> Option<NaiveTime> {
    let mut parsed = Parsed::new();
    format::parse(&mut parsed, value, StrftimeItems::new(fmt)).ok()?;
    parsed.set_minute(0).ok()?;
    parsed.to_naive_time().ok()
}

/// Strips a leading date and parses the clock time after it.
fn parse_dated_clock(value: &str) -> Option<NaiveTime> {
    DATE_PREFIX_FORMATS.iter().find_map(|fmt| {
        let (_, rest) = NaiveDate::parse_and_remainder(value, fmt).ok()?;
        let clock = rest.strip_prefix('T').unwrap_or(rest).trim_start();
        if clock.is_empty() {
            return None;
        }
        parse_clock(clock)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_hours_taken_literally() {
        assert_eq!(parse_time_to_hour("0"), Ok(0));
        assert_eq!(parse_time_to_hour("9"), Ok(9));
        assert_eq!(parse_time_to_hour("09"), Ok(9));
        assert_eq!(parse_time_to_hour("24"), Ok(24));
    }

    #[test]
    fn test_bare_hours_out_of_range() {
        assert_eq!(
            parse_time_to_hour("25"),
            Err(TimeFormatError::HourOutOfRange("25".to_string()))
        );
        assert!(matches!(
            parse_time_to_hour("16161"),
            Err(TimeFormatError::HourOutOfRange(_))
        ));
        assert!(matches!(
            parse_time_to_hour("99999999999999999999"),
            Err(TimeFormatError::HourOutOfRange(_))
        ));
    }

    #[test]
    fn test_24_hour_clock() {
        assert_eq!(parse_time_to_hour("14:30"), Ok(14));
        assert_eq!(parse_time_to_hour("09:15"), Ok(9));
        assert_eq!(parse_time_to_hour("00:00"), Ok(0));
        assert_eq!(parse_time_to_hour("23:59"), Ok(23));
        assert_eq!(parse_time_to_hour("15:45:30"), Ok(15));
    }

    #[test]
    fn test_12_hour_clock() {
        assert_eq!(parse_time_to_hour("2:30 PM"), Ok(14));
        assert_eq!(parse_time_to_hour("9:15 AM"), Ok(9));
        assert_eq!(parse_time_to_hour("12:00 PM"), Ok(12));
        assert_eq!(parse_time_to_hour("12:00 AM"), Ok(0));
        assert_eq!(parse_time_to_hour("1:00 am"), Ok(1));
        assert_eq!(parse_time_to_hour("1Pm"), Ok(13));
        assert_eq!(parse_time_to_hour("11:00 Am"), Ok(11));
        assert_eq!(parse_time_to_hour("9:15am"), Ok(9));
        assert_eq!(parse_time_to_hour("11 pm"), Ok(23));
    }

    #[test]
    fn test_date_prefixed_clock() {
        assert_eq!(parse_time_to_hour("2024-11-30 15:45"), Ok(15));
        assert_eq!(parse_time_to_hour("2024-11-30T15:45:00"), Ok(15));
        assert_eq!(parse_time_to_hour("2024/11/30 08:05"), Ok(8));
        assert_eq!(parse_time_to_hour("11/30/2024 3:45 PM"), Ok(15));
    }

    #[test]
    fn test_surrounding_whitespace_ignored() {
        assert_eq!(parse_time_to_hour("  09:30 "), Ok(9));
        assert_eq!(parse_time_to_hour(" 17 "), Ok(17));
    }

    #[test]
    fn test_invalid_formats() {
        assert_eq!(parse_time_to_hour(""), Err(TimeFormatError::Empty));
        assert_eq!(parse_time_to_hour("   "), Err(TimeFormatError::Empty));
        assert_eq!(
            parse_time_to_hour("invalid time"),
            Err(TimeFormatError::Unrecognized("invalid time".to_string()))
        );
        assert!(parse_time_to_hour("25:00").is_err());
        assert!(parse_time_to_hour("13 PM").is_err());
        assert!(parse_time_to_hour("2024-11-30").is_err());
        assert!(parse_time_to_hour("-3").is_err());
    }
}
