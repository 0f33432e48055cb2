//! Data row normalization.

use staff_model::{DemandRecord, HOURS_PER_DAY, MAX_PRIORITY, MIN_PRIORITY};

use crate::error::RowError;
use crate::table::Column;
use crate::time::parse_time_to_hour;

/// Builds a [`DemandRecord`] from the raw fields of one data row.
///
/// Fields are trimmed before parsing. An end time resolving to hour 0 is
/// read as midnight at the end of the day (hour 24). Fields after the sixth
/// are ignored.
pub fn normalize_row<S: AsRef<str>>(fields: &[S]) -> Result<DemandRecord, RowError> {
    if fields.len() < Column::ALL.len() {
        return Err(RowError::Incomplete {
            expected: Column::ALL.len(),
            found: fields.len(),
        });
    }
    let field = |column: Column| fields[column.position()].as_ref().trim();

    let customer_name = field(Column::CustomerName);
    let avg_handle_time = parse_positive(
        Column::AverageCallDuration,
        field(Column::AverageCallDuration),
    )?;
    let start_hour = parse_hour(Column::StartTime, field(Column::StartTime))?;
    let mut end_hour = parse_hour(Column::EndTime, field(Column::EndTime))?;
    if end_hour == 0 {
        end_hour = HOURS_PER_DAY;
    }
    let total_calls = parse_positive(Column::NumberOfCalls, field(Column::NumberOfCalls))?;
    let priority = parse_priority(field(Column::Priority))?;

    Ok(DemandRecord::new(
        customer_name,
        avg_handle_time,
        start_hour,
        end_hour,
        total_calls,
        priority,
    )?)
}

fn parse_integer(column: Column, value: &str) -> Result<i64, RowError> {
    value.parse::<i64>().map_err(|_| RowError::InvalidInteger {
        column,
        value: value.to_string(),
    })
}

fn parse_positive(column: Column, value: &str) -> Result<u32, RowError> {
    let number = parse_integer(column, value)?;
    if number <= 0 {
        return Err(RowError::NotPositive {
            column,
            value: number,
        });
    }
    u32::try_from(number).map_err(|_| RowError::TooLarge {
        column,
        value: number,
    })
}

fn parse_priority(value: &str) -> Result<u8, RowError> {
    let number = parse_integer(Column::Priority, value)?;
    if !(i64::from(MIN_PRIORITY)..=i64::from(MAX_PRIORITY)).contains(&number) {
        return Err(RowError::PriorityOutOfRange {
            column: Column::Priority,
            value: number,
        });
    }
    Ok(number as u8)
}

fn parse_hour(column: Column, value: &str) -> Result<u8, RowError> {
    parse_time_to_hour(value).map_err(|source| RowError::Time { column, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimeFormatError;
    use staff_model::ValidationError;

    #[test]
    fn test_normalizes_valid_row() {
        let record = normalize_row(&["John Doe", "300", "09:00", "17:00", "50", "1"]).unwrap();
        assert_eq!(record.customer_name(), "John Doe");
        assert_eq!(record.avg_handle_time_seconds(), 300);
        assert_eq!(record.start_hour(), 9);
        assert_eq!(record.end_hour(), 17);
        assert_eq!(record.total_calls(), 50);
        assert_eq!(record.priority(), 1);
    }

    #[test]
    fn test_trims_fields() {
        let record =
            normalize_row(&[" Bob White ", " 500 ", " 09:30 ", " 17:30 ", " 40 ", " 2 "]).unwrap();
        assert_eq!(record.customer_name(), "Bob White");
        assert_eq!(record.avg_handle_time_seconds(), 500);
        assert_eq!(record.start_hour(), 9);
        assert_eq!(record.end_hour(), 17);
    }

    #[test]
    fn test_midnight_end_wraps_to_24() {
        let record = normalize_row(&["Night", "600", "22:00", "00:00", "12", "3"]).unwrap();
        assert_eq!(record.end_hour(), 24);
        let bare = normalize_row(&["Night", "600", "23", "0", "12", "3"]).unwrap();
        assert_eq!(bare.hours(), 23..24);
    }

    #[test]
    fn test_incomplete_row() {
        assert_eq!(
            normalize_row(&["John Doe", "300", "09:00", "17:00"]),
            Err(RowError::Incomplete {
                expected: 6,
                found: 4
            })
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let record =
            normalize_row(&["Acme", "300", "9", "10", "6", "1", "note", "more"]).unwrap();
        assert_eq!(record.customer_name(), "Acme");
    }

    #[test]
    fn test_non_numeric_duration() {
        assert_eq!(
            normalize_row(&["John Doe", "invalid", "09:00", "17:00", "50", "1"]),
            Err(RowError::InvalidInteger {
                column: Column::AverageCallDuration,
                value: "invalid".to_string()
            })
        );
    }

    #[test]
    fn test_negative_calls() {
        assert_eq!(
            normalize_row(&["John Doe", "300", "09:00", "17:00", "-1", "1"]),
            Err(RowError::NotPositive {
                column: Column::NumberOfCalls,
                value: -1
            })
        );
    }

    #[test]
    fn test_oversized_count() {
        assert!(matches!(
            normalize_row(&["John Doe", "300", "09:00", "17:00", "9999999999", "1"]),
            Err(RowError::TooLarge { .. })
        ));
    }

    #[test]
    fn test_priority_out_of_range() {
        assert_eq!(
            normalize_row(&["John Doe", "300", "09:00", "17:00", "50", "10"]),
            Err(RowError::PriorityOutOfRange {
                column: Column::Priority,
                value: 10
            })
        );
    }

    #[test]
    fn test_bad_start_time() {
        assert_eq!(
            normalize_row(&["John Doe", "300", "16161", "17:00", "50", "1"]),
            Err(RowError::Time {
                column: Column::StartTime,
                source: TimeFormatError::HourOutOfRange("16161".to_string())
            })
        );
    }

    #[test]
    fn test_start_after_end() {
        assert_eq!(
            normalize_row(&["John Doe", "300", "18:00", "09:00", "50", "1"]),
            Err(RowError::Validation(ValidationError::EmptyWindow {
                start_hour: 18,
                end_hour: 9
            }))
        );
    }

    #[test]
    fn test_bare_start_of_24_rejected() {
        assert_eq!(
            normalize_row(&["Late", "300", "24", "24", "5", "1"]),
            Err(RowError::Validation(ValidationError::StartHourOutOfRange(24)))
        );
    }

    #[test]
    fn test_empty_customer() {
        assert_eq!(
            normalize_row(&["", "300", "09:00", "17:00", "50", "1"]),
            Err(RowError::Validation(ValidationError::EmptyCustomerName))
        );
    }
}
