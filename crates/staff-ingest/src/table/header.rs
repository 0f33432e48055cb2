//! Header row validation.

use std::fmt;

use crate::error::HeaderError;

/// Required leading columns of a demand table, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    CustomerName,
    AverageCallDuration,
    StartTime,
    EndTime,
    NumberOfCalls,
    Priority,
}

impl Column {
    /// All required columns in header order.
    pub const ALL: [Column; 6] = [
        Column::CustomerName,
        Column::AverageCallDuration,
        Column::StartTime,
        Column::EndTime,
        Column::NumberOfCalls,
        Column::Priority,
    ];

    /// Exact header name expected in the source table.
    pub const fn header_name(self) -> &'static str {
        match self {
            Column::CustomerName => "CustomerName",
            Column::AverageCallDuration => "AverageCallDurationSeconds",
            Column::StartTime => "StartTimePT",
            Column::EndTime => "EndTimePT",
            Column::NumberOfCalls => "NumberOfCalls",
            Column::Priority => "Priority",
        }
    }

    /// Zero-based position of the column in every row.
    pub const fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}

/// Normalizes a header cell: strips a UTF-8 BOM and surrounding whitespace.
fn normalize_header(value: &str) -> &str {
    value.trim_start_matches('\u{feff}').trim()
}

/// Checks that `header` starts with the required columns.
///
/// `None` means the table had no rows at all. Cells are compared after
/// trimming surrounding whitespace; names are case-sensitive. Columns past
/// the sixth are ignored.
pub fn validate_header<S: AsRef<str>>(header: Option<&[S]>) -> Result<(), HeaderError> {
    let header = header.ok_or(HeaderError::Missing)?;
    for column in Column::ALL {
        let found = header
            .get(column.position())
            .map(|cell| normalize_header(cell.as_ref()));
        if found != Some(column.header_name()) {
            return Err(HeaderError::ColumnMismatch {
                position: column.position(),
                expected: column.header_name(),
                found: found.map(str::to_string),
            });
        }
    }
    Ok(())
}
