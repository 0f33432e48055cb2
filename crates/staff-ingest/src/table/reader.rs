//! Demand table reading with per-row failure isolation.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord};
use staff_model::DemandRecord;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result, RowError};
use crate::row::normalize_row;

use super::header::{Column, validate_header};

/// A data row that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDiagnostic {
    /// Zero-based index among data rows (the header is not counted).
    pub row_index: usize,
    /// Rule the row violated.
    pub error: RowError,
}

impl fmt::Display for RowDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}: {}", self.row_index, self.error)
    }
}

/// Outcome of reading a demand table.
#[derive(Debug, Clone, Default)]
pub struct DemandTable {
    /// Valid records in source row order.
    pub records: Vec<DemandRecord>,
    /// Rows that failed normalization, in source row order.
    pub skipped: Vec<RowDiagnostic>,
}

impl DemandTable {
    /// Number of data rows seen, accepted or not.
    pub fn rows_read(&self) -> usize {
        self.records.len() + self.skipped.len()
    }

    pub fn has_skipped_rows(&self) -> bool {
        !self.skipped.is_empty()
    }
}

/// Reads a demand table from a CSV file.
///
/// Missing or unreadable files and header problems are errors; bad data rows
/// are collected in [`DemandTable::skipped`].
pub fn read_demand_csv(path: &Path) -> Result<DemandTable> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let table = parse_demand_table(file)?;
    info!(
        path = %path.display(),
        records = table.records.len(),
        skipped = table.skipped.len(),
        "demand table loaded"
    );
    Ok(table)
}

/// Reads a demand table from any byte source.
///
/// The first row must pass [`validate_header`]. Each later line is one data
/// row, blank lines included: a blank line is reported as an incomplete row
/// so that indices line up with the source. A failing row is logged,
/// recorded, and skipped.
pub fn parse_demand_table<R: Read>(mut source: R) -> Result<DemandTable> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes).map_err(csv::Error::from)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes.as_slice());
    let mut record = ByteRecord::new();

    let header: Option<Vec<String>> = if reader.read_byte_record(&mut record)? {
        Some(
            record
                .iter()
                .map(|cell| String::from_utf8_lossy(cell).into_owned())
                .collect(),
        )
    } else {
        None
    };
    validate_header(header.as_deref())?;

    let mut table = DemandTable::default();
    let mut row_index = 0;
    loop {
        let offset = reader.position().byte() as usize;
        let has_record = reader.read_byte_record(&mut record)?;

        for _ in 0..blank_lines_at(&bytes, offset) {
            let error = RowError::Incomplete {
                expected: Column::ALL.len(),
                found: 0,
            };
            skip_row(&mut table, row_index, error);
            row_index += 1;
        }
        if !has_record {
            break;
        }

        let outcome = match StringRecord::from_byte_record(record.clone()) {
            Ok(fields) => normalize_row(&fields.iter().collect::<Vec<_>>()),
            Err(err) => Err(RowError::Malformed(err.to_string())),
        };
        match outcome {
            Ok(demand) => {
                debug!(
                    row = row_index,
                    customer = demand.customer_name(),
                    start_hour = demand.start_hour(),
                    end_hour = demand.end_hour(),
                    "row accepted"
                );
                table.records.push(demand);
            }
            Err(error) => skip_row(&mut table, row_index, error),
        }
        row_index += 1;
    }
    Ok(table)
}

fn skip_row(table: &mut DemandTable, row_index: usize, error: RowError) {
    warn!(row = row_index, %error, "skipping row");
    table.skipped.push(RowDiagnostic { row_index, error });
}

/// Number of empty lines starting at `offset`, which the csv reader skips
/// without yielding a record.
fn blank_lines_at(source: &[u8], offset: usize) -> usize {
    let rest = source.get(offset..).unwrap_or_default();
    let mut run = rest
        .iter()
        .copied()
        .take_while(|&byte| byte == b'\r' || byte == b'\n')
        .peekable();
    // The reader may stop between the CR and LF of the previous terminator.
    let after_cr = offset
        .checked_sub(1)
        .and_then(|index| source.get(index))
        == Some(&b'\r');
    if after_cr && run.peek() == Some(&b'\n') {
        run.next();
    }
    let mut count = 0;
    while let Some(byte) = run.next() {
        if byte == b'\r' && run.peek() == Some(&b'\n') {
            run.next();
        }
        count += 1;
    }
    count
}
