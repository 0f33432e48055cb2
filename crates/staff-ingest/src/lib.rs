//! Demand table ingestion.
//!
//! Turns a comma-delimited demand table into validated
//! [`DemandRecord`](staff_model::DemandRecord)s.
//!
//! # Features
//!
//! - **Header check**: the first six columns must match [`Column::ALL`] by name and position
//! - **Time parsing**: bare hours (`"9"`, `"24"`) and clock times (`"9:15 AM"`, `"14:30"`,
//!   `"2024-11-30 15:45"`) reduce to an hour-of-day
//! - **Row isolation**: a bad data row is reported as a [`RowDiagnostic`] and skipped;
//!   the rest of the table is still read
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use staff_ingest::read_demand_csv;
//!
//! let table = read_demand_csv(Path::new("demand.csv"))?;
//! for skipped in &table.skipped {
//!     eprintln!("{skipped}");
//! }
//! ```

mod error;
mod row;
mod table;
mod time;

// === Error Types ===
pub use error::{HeaderError, IngestError, Result, RowError, TimeFormatError};

// === Table Reading ===
pub use table::{
    Column, DemandTable, RowDiagnostic, parse_demand_table, read_demand_csv, validate_header,
};

// === Field Normalization ===
pub use row::normalize_row;
pub use time::parse_time_to_hour;
