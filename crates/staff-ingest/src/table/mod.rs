//! Demand table reading.

mod header;
mod reader;

pub use header::{Column, validate_header};
pub use reader::{DemandTable, RowDiagnostic, parse_demand_table, read_demand_csv};
