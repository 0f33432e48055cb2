//! Staffing plan output.
//!
//! Three renderings of a [`StaffingPlan`](staff_model::StaffingPlan):
//!
//! - **Text**: one `HH:00 total=<n>; name=count, ...` line per hour
//! - **JSON**: an array of `{hour, total_agents, breakdown}` objects
//! - **CSV**: one row per hour with a column per customer (sorted), zero-filled

mod csv_table;
mod error;
mod json;
mod path;
mod text;

pub use csv_table::{CSV_FIXED_COLUMNS, customer_columns, save_csv, write_csv};
pub use error::{OutputError, Result};
pub use json::{render_json, write_json};
pub use path::{DEFAULT_OUTPUT_DIR, default_csv_path};
pub use text::{format_hour, render_text, render_text_line, write_text};
