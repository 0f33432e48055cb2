use std::path::PathBuf;
use std::time::Duration;

use staff_ingest::RowDiagnostic;

/// What a completed run produced, for the summary table.
#[derive(Debug)]
pub struct RunReport {
    pub input: PathBuf,
    pub rows_read: usize,
    pub accepted: usize,
    pub skipped: Vec<RowDiagnostic>,
    pub utilization: f64,
    pub effective_utilization: f64,
    /// Earliest busiest hour and its agent total; `None` for an all-zero plan.
    pub peak: Option<(u8, u64)>,
    pub agent_hours: u64,
    pub csv_path: Option<PathBuf>,
    pub elapsed: Duration,
}
