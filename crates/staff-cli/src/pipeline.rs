//! Run stages: ingest, schedule, output.
//!
//! Each stage is a plain function so the binary can wrap it in a span and
//! tests can drive it without a process.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use staff_engine::StaffingEngine;
use staff_ingest::{DemandTable, read_demand_csv};
use staff_model::{DemandRecord, EngineOptions, StaffingPlan};
use staff_output::{save_csv, write_json, write_text};

/// Rendering chosen for a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Reads and validates the demand table.
///
/// Skipped rows are already logged by the reader; only batch-level failures
/// surface as errors.
pub fn ingest(input: &Path) -> Result<DemandTable> {
    read_demand_csv(input).context("load demand table")
}

/// Builds the staffing plan for the accepted records.
pub fn schedule(records: &[DemandRecord], options: EngineOptions) -> StaffingPlan {
    if !options.is_in_intended_range() {
        warn!(
            utilization = options.utilization,
            effective = options.effective_utilization(),
            "utilization outside (0, 1]"
        );
    }
    let mut engine = StaffingEngine::new(options);
    engine.apply_all(records);
    let plan = engine.into_plan();
    info!(
        records = records.len(),
        agent_hours = plan.total_agent_hours(),
        "staffing plan built"
    );
    plan
}

/// Writes the plan in `format`.
///
/// Text and JSON go to `stdout`; CSV goes to `output` or a timestamped
/// default path, which is returned.
pub fn emit<W: Write>(
    plan: &StaffingPlan,
    format: PlanFormat,
    output: Option<&Path>,
    stdout: W,
) -> Result<Option<PathBuf>> {
    if output.is_some() && format != PlanFormat::Csv {
        warn!(?format, "--output only applies to CSV and is ignored");
    }
    match format {
        PlanFormat::Text => {
            write_text(plan, stdout).context("write text plan")?;
            Ok(None)
        }
        PlanFormat::Json => {
            write_json(plan, stdout).context("write JSON plan")?;
            Ok(None)
        }
        PlanFormat::Csv => {
            let path = save_csv(plan, output).context("write CSV plan")?;
            Ok(Some(path))
        }
    }
}
