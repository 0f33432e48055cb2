//! CSV rendering.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Local;
use staff_model::StaffingPlan;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::path::{DEFAULT_OUTPUT_DIR, default_csv_path};
use crate::text::format_hour;

/// Leading columns present in every CSV rendering.
pub const CSV_FIXED_COLUMNS: [&str; 2] = ["hour", "total_agents"];

/// Customer columns for the CSV rendering, sorted.
pub fn customer_columns(plan: &StaffingPlan) -> Vec<&str> {
    plan.customers().into_iter().collect()
}

/// Writes one row per hour; customers absent from an hour get 0.
pub fn write_csv<W: Write>(plan: &StaffingPlan, writer: W) -> Result<()> {
    let customers = customer_columns(plan);
    let mut out = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = CSV_FIXED_COLUMNS.to_vec();
    header.extend(customers.iter().copied());
    out.write_record(&header)?;

    for bucket in plan {
        let mut row = Vec::with_capacity(header.len());
        row.push(format_hour(bucket.hour()));
        row.push(bucket.total_agents().to_string());
        for customer in &customers {
            row.push(bucket.agents_for(customer).unwrap_or(0).to_string());
        }
        out.write_record(&row)?;
    }
    out.flush()?;
    Ok(())
}

/// Saves the CSV rendering and returns the path written.
///
/// With `output` set, writes exactly there (creating parent directories).
/// Otherwise writes a timestamped file under [`DEFAULT_OUTPUT_DIR`].
pub fn save_csv(plan: &StaffingPlan, output: Option<&Path>) -> Result<PathBuf> {
    let path = match output {
        Some(path) => path.to_path_buf(),
        None => default_csv_path(Path::new(DEFAULT_OUTPUT_DIR), &Local::now().naive_local()),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(&path).map_err(|source| OutputError::CreateFile {
        path: path.clone(),
        source,
    })?;
    write_csv(plan, file)?;
    info!(path = %path.display(), "CSV output written");
    Ok(path)
}
