//! JSON rendering.

use std::io::Write;

use staff_model::StaffingPlan;

use crate::error::Result;

/// Pretty-printed JSON array with one object per hour.
pub fn render_json(plan: &StaffingPlan) -> Result<String> {
    Ok(serde_json::to_string_pretty(plan)?)
}

pub fn write_json<W: Write>(plan: &StaffingPlan, mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, plan)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}
