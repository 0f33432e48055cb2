//! Plain-text rendering.

use std::io::Write;

use staff_model::{HourlyBucket, StaffingPlan};

use crate::error::Result;

/// Formats an hour slot as `HH:00`.
pub fn format_hour(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// One line for one bucket, customers in first-applied order.
pub fn render_text_line(bucket: &HourlyBucket) -> String {
    let hour = format_hour(bucket.hour());
    if bucket.is_empty() {
        return format!("{hour} total=0; none");
    }
    let parts: Vec<String> = bucket
        .breakdown()
        .iter()
        .map(|(customer, agents)| format!("{customer}={agents}"))
        .collect();
    format!("{hour} total={}; {}", bucket.total_agents(), parts.join(", "))
}

/// Renders the whole plan, one newline-terminated line per hour.
pub fn render_text(plan: &StaffingPlan) -> String {
    let mut out = String::new();
    for bucket in plan {
        out.push_str(&render_text_line(bucket));
        out.push('\n');
    }
    out
}

pub fn write_text<W: Write>(plan: &StaffingPlan, mut writer: W) -> Result<()> {
    writer.write_all(render_text(plan).as_bytes())?;
    writer.flush()?;
    Ok(())
}
