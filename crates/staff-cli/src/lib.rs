//! CLI library components for the staffing planner.

pub mod logging;
pub mod pipeline;
