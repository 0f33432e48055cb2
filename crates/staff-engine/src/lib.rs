//! Staffing engine.
//!
//! Turns [`DemandRecord`](staff_model::DemandRecord)s into a 24-hour
//! [`StaffingPlan`](staff_model::StaffingPlan). Each record's hourly workload
//! is divided by one agent's utilization-adjusted capacity and rounded up;
//! the result is written into every hour of the record's window.

mod engine;

pub use engine::{StaffingEngine, agents_needed, build_plan};
