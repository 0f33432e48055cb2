pub mod bucket;
pub mod demand;
pub mod error;
pub mod options;
pub mod plan;

pub use bucket::{Breakdown, HourlyBucket};
pub use demand::{DemandRecord, HOURS_PER_DAY, MAX_PRIORITY, MIN_PRIORITY};
pub use error::{Result, ValidationError};
pub use options::{EngineOptions, MIN_UTILIZATION, SECONDS_PER_HOUR};
pub use plan::StaffingPlan;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_serializes_as_hour_array() {
        let mut plan = StaffingPlan::empty();
        plan.assign(9, "Acme", 2);
        let value = serde_json::to_value(&plan).expect("serialize plan");
        let hours = value.as_array().expect("plan is an array");
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[9]["hour"], 9);
        assert_eq!(hours[9]["total_agents"], 2);
        assert_eq!(hours[9]["breakdown"]["Acme"], 2);
        assert_eq!(hours[10]["breakdown"], serde_json::json!({}));
    }

    #[test]
    fn record_serializes_with_field_names() {
        let record = DemandRecord::new("Acme", 300, 9, 17, 40, 2).expect("valid record");
        let value = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(value["customer_name"], "Acme");
        assert_eq!(value["avg_handle_time_seconds"], 300);
        assert_eq!(value["end_hour"], 17);
    }
}
