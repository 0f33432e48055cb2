use staff_model::{DemandRecord, EngineOptions, HourlyBucket, StaffingPlan};
use tracing::debug;

/// Agents one record needs in each hour of its window.
///
/// `ceil(workload_seconds_per_hour / (3600 * max(utilization, 0.01)))`.
pub fn agents_needed(record: &DemandRecord, options: &EngineOptions) -> u64 {
    let agents = record.workload_seconds_per_hour() / options.agent_capacity_seconds();
    agents.ceil() as u64
}

/// Applies `records` in order to a fresh engine and returns its plan.
pub fn build_plan<'a, I>(records: I, options: EngineOptions) -> StaffingPlan
where
    I: IntoIterator<Item = &'a DemandRecord>,
{
    let mut engine = StaffingEngine::new(options);
    engine.apply_all(records);
    engine.into_plan()
}

/// Accumulates demand records into hourly buckets.
///
/// Records must be applied in source order: a later record for the same
/// customer replaces that customer's count in every hour it covers.
#[derive(Debug, Clone)]
pub struct StaffingEngine {
    options: EngineOptions,
    plan: StaffingPlan,
}

impl Default for StaffingEngine {
    fn default() -> Self {
        Self::new(EngineOptions::default())
    }
}

impl StaffingEngine {
    /// Creates an engine with all 24 buckets at zero.
    pub fn new(options: EngineOptions) -> Self {
        Self {
            options,
            plan: StaffingPlan::empty(),
        }
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Utilization actually used, after the floor.
    pub fn effective_utilization(&self) -> f64 {
        self.options.effective_utilization()
    }

    /// Agents `record` needs per hour under this engine's options.
    pub fn agents_needed(&self, record: &DemandRecord) -> u64 {
        agents_needed(record, &self.options)
    }

    /// Writes `record`'s agent count into each hour of `start_hour..end_hour`.
    ///
    /// Returns the per-hour agent count that was written.
    pub fn apply(&mut self, record: &DemandRecord) -> u64 {
        let agents = self.agents_needed(record);
        for hour in record.hours() {
            self.plan.assign(hour, record.customer_name(), agents);
        }
        debug!(
            customer = record.customer_name(),
            start_hour = record.start_hour(),
            end_hour = record.end_hour(),
            calls_per_hour = record.calls_per_hour(),
            agents,
            "demand applied"
        );
        agents
    }

    /// Applies each record in iteration order.
    pub fn apply_all<'a, I>(&mut self, records: I)
    where
        I: IntoIterator<Item = &'a DemandRecord>,
    {
        for record in records {
            self.apply(record);
        }
    }

    pub fn buckets(&self) -> &[HourlyBucket] {
        self.plan.buckets()
    }

    pub fn plan(&self) -> &StaffingPlan {
        &self.plan
    }

    /// Finishes the run and hands the buckets to the caller.
    pub fn into_plan(self) -> StaffingPlan {
        self.plan
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(customer: &str, duration: u32, start: u8, end: u8, calls: u32) -> DemandRecord {
        DemandRecord::new(customer, duration, start, end, calls, 1).unwrap()
    }

    #[test]
    fn new_engine_has_zeroed_buckets() {
        let engine = StaffingEngine::default();
        assert_eq!(engine.buckets().len(), 24);
        assert!(engine.buckets().iter().all(|b| b.total_agents() == 0));
        assert_eq!(engine.options().utilization, 1.0);
    }

    #[test]
    fn agents_needed_rounds_up() {
        let options = EngineOptions::default();
        // 3 calls * 1000 s = 3000 s of work, 0.83 of an agent
        assert_eq!(agents_needed(&record("E", 1000, 9, 10, 3), &options), 1);
        // 6 calls/hour * 300 s = 0.5 of an agent
        assert_eq!(agents_needed(&record("B", 300, 8, 12, 24), &options), 1);
        // 18 calls * 1200 s = exactly 6 agents
        assert_eq!(agents_needed(&record("D", 1200, 9, 10, 18), &options), 6);
    }

    #[test]
    fn apply_returns_written_count() {
        let mut engine = StaffingEngine::new(EngineOptions::new().with_utilization(0.8));
        assert_eq!(engine.apply(&record("C", 600, 9, 10, 6)), 2);
        assert_eq!(engine.plan().bucket(9).map(HourlyBucket::total_agents), Some(2));
    }

    #[test]
    fn repeated_customer_overwrites() {
        let mut engine = StaffingEngine::default();
        engine.apply(&record("A", 1200, 9, 11, 36));
        engine.apply(&record("A", 600, 9, 10, 6));
        let plan = engine.into_plan();
        assert_eq!(plan.bucket(9).unwrap().total_agents(), 1);
        // hour 10 keeps the first record's value
        assert_eq!(plan.bucket(10).unwrap().total_agents(), 6);
    }
}
