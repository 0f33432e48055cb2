//! Configuration for the staffing engine.

use serde::{Deserialize, Serialize};

/// Length of one agent-hour in seconds.
pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Lowest utilization the engine will compute with.
///
/// Configured values below this (including zero, negatives and NaN)
/// saturate to it.
pub const MIN_UTILIZATION: f64 = 0.01;

/// Options controlling the staffing computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Fraction of an agent-hour spent handling calls. Intended range is
    /// (0.0, 1.0]; not enforced here.
    pub utilization: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { utilization: 1.0 }
    }
}

impl EngineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_utilization(mut self, utilization: f64) -> Self {
        self.utilization = utilization;
        self
    }

    /// Utilization after applying the [`MIN_UTILIZATION`] floor.
    pub fn effective_utilization(&self) -> f64 {
        self.utilization.max(MIN_UTILIZATION)
    }

    /// Seconds of talk time one agent covers per hour.
    pub fn agent_capacity_seconds(&self) -> f64 {
        SECONDS_PER_HOUR * self.effective_utilization()
    }

    /// True when the configured utilization lies in (0.0, 1.0].
    pub fn is_in_intended_range(&self) -> bool {
        self.utilization > 0.0 && self.utilization <= 1.0
    }
}
