//! Per-hour staffing aggregation.

use indexmap::IndexMap;
use serde::Serialize;

/// Agents contributed per customer, in the order customers first touched
/// the hour.
pub type Breakdown = IndexMap<String, u64>;

/// Staffing requirement for one hour-of-day slot.
///
/// `total_agents` always equals the sum of `breakdown`, saturating at
/// `u64::MAX`; [`HourlyBucket::assign`] is the only mutation and keeps the two
/// in step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HourlyBucket {
    hour: u8,
    total_agents: u64,
    breakdown: Breakdown,
}

impl HourlyBucket {
    /// Creates an empty bucket for `hour`.
    pub fn new(hour: u8) -> Self {
        Self {
            hour,
            total_agents: 0,
            breakdown: Breakdown::new(),
        }
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn total_agents(&self) -> u64 {
        self.total_agents
    }

    pub fn breakdown(&self) -> &Breakdown {
        &self.breakdown
    }

    pub fn agents_for(&self, customer: &str) -> Option<u64> {
        self.breakdown.get(customer).copied()
    }

    /// True when no customer has been applied to this hour.
    pub fn is_empty(&self) -> bool {
        self.breakdown.is_empty()
    }

    /// Sets `customer`'s contribution, replacing any earlier value.
    ///
    /// A replaced customer keeps its original position in the breakdown.
    /// Returns the previous contribution.
    pub fn assign(&mut self, customer: &str, agents: u64) -> Option<u64> {
        let previous = match self.breakdown.get_mut(customer) {
            Some(slot) => Some(std::mem::replace(slot, agents)),
            None => {
                self.breakdown.insert(customer.to_string(), agents);
                None
            }
        };
        self.total_agents = saturating_total(self.breakdown.values().copied());
        previous
    }
}

/// Sum that stops at `u64::MAX` instead of wrapping.
pub(crate) fn saturating_total(counts: impl IntoIterator<Item = u64>) -> u64 {
    counts.into_iter().fold(0, u64::saturating_add)
}
