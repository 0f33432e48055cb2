//! The 24-hour staffing plan produced by one engine run.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::bucket::{HourlyBucket, saturating_total};
use crate::demand::HOURS_PER_DAY;

/// Hourly buckets for hours 0 through 23, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StaffingPlan {
    buckets: Vec<HourlyBucket>,
}

impl Default for StaffingPlan {
    fn default() -> Self {
        Self::empty()
    }
}

impl StaffingPlan {
    /// Creates a plan with all 24 buckets at zero.
    pub fn empty() -> Self {
        Self {
            buckets: (0..HOURS_PER_DAY).map(HourlyBucket::new).collect(),
        }
    }

    pub fn buckets(&self) -> &[HourlyBucket] {
        &self.buckets
    }

    pub fn bucket(&self, hour: u8) -> Option<&HourlyBucket> {
        self.buckets.get(usize::from(hour))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HourlyBucket> {
        self.buckets.iter()
    }

    /// Sets `customer`'s contribution for `hour`. Hours past 23 are ignored.
    pub fn assign(&mut self, hour: u8, customer: &str, agents: u64) -> Option<u64> {
        self.buckets
            .get_mut(usize::from(hour))
            .and_then(|bucket| bucket.assign(customer, agents))
    }

    /// Every customer appearing anywhere in the plan, sorted.
    pub fn customers(&self) -> BTreeSet<&str> {
        self.buckets
            .iter()
            .flat_map(|bucket| bucket.breakdown().keys().map(String::as_str))
            .collect()
    }

    /// The busiest hour (earliest on ties), or `None` when nothing is staffed.
    pub fn peak(&self) -> Option<&HourlyBucket> {
        self.buckets
            .iter()
            .filter(|bucket| bucket.total_agents() > 0)
            .fold(None, |best: Option<&HourlyBucket>, bucket| match best {
                Some(current) if current.total_agents() >= bucket.total_agents() => Some(current),
                _ => Some(bucket),
            })
    }

    /// Sum of agents over all hours, saturating at `u64::MAX`.
    pub fn total_agent_hours(&self) -> u64 {
        saturating_total(self.buckets.iter().map(HourlyBucket::total_agents))
    }
}

impl<'a> IntoIterator for &'a StaffingPlan {
    type Item = &'a HourlyBucket;
    type IntoIter = std::slice::Iter<'a, HourlyBucket>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}
