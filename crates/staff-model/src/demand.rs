//! Demand records.
//!
//! A [`DemandRecord`] is one customer's calling requirement for a window of
//! the day. The window is half-open: `start_hour` is covered, `end_hour` is
//! not. Records can only be built through [`DemandRecord::new`], which
//! enforces every field constraint, so holding a record means holding a
//! valid one.

use std::ops::Range;

use serde::Serialize;

use crate::error::{Result, ValidationError};

/// Number of hour slots in a staffing plan.
pub const HOURS_PER_DAY: u8 = 24;

/// Lowest accepted priority.
pub const MIN_PRIORITY: u8 = 1;

/// Highest accepted priority.
pub const MAX_PRIORITY: u8 = 5;

/// One customer's normalized call-volume requirement for a time window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemandRecord {
    customer_name: String,
    avg_handle_time_seconds: u32,
    start_hour: u8,
    end_hour: u8,
    total_calls: u32,
    priority: u8,
}

impl DemandRecord {
    /// Builds a record, checking every field constraint.
    ///
    /// `end_hour` is exclusive, so `start_hour = 0, end_hour = 24` covers the
    /// full day.
    pub fn new(
        customer_name: impl Into<String>,
        avg_handle_time_seconds: u32,
        start_hour: u8,
        end_hour: u8,
        total_calls: u32,
        priority: u8,
    ) -> Result<Self> {
        let customer_name = customer_name.into();
        if customer_name.trim().is_empty() {
            return Err(ValidationError::EmptyCustomerName);
        }
        if avg_handle_time_seconds == 0 {
            return Err(ValidationError::NonPositiveHandleTime(
                avg_handle_time_seconds,
            ));
        }
        if start_hour >= HOURS_PER_DAY {
            return Err(ValidationError::StartHourOutOfRange(start_hour));
        }
        if end_hour == 0 || end_hour > HOURS_PER_DAY {
            return Err(ValidationError::EndHourOutOfRange(end_hour));
        }
        if end_hour <= start_hour {
            return Err(ValidationError::EmptyWindow {
                start_hour,
                end_hour,
            });
        }
        if total_calls == 0 {
            return Err(ValidationError::NonPositiveCalls(total_calls));
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(ValidationError::PriorityOutOfRange(priority));
        }
        Ok(Self {
            customer_name,
            avg_handle_time_seconds,
            start_hour,
            end_hour,
            total_calls,
            priority,
        })
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn avg_handle_time_seconds(&self) -> u32 {
        self.avg_handle_time_seconds
    }

    pub fn start_hour(&self) -> u8 {
        self.start_hour
    }

    pub fn end_hour(&self) -> u8 {
        self.end_hour
    }

    pub fn total_calls(&self) -> u32 {
        self.total_calls
    }

    /// Carried for reporting; the staffing computation ignores it.
    pub fn priority(&self) -> u8 {
        self.priority
    }

    /// Number of hours in the active window. Always at least 1.
    pub fn active_duration_hours(&self) -> u8 {
        self.end_hour - self.start_hour
    }

    /// Calls arriving per active hour, unrounded.
    pub fn calls_per_hour(&self) -> f64 {
        f64::from(self.total_calls) / f64::from(self.active_duration_hours())
    }

    /// Talk time generated per active hour, in agent-seconds.
    ///
    /// Multiplies before dividing so whole-number workloads stay exact.
    pub fn workload_seconds_per_hour(&self) -> f64 {
        let total_seconds =
            u64::from(self.total_calls) * u64::from(self.avg_handle_time_seconds);
        total_seconds as f64 / f64::from(self.active_duration_hours())
    }

    /// Hours covered by this record, `start_hour..end_hour`.
    pub fn hours(&self) -> Range<u8> {
        self.start_hour..self.end_hour
    }
}
