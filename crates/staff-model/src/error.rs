use thiserror::Error;

/// Constraint violations raised when building a [`crate::DemandRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("customer name must not be empty")]
    EmptyCustomerName,
    #[error("average handle time must be positive, got {0}")]
    NonPositiveHandleTime(u32),
    #[error("total calls must be positive, got {0}")]
    NonPositiveCalls(u32),
    #[error("start hour must be in 0..=23, got {0}")]
    StartHourOutOfRange(u8),
    #[error("end hour must be in 1..=24, got {0}")]
    EndHourOutOfRange(u8),
    #[error("end hour {end_hour} must be greater than start hour {start_hour}")]
    EmptyWindow { start_hour: u8, end_hour: u8 },
    #[error("priority must be in 1..=5, got {0}")]
    PriorityOutOfRange(u8),
}

pub type Result<T> = std::result::Result<T, ValidationError>;
