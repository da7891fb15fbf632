//! Error types for slot-grid operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid timestamp: {0} ms is outside the representable range")]
    InvalidTimestamp(i64),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid selection: index {index} with {len} appointments")]
    InvalidSelection { index: usize, len: usize },

    #[error("Unknown customer field: {0}")]
    UnknownField(String),

    #[error("Appointment has no start time selected")]
    MissingStartTime,

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SlotError>;
