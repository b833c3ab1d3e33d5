//! Error types for label-hours operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LabelHoursError {
    #[error("Inverted interval: end {end} is before start {start}")]
    InvertedInterval { start: String, end: String },

    #[error("Invalid work window: {0}")]
    InvalidWindow(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),
}

pub type Result<T> = std::result::Result<T, LabelHoursError>;
