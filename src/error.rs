use thiserror::Error;

use crate::caption::store::CaptionId;
use crate::caption::time::TimeField;

/// Reason a caption was rejected by the validator.
///
/// Variants are listed in the order the checks run; the first failing
/// check wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Invalid time format.")]
    InvalidTimeFormat,
    #[error("Time values cannot be negative.")]
    NegativeTime,
    #[error("Start time must be less than end time.")]
    StartNotBeforeEnd,
    #[error("Start time exceeds video duration.")]
    StartExceedsDuration,
    #[error("End time exceeds video duration.")]
    EndExceedsDuration,
    #[error("Caption duration must be at least 1 second.")]
    TooShort,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    #[error("invalid {field} field: {value:?}")]
    InvalidField { field: TimeField, value: String },
    #[error("time value out of range: {0:?}")]
    Overflow(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("caption {0} not found")]
pub struct CaptionNotFound(pub CaptionId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VideoUrlError {
    #[error("Please enter video URL.")]
    Empty,
}
