//! Error types for engine operations.

use thiserror::Error;
use vedit_models::ClipId;

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors that can occur in the computation engines.
///
/// All variants are deterministic input-validation failures surfaced
/// synchronously to the caller; none are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Invalid time range: end ({end}) must be after start ({start})")]
    InvalidRange { start: f64, end: f64 },

    #[error("Split time {split_time} is not strictly inside clip [{start}, {end}]")]
    SplitOutOfBounds {
        split_time: f64,
        start: f64,
        end: f64,
    },

    #[error("Clip not found: {0}")]
    NotFound(ClipId),

    #[error("Degenerate gaze geometry: target coincides with the eye midpoint")]
    GazeDegenerate,

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

impl EngineError {
    /// Create an invalid-range error.
    pub fn invalid_range(start: f64, end: f64) -> Self {
        Self::InvalidRange { start, end }
    }

    /// Create a split-out-of-bounds error.
    pub fn split_out_of_bounds(split_time: f64, start: f64, end: f64) -> Self {
        Self::SplitOutOfBounds {
            split_time,
            start,
            end,
        }
    }

    /// Create an unsupported-format error.
    pub fn unsupported_format(format: impl Into<String>) -> Self {
        Self::UnsupportedFormat(format.into())
    }
}
