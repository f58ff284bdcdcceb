//! Error types for bitscale-transform

use thiserror::Error;

/// Errors that can occur while scaling a bitmap
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScaleError {
    /// Scale factor outside the supported range; nothing was allocated
    #[error("invalid scale factor: {0} (supported: 1..=4)")]
    InvalidFactor(u32),

    /// The destination buffer could not be allocated
    #[error("out of memory allocating {bytes} byte destination bitmap")]
    OutOfMemory { bytes: usize },
}

impl ScaleError {
    /// Whether the same source could still succeed at a smaller factor.
    ///
    /// An invalid factor is a caller bug; running out of memory may not
    /// recur for a smaller destination.
    pub fn is_retryable_at_lower_factor(&self) -> bool {
        matches!(self, ScaleError::OutOfMemory { .. })
    }
}

/// Result type for scale operations
pub type ScaleResult<T> = Result<T, ScaleError>;
