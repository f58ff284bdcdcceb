//! Error types for bitscale-core
//!
//! Every fallible constructor and accessor in this crate returns
//! [`Result<T>`]. Variants carry the offending sizes so callers can log
//! them without re-deriving anything.

use thiserror::Error;

/// bitscale-core error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Width or height is zero
    #[error("invalid bitmap dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Supplied pixel data is shorter than `bytes_per_row * height`
    #[error("bitmap data too short: expected {expected} bytes, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    /// Pixel coordinate out of bounds
    #[error("pixel ({x}, {y}) out of bounds for {width}x{height} bitmap")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// Memory allocation failed (or the requested size overflows)
    #[error("memory allocation failed: {bytes} bytes")]
    AllocationFailed { bytes: usize },
}

/// Result type alias for bitscale-core operations
pub type Result<T> = std::result::Result<T, Error>;
