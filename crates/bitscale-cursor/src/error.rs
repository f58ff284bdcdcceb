//! Error types for bitscale-cursor

use crate::CursorKind;
use thiserror::Error;

/// Errors that can occur while preparing cursors
#[derive(Debug, Error)]
pub enum CursorError {
    /// Glyph geometry does not describe a valid bitmap
    #[error("{kind} cursor glyph is invalid: {source}")]
    Glyph {
        kind: CursorKind,
        #[source]
        source: bitscale_core::Error,
    },

    /// The sink rejected the unscaled glyph, so there is nothing left to
    /// fall back to
    #[error("could not create {kind} cursor: {message}")]
    Create { kind: CursorKind, message: String },
}

/// Result type for cursor operations
pub type CursorResult<T> = Result<T, CursorError>;
