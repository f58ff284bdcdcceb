//! Cursor setup
//!
//! Every glyph goes through the same policy:
//!
//! 1. With a scale factor above 1, magnify the glyph and hand the result
//!    to the sink.
//! 2. If scaling fails or the sink rejects the scaled bitmap, log a
//!    warning and hand the sink the unscaled glyph instead.
//! 3. With a scale factor of 1, hand the sink the unscaled glyph directly.
//!
//! Scaling is cosmetic, so only a failure on the unscaled glyph is an
//! error.

use crate::{CursorConfig, CursorError, CursorGlyph, CursorKind, CursorResult};
use bitscale_core::PackedBitmap;
use bitscale_transform::{ScaleOptions, scale_with_options};
use log::{debug, warn};
use std::fmt;

/// Consumer that turns a bitmap into a cursor
///
/// Implemented by the windowing layer. The bitmap is used as both image
/// and mask; its hot spot is the cursor's click point. The sink must not
/// keep a reference to the bitmap beyond the call.
pub trait CursorSink {
    /// Cursor handle produced by the sink
    type Cursor;
    /// Reason the sink could not create a cursor
    type Error: fmt::Display;

    /// Create a cursor of the given kind from `bitmap`.
    fn create_cursor(
        &mut self,
        kind: CursorKind,
        bitmap: &PackedBitmap,
    ) -> Result<Self::Cursor, Self::Error>;
}

/// A cursor created by [`prepare_cursor`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedCursor<C> {
    /// Which cursor this is
    pub kind: CursorKind,
    /// Handle returned by the sink
    pub cursor: C,
    /// Scale factor actually applied (1 after a fallback)
    pub scale: u32,
}

/// Create one cursor, scaling its glyph when configured and falling back
/// to the unscaled glyph on any scaling failure.
///
/// # Errors
///
/// Returns [`CursorError::Glyph`] if the glyph data is invalid and
/// [`CursorError::Create`] if the sink rejects the unscaled glyph.
pub fn prepare_cursor<S: CursorSink>(
    kind: CursorKind,
    glyph: &CursorGlyph,
    config: &CursorConfig,
    sink: &mut S,
) -> CursorResult<PreparedCursor<S::Cursor>> {
    let original = glyph
        .to_bitmap()
        .map_err(|source| CursorError::Glyph { kind, source })?;

    if config.scale > 1 {
        let options = ScaleOptions::new(kind.name()).verbose(config.verbose);
        match scale_with_options(&original, config.scale, &options) {
            Ok(scaled) => match sink.create_cursor(kind, &scaled) {
                Ok(cursor) => {
                    debug!(
                        "{kind} cursor: {}x{} at scale {}",
                        scaled.width(),
                        scaled.height(),
                        config.scale
                    );
                    return Ok(PreparedCursor {
                        kind,
                        cursor,
                        scale: config.scale,
                    });
                }
                Err(err) => warn!(
                    "{kind} cursor: sink rejected {}x{} scaled bitmap ({err}); using unscaled glyph",
                    scaled.width(),
                    scaled.height()
                ),
            },
            Err(err) => warn!("{kind} cursor: scaling failed ({err}); using unscaled glyph"),
        }
    }

    let cursor = sink
        .create_cursor(kind, &original)
        .map_err(|err| CursorError::Create {
            kind,
            message: err.to_string(),
        })?;
    debug!(
        "{kind} cursor: {}x{} unscaled",
        original.width(),
        original.height()
    );
    Ok(PreparedCursor {
        kind,
        cursor,
        scale: 1,
    })
}

/// Create every cursor in `table`, in order.
///
/// # Errors
///
/// Stops at the first glyph whose unscaled bitmap cannot be turned into
/// a cursor; see [`prepare_cursor`].
pub fn prepare_cursors<S: CursorSink>(
    table: &[(CursorKind, CursorGlyph)],
    config: &CursorConfig,
    sink: &mut S,
) -> CursorResult<Vec<PreparedCursor<S::Cursor>>> {
    let mut cursors = Vec::with_capacity(table.len());
    for (kind, glyph) in table {
        cursors.push(prepare_cursor(*kind, glyph, config, sink)?);
    }
    Ok(cursors)
}
