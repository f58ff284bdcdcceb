//! Cursor glyphs
//!
//! Glyphs are XBM-style data: packed 1 bpp, LSB-first, rows padded to a
//! byte boundary. They are usually `const` tables compiled into the
//! program.

use bitscale_core::{PackedBitmap, Result};
use std::fmt;

/// The cursors used by the editor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorKind {
    /// Default pointer
    Arrow,
    /// Copy mode
    Copy,
    /// Delete mode
    Delete,
    /// Probe mode
    Probe,
    /// Box selection mode
    Box,
}

impl CursorKind {
    /// Every cursor kind, in setup order.
    pub const ALL: [CursorKind; 5] = [
        CursorKind::Arrow,
        CursorKind::Copy,
        CursorKind::Delete,
        CursorKind::Probe,
        CursorKind::Box,
    ];

    /// Short lowercase name, used in log output.
    pub fn name(self) -> &'static str {
        match self {
            CursorKind::Arrow => "arrow",
            CursorKind::Copy => "copy",
            CursorKind::Delete => "delete",
            CursorKind::Probe => "probe",
            CursorKind::Box => "box",
        }
    }
}

impl fmt::Display for CursorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static cursor glyph data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorGlyph {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Hot spot column
    pub x_hot: i32,
    /// Hot spot row
    pub y_hot: i32,
    /// Packed rows, at least `ceil(width / 8) * height` bytes
    pub bits: &'static [u8],
}

impl CursorGlyph {
    /// Describe a glyph.
    pub const fn new(width: u32, height: u32, x_hot: i32, y_hot: i32, bits: &'static [u8]) -> Self {
        Self {
            width,
            height,
            x_hot,
            y_hot,
            bits,
        }
    }

    /// Copy the glyph into a bitmap, hot spot included.
    ///
    /// # Errors
    ///
    /// Fails if the dimensions are zero or `bits` is too short for them.
    pub fn to_bitmap(&self) -> Result<PackedBitmap> {
        Ok(PackedBitmap::from_bytes(self.width, self.height, self.bits)?
            .with_hot_spot(self.x_hot, self.y_hot))
    }
}
