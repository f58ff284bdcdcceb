//! bitscale - Monochrome cursor bitmap scaling
//!
//! # Overview
//!
//! - Packed 1 bpp bitmaps with a hot spot, LSB-first bit order
//! - Integer nearest-neighbor magnification with exact row padding
//! - Cursor glyph preparation with a scale-or-fallback policy
//!
//! # Example
//!
//! ```
//! use bitscale::{PackedBitmap, transform::scale};
//!
//! // 5x1 bitmap, all pixels set, magnified 3x
//! let src = PackedBitmap::from_bytes(5, 1, &[0b0001_1111]).unwrap();
//! let dst = scale(&src, 3).unwrap();
//! assert_eq!(dst.width(), 15);
//! assert_eq!(dst.row_data(0), &[0xFF, 0x7F]);
//! assert!(dst.has_clean_padding());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use bitscale_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use bitscale_cursor as cursor;
pub use bitscale_transform as transform;
