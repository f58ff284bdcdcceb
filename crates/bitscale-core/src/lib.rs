//! bitscale-core - Packed monochrome bitmaps
//!
//! This crate provides the data structure shared by the rest of the
//! workspace:
//!
//! - [`PackedBitmap`] / [`PackedBitmapMut`] - 1 bpp image with a hot spot
//!   (immutable / mutable)
//! - Line-level bit accessors ([`get_data_bit`], [`set_data_bit`],
//!   [`clear_data_bit`]) for LSB-first packed rows
//! - Row padding helpers ([`padding_mask`], [`PackedBitmapMut::clear_row_padding`])

pub mod bitmap;
pub mod error;

pub use bitmap::{
    PackedBitmap, PackedBitmapMut, bytes_per_row, clear_data_bit, get_data_bit, padding_mask,
    set_data_bit,
};
pub use error::{Error, Result};
