//! bitscale-transform - Bitmap magnification
//!
//! This crate provides integer nearest-neighbor scaling of packed 1 bpp
//! bitmaps: every source pixel becomes a solid `factor x factor` block,
//! the hot spot is scaled with the image, and the padding bits of every
//! destination row are guaranteed to be zero.

mod error;
pub mod scale;

pub use error::{ScaleError, ScaleResult};
pub use scale::{MAX_SCALE_FACTOR, MIN_SCALE_FACTOR, ScaleOptions, scale, scale_with_options};
