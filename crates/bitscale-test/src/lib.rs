//! bitscale-test - Regression test harness for bitscale
//!
//! This crate provides the shared plumbing used by the `tests/*_reg.rs`
//! files of every crate in the workspace:
//!
//! - [`RegParams`]: numbered checks that record failures instead of
//!   panicking on the first one, then report everything in [`RegParams::cleanup`]
//! - [`bitmap_from_rows`]: build a fixture from `#`/`.` text rows
//! - [`random_bitmap`]: deterministic pseudo-random bitmaps for checking
//!   laws over many shapes
//!
//! # Usage
//!
//! ```ignore
//! use bitscale_test::{RegParams, bitmap_from_rows};
//!
//! let mut rp = RegParams::new("scale");
//! let bm = bitmap_from_rows(&["#.#", ".#."]).unwrap();
//! rp.compare_values(3.0, bm.count_pixels() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod fixtures;
mod params;

pub use fixtures::{bitmap_from_rows, random_bitmap};
pub use params::RegParams;
