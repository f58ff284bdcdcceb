//! Bitmap scaling
//!
//! Integer nearest-neighbor magnification (block replication) of packed
//! 1 bpp bitmaps.
//!
//! For a factor `s`, the destination is `width * s` by `height * s`, the
//! hot spot is multiplied by `s`, and each set source pixel `(r, c)` sets
//! the block `[r*s, r*s + s) x [c*s, c*s + s)`. The destination buffer is
//! freshly allocated and zeroed; bits are only ever OR'd on, and a final
//! pass forces the padding bits of each row to zero.

use crate::{ScaleError, ScaleResult};
use bitscale_core::{Error, PackedBitmap, PackedBitmapMut, get_data_bit, set_data_bit};
use log::{debug, info, warn};

/// Smallest supported scale factor
pub const MIN_SCALE_FACTOR: u32 = 1;

/// Largest supported scale factor
///
/// Inputs are cursor-sized glyphs; the ceiling keeps a bad factor from
/// turning into a huge allocation.
pub const MAX_SCALE_FACTOR: u32 = 4;

/// Options for [`scale_with_options`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScaleOptions<'a> {
    /// Name of the bitmap, used in log output
    pub label: &'a str,
    /// Emit detailed diagnostics (pixel counts, leading row bytes) at
    /// `info` level
    pub verbose: bool,
}

impl<'a> ScaleOptions<'a> {
    /// Create options with the given label and diagnostics off.
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            verbose: false,
        }
    }

    /// Turn detailed diagnostics on or off.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Magnify a bitmap by an integer factor.
///
/// Equivalent to [`scale_with_options`] with default options.
///
/// # Arguments
/// * `source` - Bitmap to scale; only read
/// * `factor` - Scale factor in `1..=4`
///
/// # Errors
///
/// Returns [`ScaleError::InvalidFactor`] for a factor outside `1..=4` and
/// [`ScaleError::OutOfMemory`] if the destination cannot be allocated.
///
/// # Examples
///
/// ```
/// use bitscale_core::PackedBitmap;
/// use bitscale_transform::scale;
///
/// let src = PackedBitmap::from_bytes(8, 1, &[0b0000_0011]).unwrap();
/// let dst = scale(&src, 2).unwrap();
/// assert_eq!((dst.width(), dst.height()), (16, 2));
/// assert_eq!(dst.data(), &[0x0F, 0x00, 0x0F, 0x00]);
/// ```
pub fn scale(source: &PackedBitmap, factor: u32) -> ScaleResult<PackedBitmap> {
    scale_with_options(source, factor, &ScaleOptions::default())
}

/// Magnify a bitmap by an integer factor, with logging options.
///
/// # Arguments
/// * `source` - Bitmap to scale; only read
/// * `factor` - Scale factor in `1..=4`
/// * `options` - Label and diagnostics toggle
///
/// # Errors
///
/// Returns [`ScaleError::InvalidFactor`] for a factor outside `1..=4`
/// (checked before anything is allocated) and [`ScaleError::OutOfMemory`]
/// if the destination size overflows or cannot be allocated.
pub fn scale_with_options(
    source: &PackedBitmap,
    factor: u32,
    options: &ScaleOptions<'_>,
) -> ScaleResult<PackedBitmap> {
    if !(MIN_SCALE_FACTOR..=MAX_SCALE_FACTOR).contains(&factor) {
        return Err(ScaleError::InvalidFactor(factor));
    }

    let overflow = || ScaleError::OutOfMemory { bytes: usize::MAX };
    let src_width = source.width();
    let src_height = source.height();
    let dst_width = src_width.checked_mul(factor).ok_or_else(overflow)?;
    let dst_height = src_height.checked_mul(factor).ok_or_else(overflow)?;
    let (hot_x, hot_y) = source.hot_spot();
    let dst_hot_x = hot_x.saturating_mul(factor as i32);
    let dst_hot_y = hot_y.saturating_mul(factor as i32);

    let mut dst = PackedBitmapMut::new(dst_width, dst_height).map_err(|err| match err {
        Error::AllocationFailed { bytes } => ScaleError::OutOfMemory { bytes },
        // Non-zero source dimensions times a factor >= 1 are non-zero.
        other => unreachable!("destination geometry rejected: {other}"),
    })?;
    dst.set_hot_spot(dst_hot_x, dst_hot_y);

    debug!(
        "scale {:?}: {}x{} ({} bytes/row) hot=({},{}) x{} -> {}x{} ({} bytes/row) hot=({},{})",
        options.label,
        src_width,
        src_height,
        source.bytes_per_row(),
        hot_x,
        hot_y,
        factor,
        dst_width,
        dst_height,
        dst.bytes_per_row(),
        dst_hot_x,
        dst_hot_y
    );

    replicate_blocks(source, &mut dst, factor);

    let cleared = dst.clear_row_padding();
    if cleared != 0 {
        warn!(
            "scale {:?}: cleared {} padding bits in {}x{} destination",
            options.label, cleared, dst_width, dst_height
        );
    }
    debug_assert_eq!(cleared, 0, "block replication wrote past the row width");

    let dst: PackedBitmap = dst.into();
    if options.verbose {
        log_diagnostics(source, &dst, factor, options.label);
    }
    Ok(dst)
}

/// Set the `factor x factor` destination block of every set source pixel.
///
/// Destination coordinates outside the image are skipped.
fn replicate_blocks(source: &PackedBitmap, dst: &mut PackedBitmapMut, factor: u32) {
    let dst_width = dst.width();
    let dst_height = dst.height();

    for src_row in 0..source.height() {
        let line = source.row_data(src_row);
        for src_col in 0..source.width() {
            if !get_data_bit(line, src_col) {
                continue;
            }
            for i in 0..factor {
                let dst_row = src_row * factor + i;
                if dst_row >= dst_height {
                    continue;
                }
                let dline = dst.row_data_mut(dst_row);
                for j in 0..factor {
                    let dst_col = src_col * factor + j;
                    if dst_col >= dst_width {
                        continue;
                    }
                    set_data_bit(dline, dst_col);
                }
            }
        }
    }
}

fn log_diagnostics(source: &PackedBitmap, dst: &PackedBitmap, factor: u32, label: &str) {
    let src_set = source.count_pixels();
    let dst_set = dst.count_pixels();
    let expected = src_set * u64::from(factor * factor);
    info!("cursor scaling: {label}");
    info!(
        "  source: {} pixels total, {} pixels set",
        u64::from(source.width()) * u64::from(source.height()),
        src_set
    );
    info!(
        "  dest: {} pixels total, {} pixels set (expected {})",
        u64::from(dst.width()) * u64::from(dst.height()),
        dst_set,
        expected
    );
    let src_head = &source.row_data(0)[..source.bytes_per_row().min(4)];
    let dst_head = &dst.row_data(0)[..dst.bytes_per_row().min(8)];
    info!("  first row bytes (src): {:02x?}", src_head);
    info!("  first row bytes (dst): {:02x?}", dst_head);
    if dst_set != expected {
        warn!("scale {label:?}: {dst_set} pixels set, expected {expected}");
    }
}
