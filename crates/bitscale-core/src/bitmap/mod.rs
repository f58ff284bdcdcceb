//! PackedBitmap - 1 bpp image container
//!
//! `PackedBitmap` is the image type consumed and produced by the scaler.
//! It holds a monochrome image plus a hot spot, the logical anchor point
//! of a cursor glyph.
//!
//! # Pixel layout
//!
//! - One bit per pixel, 8 pixels per byte
//! - Every row starts on a byte boundary; the stride is always
//!   `ceil(width / 8)` and is recomputed from the width, never stored
//!   independently of it
//! - Pixels are packed LSB-first: bit `k` (`1 << k`) of byte `b` is the
//!   pixel at column `b * 8 + k`
//! - Bits past `width` in the last byte of a row are padding and should
//!   be zero (see [`PackedBitmapMut::clear_row_padding`])
//!
//! # Ownership model
//!
//! `PackedBitmap` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to [`PackedBitmapMut`] via
//! [`PackedBitmap::try_into_mut`] or [`PackedBitmap::to_mut`], then
//! convert back with `Into<PackedBitmap>`.

mod access;
mod info;
mod padding;

pub use access::{clear_data_bit, get_data_bit, set_data_bit};
pub use padding::padding_mask;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Number of bytes in one packed row of a bitmap `width` pixels wide.
#[inline]
pub fn bytes_per_row(width: u32) -> usize {
    width.div_ceil(8) as usize
}

/// Allocate a zeroed buffer of `len` bytes, reporting failure instead of
/// aborting.
fn alloc_zeroed(len: usize) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    data.try_reserve_exact(len)
        .map_err(|_| Error::AllocationFailed { bytes: len })?;
    data.resize(len, 0);
    Ok(data)
}

/// Total buffer size for the given dimensions.
fn buffer_len(width: u32, height: u32) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimension { width, height });
    }
    bytes_per_row(width)
        .checked_mul(height as usize)
        .ok_or(Error::AllocationFailed { bytes: usize::MAX })
}

/// Internal bitmap data
#[derive(Debug, Clone)]
struct BitmapData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Hot spot column
    hot_x: i32,
    /// Hot spot row
    hot_y: i32,
    /// Packed rows, `bytes_per_row(width) * height` bytes
    data: Vec<u8>,
}

impl BitmapData {
    #[inline]
    fn stride(&self) -> usize {
        bytes_per_row(self.width)
    }

    fn row(&self, y: u32) -> &[u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &self.data[start..start + stride]
    }

    fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.stride();
        let start = y as usize * stride;
        &mut self.data[start..start + stride]
    }

    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> Error {
        Error::IndexOutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }

    /// Count set pixels, ignoring padding bits.
    fn count_pixels(&self) -> u64 {
        let full = (self.width / 8) as usize;
        let mask = padding_mask(self.width);
        (0..self.height)
            .map(|y| {
                let row = self.row(y);
                let body: u64 = row[..full].iter().map(|b| u64::from(b.count_ones())).sum();
                let tail = if self.width % 8 != 0 {
                    u64::from((row[full] & mask).count_ones())
                } else {
                    0
                };
                body + tail
            })
            .sum()
    }
}

/// Packed 1 bpp bitmap with a hot spot
///
/// # Examples
///
/// ```
/// use bitscale_core::PackedBitmap;
///
/// // 5x1 bitmap with all five pixels set
/// let bm = PackedBitmap::from_bytes(5, 1, &[0b0001_1111]).unwrap();
/// assert_eq!(bm.bytes_per_row(), 1);
/// assert_eq!(bm.count_pixels(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct PackedBitmap {
    inner: Arc<BitmapData>,
}

impl PackedBitmap {
    /// Create a new bitmap with all pixels cleared and the hot spot at
    /// the origin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the buffer cannot be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        PackedBitmapMut::new(width, height).map(Into::into)
    }

    /// Create a bitmap from packed row data.
    ///
    /// Copies the first `bytes_per_row(width) * height` bytes of `data`;
    /// anything after that is ignored. Padding bits are copied as given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0 and
    /// [`Error::BufferTooShort`] if `data` holds fewer bytes than the
    /// geometry requires.
    pub fn from_bytes(width: u32, height: u32, data: &[u8]) -> Result<Self> {
        let expected = buffer_len(width, height)?;
        if data.len() < expected {
            return Err(Error::BufferTooShort {
                expected,
                actual: data.len(),
            });
        }
        let mut buf = alloc_zeroed(expected)?;
        buf.copy_from_slice(&data[..expected]);
        Ok(PackedBitmap {
            inner: Arc::new(BitmapData {
                width,
                height,
                hot_x: 0,
                hot_y: 0,
                data: buf,
            }),
        })
    }

    /// Return this bitmap with its hot spot replaced.
    pub fn with_hot_spot(mut self, x: i32, y: i32) -> Self {
        let inner = Arc::make_mut(&mut self.inner);
        inner.hot_x = x;
        inner.hot_y = y;
        self
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.inner.stride()
    }

    /// Get the hot spot column.
    #[inline]
    pub fn hot_x(&self) -> i32 {
        self.inner.hot_x
    }

    /// Get the hot spot row.
    #[inline]
    pub fn hot_y(&self) -> i32 {
        self.inner.hot_y
    }

    /// Get the hot spot as `(x, y)`.
    #[inline]
    pub fn hot_spot(&self) -> (i32, i32) {
        (self.inner.hot_x, self.inner.hot_y)
    }

    /// Get raw access to the packed data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the packed bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        self.inner.row(y)
    }

    /// Count the set pixels. Padding bits are not counted.
    pub fn count_pixels(&self) -> u64 {
        self.inner.count_pixels()
    }

    /// Check whether two bitmaps are identical: same geometry, same hot
    /// spot, and byte-for-byte the same packed data (padding included).
    pub fn equals(&self, other: &PackedBitmap) -> bool {
        self.inner.width == other.inner.width
            && self.inner.height == other.inner.height
            && self.inner.hot_x == other.inner.hot_x
            && self.inner.hot_y == other.inner.hot_y
            && self.inner.data == other.inner.data
    }

    /// Get the number of strong references to the data.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Try to get mutable access to the data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<PackedBitmapMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PackedBitmapMut { inner: data }),
            Err(arc) => Err(PackedBitmap { inner: arc }),
        }
    }

    /// Create a mutable copy of this bitmap.
    pub fn to_mut(&self) -> PackedBitmapMut {
        PackedBitmapMut {
            inner: (*self.inner).clone(),
        }
    }
}

/// Mutable packed bitmap
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`PackedBitmap`] using `Into<PackedBitmap>`.
#[derive(Debug)]
pub struct PackedBitmapMut {
    inner: BitmapData,
}

impl PackedBitmapMut {
    /// Create a new mutable bitmap with all bits (padding included)
    /// cleared.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0, and
    /// [`Error::AllocationFailed`] if the buffer size overflows or cannot
    /// be allocated.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let len = buffer_len(width, height)?;
        let data = alloc_zeroed(len)?;
        Ok(PackedBitmapMut {
            inner: BitmapData {
                width,
                height,
                hot_x: 0,
                hot_y: 0,
                data,
            },
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the row stride in bytes.
    #[inline]
    pub fn bytes_per_row(&self) -> usize {
        self.inner.stride()
    }

    /// Get the hot spot as `(x, y)`.
    #[inline]
    pub fn hot_spot(&self) -> (i32, i32) {
        (self.inner.hot_x, self.inner.hot_y)
    }

    /// Set the hot spot.
    pub fn set_hot_spot(&mut self, x: i32, y: i32) {
        self.inner.hot_x = x;
        self.inner.hot_y = y;
    }

    /// Get raw access to the packed data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the packed data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get the packed bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u8] {
        self.inner.row(y)
    }

    /// Get mutable access to the packed bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u8] {
        self.inner.row_mut(y)
    }

    /// Count the set pixels. Padding bits are not counted.
    pub fn count_pixels(&self) -> u64 {
        self.inner.count_pixels()
    }
}

impl From<PackedBitmapMut> for PackedBitmap {
    fn from(bm: PackedBitmapMut) -> Self {
        PackedBitmap {
            inner: Arc::new(bm.inner),
        }
    }
}
