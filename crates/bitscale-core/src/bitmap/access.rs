//! Pixel access functions
//!
//! Low-level functions for getting and setting individual pixels of a
//! packed row, plus the bounds-checked per-pixel accessors on the bitmap
//! types.
//!
//! # Pixel packing
//!
//! Pixels are packed LSB-first within each byte. In a row, pixel 0
//! occupies bit 0 (`0x01`) of byte 0 and pixel 7 occupies bit 7 (`0x80`).

use super::{PackedBitmap, PackedBitmapMut};
use crate::error::Result;

impl PackedBitmap {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<bool> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        Some(get_data_bit(self.inner.row(y), x))
    }
}

impl PackedBitmapMut {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<bool> {
        if !self.inner.in_bounds(x, y) {
            return None;
        }
        Some(get_data_bit(self.inner.row(y), x))
    }

    /// Set or clear the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds)
    /// if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, on: bool) -> Result<()> {
        if !self.inner.in_bounds(x, y) {
            return Err(self.inner.out_of_bounds(x, y));
        }
        let line = self.inner.row_mut(y);
        if on {
            set_data_bit(line, x);
        } else {
            clear_data_bit(line, x);
        }
        Ok(())
    }
}

/// Get a 1-bit pixel from a packed row.
///
/// # Panics
///
/// Panics if `x / 8` is past the end of `line`.
#[inline]
pub fn get_data_bit(line: &[u8], x: u32) -> bool {
    (line[(x >> 3) as usize] >> (x & 7)) & 1 != 0
}

/// Set a 1-bit pixel in a packed row to 1.
///
/// # Panics
///
/// Panics if `x / 8` is past the end of `line`.
#[inline]
pub fn set_data_bit(line: &mut [u8], x: u32) {
    line[(x >> 3) as usize] |= 1 << (x & 7);
}

/// Clear a 1-bit pixel in a packed row to 0.
///
/// # Panics
///
/// Panics if `x / 8` is past the end of `line`.
#[inline]
pub fn clear_data_bit(line: &mut [u8], x: u32) {
    line[(x >> 3) as usize] &= !(1 << (x & 7));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_lsb_first_order() {
        let line = [0b0000_0011u8, 0b1000_0000];
        assert!(get_data_bit(&line, 0));
        assert!(get_data_bit(&line, 1));
        assert!(!get_data_bit(&line, 2));
        assert!(!get_data_bit(&line, 7));
        assert!(!get_data_bit(&line, 8));
        assert!(get_data_bit(&line, 15));
    }

    #[test]
    fn test_set_and_clear_bit() {
        let mut line = [0u8; 2];
        set_data_bit(&mut line, 0);
        set_data_bit(&mut line, 9);
        assert_eq!(line, [0x01, 0x02]);
        clear_data_bit(&mut line, 0);
        assert_eq!(line, [0x00, 0x02]);
        // Setting twice is idempotent
        set_data_bit(&mut line, 9);
        assert_eq!(line, [0x00, 0x02]);
    }

    #[test]
    fn test_get_pixel_bounds() {
        let bm = PackedBitmap::from_bytes(5, 2, &[0x01, 0x10]).unwrap();
        assert_eq!(bm.get_pixel(0, 0), Some(true));
        assert_eq!(bm.get_pixel(4, 1), Some(true));
        assert_eq!(bm.get_pixel(3, 1), Some(false));
        assert_eq!(bm.get_pixel(5, 0), None);
        assert_eq!(bm.get_pixel(0, 2), None);
    }

    #[test]
    fn test_set_pixel_round_trip() {
        let mut bm = PackedBitmapMut::new(10, 3).unwrap();
        bm.set_pixel(9, 2, true).unwrap();
        assert_eq!(bm.get_pixel(9, 2), Some(true));
        assert_eq!(bm.row_data(2), &[0x00, 0x02]);
        bm.set_pixel(9, 2, false).unwrap();
        assert_eq!(bm.get_pixel(9, 2), Some(false));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut bm = PackedBitmapMut::new(10, 3).unwrap();
        assert_eq!(
            bm.set_pixel(10, 0, true),
            Err(Error::IndexOutOfBounds {
                x: 10,
                y: 0,
                width: 10,
                height: 3
            })
        );
        // Padding bit must stay untouched
        assert!(bm.data().iter().all(|&b| b == 0));
    }
}
