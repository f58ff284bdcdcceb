//! Row padding
//!
//! Each packed row is padded out to a byte boundary. Consumers that walk
//! the buffer by row stride read the padding bits too, so they must be
//! zero: a stray bit there shows up as a pixel next to the right edge.

use super::{BitmapData, PackedBitmap, PackedBitmapMut};

/// Mask of the pixel bits held by the last byte of a row `width` pixels
/// wide (LSB-first, so the low `width % 8` bits).
///
/// Returns `0xFF` when the width is a multiple of 8.
#[inline]
pub fn padding_mask(width: u32) -> u8 {
    match width % 8 {
        0 => 0xFF,
        n => (1u8 << n) - 1,
    }
}

impl BitmapData {
    fn has_clean_padding(&self) -> bool {
        let boundary = (self.width / 8) as usize;
        let keep = padding_mask(self.width);
        (0..self.height).all(|y| {
            let row = self.row(y);
            let tail = if self.width % 8 != 0 {
                if row[boundary] & !keep != 0 {
                    return false;
                }
                boundary + 1
            } else {
                boundary
            };
            row.iter().skip(tail).all(|&b| b == 0)
        })
    }
}

impl PackedBitmap {
    /// Check that every bit at column `>= width` in every row is zero.
    pub fn has_clean_padding(&self) -> bool {
        self.inner.has_clean_padding()
    }
}

impl PackedBitmapMut {
    /// Check that every bit at column `>= width` in every row is zero.
    pub fn has_clean_padding(&self) -> bool {
        self.inner.has_clean_padding()
    }

    /// Force every padding bit to zero.
    ///
    /// For each row, the byte containing the right edge is masked down to
    /// its low `width % 8` bits (when the width is not byte aligned), and
    /// every byte wholly past the edge is zeroed. Pixel bits are never
    /// touched and no bit is ever set.
    ///
    /// Returns the number of bits that were cleared.
    pub fn clear_row_padding(&mut self) -> u32 {
        let width = self.inner.width;
        let boundary = (width / 8) as usize;
        let keep = padding_mask(width);
        let mut cleared = 0;

        for y in 0..self.inner.height {
            let row = self.inner.row_mut(y);
            let mut tail = boundary;
            if width % 8 != 0 {
                cleared += (row[boundary] & !keep).count_ones();
                row[boundary] &= keep;
                tail += 1;
            }
            for byte in row.iter_mut().skip(tail) {
                cleared += byte.count_ones();
                *byte = 0;
            }
        }

        cleared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padding_mask() {
        assert_eq!(padding_mask(8), 0xFF);
        assert_eq!(padding_mask(16), 0xFF);
        assert_eq!(padding_mask(1), 0x01);
        assert_eq!(padding_mask(5), 0x1F);
        assert_eq!(padding_mask(15), 0x7F);
    }

    #[test]
    fn test_clear_row_padding_partial_byte() {
        let bm = PackedBitmap::from_bytes(15, 2, &[0xFF, 0xFF, 0x0F, 0x80]).unwrap();
        assert!(!bm.has_clean_padding());

        let mut m = bm.to_mut();
        assert_eq!(m.clear_row_padding(), 2);
        assert_eq!(m.data(), &[0xFF, 0x7F, 0x0F, 0x00]);
        assert!(m.has_clean_padding());
        // Second pass finds nothing
        assert_eq!(m.clear_row_padding(), 0);
    }

    #[test]
    fn test_clear_row_padding_aligned_width() {
        let bm = PackedBitmap::from_bytes(16, 1, &[0xFF, 0xFF]).unwrap();
        assert!(bm.has_clean_padding());
        let mut m = bm.to_mut();
        assert_eq!(m.clear_row_padding(), 0);
        assert_eq!(m.data(), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_clear_row_padding_keeps_pixels() {
        let bm = PackedBitmap::from_bytes(3, 3, &[0xFF, 0x05, 0xF8]).unwrap();
        let mut m = bm.to_mut();
        assert_eq!(m.clear_row_padding(), 5 + 5);
        assert_eq!(m.data(), &[0x07, 0x05, 0x00]);
        assert_eq!(m.count_pixels(), 5);
    }
}
