//! Test fixtures

use bitscale_core::{PackedBitmap, PackedBitmapMut, Result};

/// Build a bitmap from text rows, `#` for a set pixel and anything else
/// for a clear one.
///
/// The width is the length of the longest row; shorter rows are clear on
/// the right. Padding bits are zero.
///
/// # Errors
///
/// Returns [`bitscale_core::Error::InvalidDimension`] for an empty
/// picture.
pub fn bitmap_from_rows(rows: &[&str]) -> Result<PackedBitmap> {
    let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as u32;
    let mut bm = PackedBitmapMut::new(width, rows.len() as u32)?;
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            if c == '#' {
                bm.set_pixel(x as u32, y as u32, true)?;
            }
        }
    }
    Ok(bm.into())
}

/// Generate a pseudo-random bitmap with clean padding.
///
/// The same `(width, height, seed)` always yields the same bitmap. The
/// hot spot is placed somewhere inside the image.
///
/// # Errors
///
/// Returns [`bitscale_core::Error::InvalidDimension`] if width or height
/// is 0.
pub fn random_bitmap(width: u32, height: u32, seed: u32) -> Result<PackedBitmap> {
    let mut rng = SimpleRng::new(seed);
    let mut bm = PackedBitmapMut::new(width, height)?;
    for byte in bm.data_mut() {
        *byte = (rng.next() >> 56) as u8;
    }
    bm.clear_row_padding();
    let hot_x = (rng.next() >> 33) as u32 % width;
    let hot_y = (rng.next() >> 33) as u32 % height;
    bm.set_hot_spot(hot_x as i32, hot_y as i32);
    Ok(bm.into())
}

/// Simple linear congruential generator for reproducible randomness
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    fn next(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitmap_from_rows() {
        let bm = bitmap_from_rows(&["#..#", ".##", "#"]).unwrap();
        assert_eq!(bm.width(), 4);
        assert_eq!(bm.height(), 3);
        assert_eq!(bm.data(), &[0b1001, 0b0110, 0b0001]);
    }

    #[test]
    fn test_bitmap_from_rows_empty() {
        assert!(bitmap_from_rows(&[]).is_err());
    }

    #[test]
    fn test_random_bitmap_deterministic() {
        let a = random_bitmap(13, 9, 7).unwrap();
        let b = random_bitmap(13, 9, 7).unwrap();
        assert!(a.equals(&b));
        assert!(a.has_clean_padding());
        let (hx, hy) = a.hot_spot();
        assert!((0..13).contains(&hx));
        assert!((0..9).contains(&hy));
    }
}
