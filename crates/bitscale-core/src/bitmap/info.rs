//! Debug output for bitmaps

use super::{BitmapData, PackedBitmap};
use std::io::Write;

impl BitmapData {
    fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width as usize + 1) * self.height as usize);
        for y in 0..self.height {
            let row = self.row(y);
            for x in 0..self.width {
                out.push(if super::get_data_bit(row, x) { '#' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}

impl PackedBitmap {
    /// Render the bitmap as text, one line per row, `#` for set pixels
    /// and `.` for clear ones.
    pub fn to_ascii(&self) -> String {
        self.inner.to_ascii()
    }

    /// Write bitmap metadata to a writer (for debugging).
    pub fn print_info(&self, writer: &mut impl Write, label: Option<&str>) -> std::io::Result<()> {
        if let Some(text) = label {
            writeln!(writer, "  Bitmap info for {text}:")?;
        }
        writeln!(
            writer,
            "    width = {}, height = {}, bytes/row = {}",
            self.width(),
            self.height(),
            self.bytes_per_row()
        )?;
        writeln!(writer, "    hot spot = ({}, {})", self.hot_x(), self.hot_y())?;
        writeln!(writer, "    pixels set = {}", self.count_pixels())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_ascii() {
        let bm = PackedBitmap::from_bytes(3, 2, &[0b101, 0b010]).unwrap();
        assert_eq!(bm.to_ascii(), "#.#\n.#.\n");
    }

    #[test]
    fn test_print_info() {
        let bm = PackedBitmap::from_bytes(9, 1, &[0x03, 0x01])
            .unwrap()
            .with_hot_spot(4, 0);
        let mut out = Vec::new();
        bm.print_info(&mut out, Some("probe")).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Bitmap info for probe"));
        assert!(text.contains("width = 9, height = 1, bytes/row = 2"));
        assert!(text.contains("hot spot = (4, 0)"));
        assert!(text.contains("pixels set = 3"));
    }
}
