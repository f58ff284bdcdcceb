//! Scale regression test
//!
//! Checks the scaling laws over a spread of bitmap shapes, including
//! widths that are not multiples of 8, for every supported factor.

use bitscale_core::PackedBitmap;
use bitscale_test::{RegParams, bitmap_from_rows, random_bitmap};
use bitscale_transform::{ScaleError, ScaleOptions, scale, scale_with_options};

const SHAPES: [(u32, u32); 9] = [
    (1, 1),
    (5, 1),
    (7, 3),
    (8, 8),
    (9, 2),
    (13, 11),
    (16, 16),
    (17, 5),
    (32, 32),
];

fn flag(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

#[test_log::test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    for (seed, &(w, h)) in SHAPES.iter().enumerate() {
        let src = random_bitmap(w, h, seed as u32 + 1).expect("random bitmap");
        let (hx, hy) = src.hot_spot();

        for factor in 1..=4u32 {
            let dst = scale(&src, factor).expect("scale");

            // --- Dimension law ---
            rp.compare_values((w * factor) as f64, dst.width() as f64, 0.0);
            rp.compare_values((h * factor) as f64, dst.height() as f64, 0.0);
            rp.compare_values((hx * factor as i32) as f64, dst.hot_x() as f64, 0.0);
            rp.compare_values((hy * factor as i32) as f64, dst.hot_y() as f64, 0.0);

            // --- Pixel-count law ---
            rp.compare_values(
                (src.count_pixels() * u64::from(factor * factor)) as f64,
                dst.count_pixels() as f64,
                0.0,
            );

            // --- Padding law ---
            rp.compare_values(1.0, flag(dst.has_clean_padding()), 0.0);

            // --- Block-replication law ---
            rp.compare_values(1.0, flag(blocks_match(&src, &dst, factor)), 0.0);
        }

        // --- Identity law ---
        let same = scale(&src, 1).expect("scale 1x");
        rp.compare_bitmaps(&src, &same);
    }

    assert!(rp.cleanup(), "scale regression test failed");
}

/// Source pixel (r, c) is set iff every pixel of its destination block is
/// set, and a clear source pixel maps to an all-clear block.
fn blocks_match(src: &PackedBitmap, dst: &PackedBitmap, factor: u32) -> bool {
    for r in 0..src.height() {
        for c in 0..src.width() {
            let on = src.get_pixel(c, r) == Some(true);
            for i in 0..factor {
                for j in 0..factor {
                    let d = dst.get_pixel(c * factor + j, r * factor + i);
                    if d != Some(on) {
                        return false;
                    }
                }
            }
        }
    }
    true
}

#[test_log::test]
fn scale_scenarios_reg() {
    let mut rp = RegParams::new("scale_scenarios");

    // --- 8x1, columns 0 and 1 set, factor 2 ---
    let src = PackedBitmap::from_bytes(8, 1, &[0b0000_0011]).expect("src");
    let dst = scale(&src, 2).expect("scale 2x");
    rp.compare_values(16.0, dst.width() as f64, 0.0);
    rp.compare_values(2.0, dst.height() as f64, 0.0);
    rp.compare_values(0.0, dst.hot_x() as f64, 0.0);
    rp.compare_values(0.0, dst.hot_y() as f64, 0.0);
    rp.compare_strings(&[0x0F, 0x00], dst.row_data(0));
    rp.compare_strings(&[0x0F, 0x00], dst.row_data(1));

    // --- 5x1, all set, factor 3: byte 1 keeps bits 0..6 only ---
    let src = PackedBitmap::from_bytes(5, 1, &[0b0001_1111]).expect("src");
    let dst = scale(&src, 3).expect("scale 3x");
    rp.compare_values(15.0, dst.width() as f64, 0.0);
    rp.compare_values(2.0, dst.bytes_per_row() as f64, 0.0);
    for row in 0..3 {
        rp.compare_strings(&[0xFF, 0x7F], dst.row_data(row));
    }
    rp.compare_values(45.0, dst.count_pixels() as f64, 0.0);

    // --- Small glyph against a hand-drawn expectation ---
    let src = bitmap_from_rows(&["#.", ".#", "##"])
        .expect("rows")
        .with_hot_spot(1, 2);
    let expected = bitmap_from_rows(&[
        "##..", "##..", //
        "..##", "..##", //
        "####", "####",
    ])
    .expect("rows")
    .with_hot_spot(2, 4);
    let opts = ScaleOptions::new("diagonal").verbose(true);
    let dst = scale_with_options(&src, 2, &opts).expect("scale 2x");
    rp.compare_bitmaps(&expected, &dst);

    assert!(rp.cleanup(), "scale scenarios regression test failed");
}

#[test_log::test]
fn scale_range_reg() {
    let mut rp = RegParams::new("scale_range");
    let src = random_bitmap(16, 16, 99).expect("random bitmap");

    for factor in [0u32, 5, 6, 100, u32::MAX] {
        let err = scale(&src, factor).expect_err("factor must be rejected");
        rp.compare_values(
            1.0,
            flag(err == ScaleError::InvalidFactor(factor)),
            0.0,
        );
        rp.compare_values(0.0, flag(err.is_retryable_at_lower_factor()), 0.0);
    }
    // The source is still intact and unshared
    rp.compare_values(1.0, src.ref_count() as f64, 0.0);
    rp.compare_values(1.0, flag(src.has_clean_padding()), 0.0);

    assert!(rp.cleanup(), "scale range regression test failed");
}
