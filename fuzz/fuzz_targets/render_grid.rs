//! Fuzz target for the Markdown row renderer.
//!
//! The first bytes pick the grid width and formatting metrics; the remaining
//! bits are the cells. Checks for panics and for the line/drift invariants.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pixmark::render::{render, FormattingConfig};

fuzz_target!(|data: &[u8]| {
    let [w, bw, space, ch, container, cells @ ..] = data else {
        return;
    };
    if cells.is_empty() || cells.len() > 64 * 1024 {
        return;
    }

    let width = u32::from(*w % 64) + 1;
    let bits = cells.len() as u32 * 8;
    let height = (bits / width).max(1);

    let config = FormattingConfig {
        block_width: u32::from(*bw % 4) + 1,
        space_char_width_px: f64::from(*space % 16) + 1.0,
        char_width_px: f64::from(*ch % 16) + 1.0,
        container_overhead_px: f64::from(*container % 32) + 0.5,
        ..Default::default()
    };

    let is_filled = |x: u32, y: u32| {
        let bit = ((y * width + x) % bits) as usize;
        Ok(cells[bit / 8] & (1 << (bit % 8)) != 0)
    };

    let out = render(width, height, is_filled, &config).expect("valid config renders");
    assert_eq!(out.markdown.matches("  \n").count(), height as usize);
    assert_eq!(out.stats.rows, height as usize);
    assert!(out.stats.max_drift_px <= config.space_char_width_px / 2.0 + 1e-6);
});
