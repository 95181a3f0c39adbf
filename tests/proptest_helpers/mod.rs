#![allow(dead_code)]

use pixmark::raster::{Color, PixelGrid};
use pixmark::render::FormattingConfig;
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

/// Slack for comparing accumulated float widths.
pub const EPS_PX: f64 = 1e-6;

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// A filled/blank grid, `grid[y][x]`, at least 1x1.
pub fn arb_cells(max_width: usize, max_height: usize) -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1..=max_width, 1..=max_height).prop_flat_map(|(w, h)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), w), h)
    })
}

/// Formatting with arbitrary but valid metrics.
pub fn arb_config() -> impl Strategy<Value = FormattingConfig> {
    (
        prop::sample::select(vec!['#', '%', '@', 'X', '\u{a0}']),
        1u32..=4,
        1.0f64..12.0,
        2.0f64..12.0,
        0.5f64..20.0,
    )
        .prop_map(
            |(block_char, block_width, space, ch, container)| FormattingConfig {
                block_char,
                block_width,
                space_char_width_px: space,
                char_width_px: ch,
                container_overhead_px: container,
            },
        )
}

/// Two distinct colors.
pub fn arb_color_pair() -> impl Strategy<Value = (Color, Color)> {
    (any::<(u8, u8, u8)>(), any::<(u8, u8, u8)>())
        .prop_filter("colors must differ", |(a, b)| a != b)
        .prop_map(|(a, b)| (Color::from(a), Color::from(b)))
}

/// Paints a cell grid with black ink on white.
pub fn to_grid(cells: &[Vec<bool>]) -> PixelGrid {
    let rows = cells
        .iter()
        .map(|row| {
            row.iter()
                .map(|&filled| if filled { Color::BLACK } else { Color::WHITE })
                .collect()
        })
        .collect();
    PixelGrid::from_rows(rows).expect("non-empty rectangular grid")
}
