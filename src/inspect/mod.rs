//! Image inspection.
//!
//! Summarizes what pixmark sees in an image before any conversion: its
//! dimensions, its color histogram and, for two-color images, which color
//! would be drawn as filled.

mod report;

pub use report::{InspectReport, PaletteSection};

use crate::palette::Palette;
use crate::raster::Raster;
use crate::render::FormattingConfig;

/// Options for image inspection.
#[derive(Clone, Debug, Default)]
pub struct InspectOptions {
    /// Swap the filled/blank assignment.
    pub invert: bool,
    /// Formatting used to estimate the rendered width.
    pub formatting: FormattingConfig,
}

/// Inspect an image and produce a report.
pub fn inspect_image<R: Raster + ?Sized>(raster: &R, opts: &InspectOptions) -> InspectReport {
    let colors = raster.colors();
    let distinct: Vec<_> = colors.iter().map(|c| c.color).collect();

    // Only two-color images get an assignment
    let palette = Palette::from_colors(&distinct, opts.invert)
        .ok()
        .map(|palette| PaletteSection {
            filled: palette.filled,
            blank: palette.blank,
            inverted: opts.invert,
        });

    InspectReport {
        width: raster.width(),
        height: raster.height(),
        pixels: raster.width() as u64 * raster.height() as u64,
        colors,
        palette,
        rendered_width_px: opts.formatting.monospace_block_width_px() * raster.width() as f64,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::{Color, ColorCount, PixelGrid};

    #[test]
    fn test_two_color_image_has_palette() {
        let grid =
            PixelGrid::from_rows(vec![vec![Color::WHITE, Color::BLACK, Color::WHITE]]).unwrap();
        let report = inspect_image(&grid, &InspectOptions::default());

        assert_eq!((report.width, report.height, report.pixels), (3, 1, 3));
        assert_eq!(
            report.colors[0],
            ColorCount {
                color: Color::WHITE,
                count: 2
            }
        );
        let palette = report.palette.unwrap();
        assert_eq!(palette.filled, Color::BLACK);
        assert_eq!(report.rendered_width_px, 90.0);
    }

    #[test]
    fn test_three_color_image_has_no_palette() {
        let grid = PixelGrid::from_rows(vec![vec![
            Color::WHITE,
            Color::BLACK,
            Color::new(3, 3, 3),
        ]])
        .unwrap();
        let report = inspect_image(&grid, &InspectOptions::default());

        assert_eq!(report.colors.len(), 3);
        assert!(report.palette.is_none());
    }

    #[test]
    fn test_inverted_palette_section() {
        let grid = PixelGrid::from_rows(vec![vec![Color::WHITE, Color::BLACK]]).unwrap();
        let opts = InspectOptions {
            invert: true,
            ..Default::default()
        };
        let palette = inspect_image(&grid, &opts).palette.unwrap();
        assert_eq!(palette.filled, Color::WHITE);
        assert!(palette.inverted);
    }
}
