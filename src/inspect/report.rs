//! Inspect report types and terminal formatting.

use serde::Serialize;
use std::fmt;

use crate::raster::{Color, ColorCount};

/// The result of inspecting an image.
#[derive(Clone, Debug, Serialize)]
pub struct InspectReport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Total pixel count.
    pub pixels: u64,
    /// Distinct colors, most frequent first.
    pub colors: Vec<ColorCount>,
    /// Filled/blank assignment, present only for two-color images.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteSection>,
    /// Rendered width of each output line, in px.
    pub rendered_width_px: f64,
}

/// Filled/blank assignment for a two-color image.
#[derive(Clone, Debug, Serialize)]
pub struct PaletteSection {
    pub filled: Color,
    pub blank: Color,
    pub inverted: bool,
}

impl InspectReport {
    /// Whether the image can be converted.
    pub fn is_convertible(&self) -> bool {
        self.palette.is_some()
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Image: {}x{} ({} pixels)", self.width, self.height, self.pixels)?;
        writeln!(f)?;

        writeln!(f, "Colors ({}):", self.colors.len())?;
        for entry in &self.colors {
            let pct = if self.pixels > 0 {
                entry.count as f64 * 100.0 / self.pixels as f64
            } else {
                0.0
            };
            writeln!(f, "  {}  {:>8}  {:>5.1}%", entry.color, entry.count, pct)?;
        }
        writeln!(f)?;

        match &self.palette {
            Some(p) => {
                writeln!(
                    f,
                    "Color for 'filled': {}  Color for 'blank': {}{}",
                    p.filled,
                    p.blank,
                    if p.inverted { "  (inverted)" } else { "" }
                )?;
                writeln!(f, "Rendered line width: {:.0}px", self.rendered_width_px)?;
            }
            None => {
                writeln!(
                    f,
                    "Not convertible: exactly 2 colors are required, found {}",
                    self.colors.len()
                )?;
            }
        }

        Ok(())
    }
}
