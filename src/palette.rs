//! Filled/blank color assignment for two-color images.
//!
//! A [`Palette`] can only be built from exactly two distinct colors. The
//! darker one (smaller channel sum) is *filled* and the lighter one *blank*,
//! matching the intuition that dark pixels are ink; `invert` swaps them.
//!
//! Pixel classification is checked lazily: a pixel whose color is neither
//! registered color fails with [`PixmarkError::UnexpectedColor`] at the
//! point it is visited. [`Palette::verify`] runs the same check eagerly.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::error::PixmarkError;
use crate::raster::{Color, Raster};

/// The two colors of an image and which one represents a filled cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    /// Color drawn as a monospace block.
    pub filled: Color,
    /// Color drawn as spacing.
    pub blank: Color,
}

impl Palette {
    /// Assigns filled and blank from a set of distinct colors.
    ///
    /// Duplicates in `colors` are ignored. Fails with
    /// [`PixmarkError::UnsupportedColorCount`] unless exactly two distinct
    /// colors remain.
    pub fn from_colors(colors: &[Color], invert: bool) -> Result<Self, PixmarkError> {
        // BTreeSet iterates in weight order
        let distinct: Vec<Color> = colors
            .iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let palette = match distinct.as_slice() {
            [darker, lighter] => Self {
                filled: *darker,
                blank: *lighter,
            },
            other => {
                return Err(PixmarkError::UnsupportedColorCount { found: other.len() });
            }
        };
        Ok(if invert { palette.inverted() } else { palette })
    }

    /// Builds the palette from a raster's color histogram.
    pub fn detect<R: Raster + ?Sized>(raster: &R, invert: bool) -> Result<Self, PixmarkError> {
        let colors: Vec<Color> = raster.colors().into_iter().map(|c| c.color).collect();
        let palette = Self::from_colors(&colors, invert)?;
        log::debug!(
            "palette: filled={} blank={} (invert={})",
            palette.filled,
            palette.blank,
            invert
        );
        Ok(palette)
    }

    /// Returns the palette with filled and blank swapped.
    pub fn inverted(self) -> Self {
        Self {
            filled: self.blank,
            blank: self.filled,
        }
    }

    /// Classifies a color: `Some(true)` for filled, `Some(false)` for blank,
    /// `None` for anything else.
    #[inline]
    pub fn classify(&self, color: Color) -> Option<bool> {
        if color == self.filled {
            Some(true)
        } else if color == self.blank {
            Some(false)
        } else {
            None
        }
    }

    /// Whether the pixel at `(x, y)` is filled.
    pub fn is_filled<R: Raster + ?Sized>(
        &self,
        raster: &R,
        x: u32,
        y: u32,
    ) -> Result<bool, PixmarkError> {
        let color = raster.pixel(x, y);
        self.classify(color)
            .ok_or(PixmarkError::UnexpectedColor { color, x, y })
    }

    /// Checks every pixel up front, reporting the first unexpected one in
    /// scan order.
    pub fn verify<R: Raster + ?Sized>(&self, raster: &R) -> Result<(), PixmarkError> {
        log::debug!("checking image for colors we don't expect");
        for y in 0..raster.height() {
            for x in 0..raster.width() {
                self.is_filled(raster, x, y)?;
            }
        }
        Ok(())
    }
}
