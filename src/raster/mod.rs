//! Decoded raster access.
//!
//! Everything downstream of decoding works through the [`Raster`] trait:
//! dimensions, a per-pixel color lookup and a histogram of distinct colors.
//! [`PixelGrid`] is the in-memory implementation produced from image files.
//!
//! Coordinates are `(x, y)` with the origin at the top-left corner; `x` grows
//! to the right and `y` grows downwards, matching row-major scan order.
//!
//! # Example
//!
//! ```
//! use pixmark::raster::{Color, PixelGrid, Raster};
//!
//! let grid = PixelGrid::from_rows(vec![
//!     vec![Color::BLACK, Color::WHITE],
//! ])
//! .unwrap();
//!
//! assert_eq!((grid.width(), grid.height()), (2, 1));
//! assert_eq!(grid.pixel(1, 0), Color::WHITE);
//! assert_eq!(grid.colors().len(), 2);
//! ```

mod color;

pub use color::{Color, ColorCount};

use std::collections::BTreeMap;
use std::path::Path;

use image::DynamicImage;

use crate::error::PixmarkError;

/// Read-only access to a decoded image.
pub trait Raster {
    /// Width in pixels (at least 1).
    fn width(&self) -> u32;

    /// Height in pixels (at least 1).
    fn height(&self) -> u32;

    /// Color of the pixel at `(x, y)`.
    ///
    /// Callers keep `x < width()` and `y < height()`.
    fn pixel(&self, x: u32, y: u32) -> Color;

    /// Distinct colors with their occurrence counts, most frequent first.
    ///
    /// The default scans every pixel. Implementations backed by palette
    /// metadata may answer from that instead, which is why classification
    /// still checks each pixel it visits.
    fn colors(&self) -> Vec<ColorCount> {
        let mut counts: BTreeMap<Color, usize> = BTreeMap::new();
        for y in 0..self.height() {
            for x in 0..self.width() {
                *counts.entry(self.pixel(x, y)).or_insert(0) += 1;
            }
        }
        sorted_histogram(counts)
    }
}

/// Orders histogram entries by count descending, then by color.
fn sorted_histogram(counts: BTreeMap<Color, usize>) -> Vec<ColorCount> {
    let mut entries: Vec<ColorCount> = counts
        .into_iter()
        .map(|(color, count)| ColorCount { color, count })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.color.cmp(&b.color)));
    entries
}

/// An owned, row-major grid of RGB pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl PixelGrid {
    /// Decodes an image file.
    ///
    /// Any format enabled on the `image` crate is accepted. Alpha channels
    /// are dropped.
    pub fn open(path: &Path) -> Result<Self, PixmarkError> {
        let img = image::open(path).map_err(|source| PixmarkError::ImageDecode {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_dynamic(&img)
    }

    /// Builds a grid from an already decoded image.
    pub fn from_dynamic(img: &DynamicImage) -> Result<Self, PixmarkError> {
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|px| Color::from(*px)).collect();
        Self::new(width, height, pixels)
    }

    /// Builds a grid from explicit rows, top row first.
    ///
    /// Every row must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self, PixmarkError> {
        let height = u32::try_from(rows.len())
            .map_err(|_| PixmarkError::InvalidImage("too many rows".to_string()))?;
        let width = rows.first().map_or(0, |row| row.len());

        if let Some((y, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(PixmarkError::InvalidImage(format!(
                "row {} has {} pixel(s), expected {}",
                y,
                row.len(),
                width
            )));
        }

        let width = u32::try_from(width)
            .map_err(|_| PixmarkError::InvalidImage("row too long".to_string()))?;
        Self::new(width, height, rows.into_iter().flatten().collect())
    }

    fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, PixmarkError> {
        if width == 0 || height == 0 {
            return Err(PixmarkError::InvalidImage(format!(
                "dimensions {}x{} (must be positive)",
                width, height
            )));
        }
        debug_assert_eq!(pixels.len(), width as usize * height as usize);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }
}

impl Raster for PixelGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    fn pixel(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }
}
