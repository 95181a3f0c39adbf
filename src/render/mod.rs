//! Markdown rendering of a filled/blank cell grid.
//!
//! Every source pixel becomes one cell of an imaginary monospace grid. A
//! filled cell is an inline code span (`` `##` `` by default), which a
//! Markdown renderer draws at a fixed width. A blank cell is a run of
//! non-breaking spaces in the surrounding proportional font, sized by
//! [`RowWriter`] so that the next filled cell lands where it would in a fully
//! monospace row.
//!
//! Each row ends in two spaces and a newline, the Markdown hard line break.
//!
//! # Example
//!
//! ```
//! use pixmark::render::{render, FormattingConfig};
//!
//! // A 2x1 image: filled, then blank
//! let out = render(2, 1, |x, _y| Ok(x == 0), &FormattingConfig::default()).unwrap();
//! assert_eq!(out.markdown, format!("`##`{}  \n", "\u{a0}".repeat(6)));
//! ```

mod report;
mod row;

pub use report::RenderStats;
pub use row::{count_code_spans, RowStats, RowWriter};

use crate::error::PixmarkError;
use crate::palette::Palette;
use crate::raster::Raster;

/// Spacer used for blank cells. Renderers neither collapse nor wrap on it.
pub const NBSP: char = '\u{a0}';

/// Inline code delimiter around each filled cell.
pub const CODE_DELIMITER: char = '`';

/// Markdown hard line break terminating every row.
pub const LINE_BREAK: &str = "  \n";

pub const DEFAULT_BLOCK_CHAR: char = '#';
pub const DEFAULT_BLOCK_WIDTH: u32 = 2;

/// Widest cell accepted. Past 2 the grid already looks stretched.
pub const MAX_BLOCK_WIDTH: u32 = 16;

/// Rendered width of one space in the proportional font.
pub const DEFAULT_SPACE_CHAR_WIDTH_PX: f64 = 5.0;

/// Rendered width of one character inside a code span.
pub const DEFAULT_CHAR_WIDTH_PX: f64 = 8.0;

/// Padding a code span adds around its content, 7px on each side.
pub const DEFAULT_CONTAINER_OVERHEAD_PX: f64 = 14.0;

/// Formatting parameters for a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct FormattingConfig {
    /// Character repeated inside each code span.
    pub block_char: char,
    /// Number of `block_char`s per cell.
    pub block_width: u32,
    /// Rendered width of a non-breaking space, in px.
    pub space_char_width_px: f64,
    /// Rendered width of one monospace character, in px.
    pub char_width_px: f64,
    /// Fixed padding of a code span, in px.
    pub container_overhead_px: f64,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            block_char: DEFAULT_BLOCK_CHAR,
            block_width: DEFAULT_BLOCK_WIDTH,
            space_char_width_px: DEFAULT_SPACE_CHAR_WIDTH_PX,
            char_width_px: DEFAULT_CHAR_WIDTH_PX,
            container_overhead_px: DEFAULT_CONTAINER_OVERHEAD_PX,
        }
    }
}

impl FormattingConfig {
    /// Rendered width of one filled cell, which is also the width every cell
    /// should occupy.
    pub fn monospace_block_width_px(&self) -> f64 {
        self.container_overhead_px + self.char_width_px * self.block_width as f64
    }

    /// The code span written for a filled cell.
    pub fn code_span(&self) -> String {
        let mut span = String::with_capacity(self.block_width as usize + 2);
        span.push(CODE_DELIMITER);
        span.extend(std::iter::repeat(self.block_char).take(self.block_width as usize));
        span.push(CODE_DELIMITER);
        span
    }

    /// Parses a block character given as text, which must be exactly one
    /// character long.
    pub fn parse_block_char(s: &str) -> Result<char, PixmarkError> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(PixmarkError::InvalidConfiguration(format!(
                "block character must be exactly one character, got '{}' ({} characters)",
                s,
                s.chars().count()
            ))),
        }
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<(), PixmarkError> {
        if self.block_char == CODE_DELIMITER || self.block_char.is_control() {
            return Err(PixmarkError::InvalidConfiguration(format!(
                "block character {:?} cannot appear inside a code span",
                self.block_char
            )));
        }

        if self.block_width == 0 {
            return Err(PixmarkError::InvalidConfiguration(
                "block width must be positive".to_string(),
            ));
        }

        if self.block_width > MAX_BLOCK_WIDTH {
            return Err(PixmarkError::InvalidConfiguration(format!(
                "block width must be at most {}, got {}",
                MAX_BLOCK_WIDTH, self.block_width
            )));
        }

        for (name, value) in [
            ("space character width", self.space_char_width_px),
            ("character width", self.char_width_px),
            ("container overhead", self.container_overhead_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PixmarkError::InvalidConfiguration(format!(
                    "{} must be a positive number of pixels, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}

/// Output of a render pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Rendering {
    /// The Markdown document, one line per image row.
    pub markdown: String,
    /// Totals over the whole render.
    pub stats: RenderStats,
}

/// Renders a `width` x `height` grid of cells.
///
/// `is_filled(x, y)` is called once per cell in row-major order starting at
/// the top-left. The first error it returns aborts the render and nothing is
/// returned.
pub fn render<F>(
    width: u32,
    height: u32,
    mut is_filled: F,
    config: &FormattingConfig,
) -> Result<Rendering, PixmarkError>
where
    F: FnMut(u32, u32) -> Result<bool, PixmarkError>,
{
    config.validate()?;

    if width == 0 || height == 0 {
        return Err(PixmarkError::InvalidImage(format!(
            "dimensions {}x{} (must be positive)",
            width, height
        )));
    }

    log::debug!(
        "rendering {}x{} cells, {}px per block, {}px per space",
        width,
        height,
        config.monospace_block_width_px(),
        config.space_char_width_px
    );

    let mut markdown = String::new();
    let mut stats = RenderStats::default();

    for y in 0..height {
        let mut row = RowWriter::new(config);
        for x in 0..width {
            row.push(is_filled(x, y)?);
        }

        let (line, row_stats) = row.finish();
        log::debug!(
            "row {}: {} filled, {} blank, {} nbsp, drift {:.1}px",
            y,
            row_stats.filled_cells,
            row_stats.blank_cells,
            row_stats.nbsp_count,
            row_stats.max_drift_px
        );

        markdown.push_str(&line);
        stats.add_row(&row_stats);
    }

    Ok(Rendering { markdown, stats })
}

/// Renders a two-color image using `palette` to classify its pixels.
///
/// A pixel matching neither palette color fails the render with
/// [`PixmarkError::UnexpectedColor`].
pub fn render_image<R: Raster + ?Sized>(
    raster: &R,
    palette: &Palette,
    config: &FormattingConfig,
) -> Result<Rendering, PixmarkError> {
    render(
        raster.width(),
        raster.height(),
        |x, y| palette.is_filled(raster, x, y),
        config,
    )
}
