//! Plain-text preview of the classified grid.
//!
//! Printed before conversion so the filled/blank assignment can be checked
//! in a terminal, where the Markdown output itself would not line up.

use crate::error::PixmarkError;
use crate::palette::Palette;
use crate::raster::Raster;

/// Options for the ASCII preview.
#[derive(Clone, Debug)]
pub struct PreviewOptions {
    /// Characters per cell.
    pub block_width: usize,
    /// Character drawn for filled cells.
    pub filled_char: char,
    /// Character drawn for blank cells.
    pub blank_char: char,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            block_width: 2,
            filled_char: '#',
            blank_char: ' ',
        }
    }
}

/// Draws the image as ASCII art, one line per row.
pub fn ascii_art<R: Raster + ?Sized>(
    raster: &R,
    palette: &Palette,
    opts: &PreviewOptions,
) -> Result<String, PixmarkError> {
    let cell_len = opts.block_width.max(1);
    let mut out =
        String::with_capacity((raster.width() as usize * cell_len + 1) * raster.height() as usize);

    for y in 0..raster.height() {
        for x in 0..raster.width() {
            let ch = if palette.is_filled(raster, x, y)? {
                opts.filled_char
            } else {
                opts.blank_char
            };
            out.extend(std::iter::repeat(ch).take(cell_len));
        }
        out.push('\n');
    }

    Ok(out)
}
