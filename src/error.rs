use std::path::PathBuf;
use thiserror::Error;

use crate::raster::Color;

/// The main error type for pixmark operations.
#[derive(Debug, Error)]
pub enum PixmarkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Invalid image: {0}")]
    InvalidImage(String),

    #[error("Image has {found} color(s); exactly 2 are required")]
    UnsupportedColorCount { found: usize },

    #[error("Unexpected color {color} at ({x}, {y}); it is neither the filled nor the blank color")]
    UnexpectedColor { color: Color, x: u32, y: u32 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to write JSON report: {0}")]
    ReportWrite(#[from] serde_json::Error),

    #[error("Aborted: output was not confirmed")]
    Aborted,
}
