#![allow(dead_code)]

use std::fs;
use std::path::Path;

use pixmark::raster::Color;

pub const B: Color = Color::BLACK;
pub const W: Color = Color::WHITE;

/// Encodes rows of pixels (top row first) as a 24-bit uncompressed BMP.
pub fn bmp_bytes(rows: &[Vec<Color>]) -> Vec<u8> {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.len()) as u32;
    let row_stride = (width * 3).div_ceil(4) * 4;
    let pixel_array_size = row_stride * height;
    let file_size = 54 + pixel_array_size;

    let mut bytes = Vec::with_capacity(file_size as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_size.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&54u32.to_le_bytes());

    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_array_size.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&2835u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    // Positive height means rows are stored bottom-up, each pixel as BGR
    for row in rows.iter().rev() {
        let start = bytes.len();
        for px in row {
            bytes.extend_from_slice(&[px.b, px.g, px.r]);
        }
        bytes.resize(start + row_stride as usize, 0);
    }

    bytes
}

pub fn write_bmp(path: &Path, rows: &[Vec<Color>]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, bmp_bytes(rows)).expect("write bmp file");
}

/// Writes rows of pixels as a PNG using the image crate.
pub fn write_png(path: &Path, rows: &[Vec<Color>]) {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.len()) as u32;
    let img = image::RgbImage::from_fn(width, height, |x, y| {
        let px = rows[y as usize][x as usize];
        image::Rgb([px.r, px.g, px.b])
    });
    img.save(path).expect("write png file");
}

pub fn nbsp(n: usize) -> String {
    "\u{a0}".repeat(n)
}
