//! Shared test fixtures: synthetic images written into temp directories.
//!
//! Everything here encodes through the same `image` crate the production
//! backend decodes with, so the fixtures stay valid without binary blobs in
//! the repository.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::Path;

/// Write a single-color RGB PNG.
pub fn write_solid_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    img.save(path).unwrap();
}

/// Write a single-color RGBA PNG, alpha included.
pub fn write_rgba_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    let img = RgbaImage::from_pixel(width, height, Rgba(color));
    img.save(path).unwrap();
}

/// Write an RGB JPEG with a per-pixel gradient, so resized output is
/// visually plausible rather than a flat field.
pub fn write_gradient_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, ExtendedColorType::Rgb8)
        .unwrap();
}
