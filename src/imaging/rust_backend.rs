//! Pure Rust conversion backend, zero external dependencies.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, BMP, WebP, TIFF, GIF) | `image` crate (pure Rust decoders) |
//! | Force 3-channel | `DynamicImage::to_rgb8` (alpha/palette dropped) |
//! | Resize | `image::imageops::resize` with `Lanczos3` |
//! | Letterbox composite | `image::imageops::replace` onto a black `RgbImage` |
//! | Encode → PNG | `save_with_format(.., ImageFormat::Png)` |

use super::backend::{BackendError, ImageBackend};
use super::calculations::{center_offsets, fit_within};
use super::params::{ConvertParams, FitMode};
use image::imageops::{self, FilterType};
use image::{ImageFormat, ImageReader, Rgb, RgbImage};
use std::path::Path;

/// Production backend built on the `image` crate ecosystem.
///
/// See the [module docs](self) for the crate-to-operation mapping.
pub struct RustBackend;

impl RustBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RustBackend {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image from disk and force it to 3-channel RGB.
///
/// Alpha and palette channels are dropped outright: opaque pixels survive
/// losslessly, transparency information does not. Both open and decode
/// failures surface as [`BackendError::Decode`] with the underlying message
/// kept for display.
fn load_rgb(path: &Path) -> Result<RgbImage, BackendError> {
    let img = ImageReader::open(path)
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?
        .decode()
        .map_err(|e| BackendError::Decode(format!("{}: {}", path.display(), e)))?;
    Ok(img.to_rgb8())
}

/// Encode as PNG regardless of the output path's extension.
fn save_png(img: &RgbImage, path: &Path) -> Result<(), BackendError> {
    img.save_with_format(path, ImageFormat::Png)
        .map_err(|e| BackendError::Write(format!("{}: {}", path.display(), e)))
}

impl ImageBackend for RustBackend {
    fn convert(&self, params: &ConvertParams) -> Result<(), BackendError> {
        let src = load_rgb(&params.source)?;
        let target = (params.width, params.height);

        let canvas = match params.fit {
            FitMode::Stretch => {
                imageops::resize(&src, params.width, params.height, FilterType::Lanczos3)
            }
            FitMode::Letterbox => {
                let inner = fit_within((src.width(), src.height()), target);
                let scaled = imageops::resize(&src, inner.0, inner.1, FilterType::Lanczos3);
                let (left, top) = center_offsets(inner, target);

                let mut canvas =
                    RgbImage::from_pixel(params.width, params.height, Rgb([0, 0, 0]));
                // Opaque overwrite, no blending
                imageops::replace(&mut canvas, &scaled, i64::from(left), i64::from(top));
                canvas
            }
        };

        save_png(&canvas, &params.output)
    }
}
