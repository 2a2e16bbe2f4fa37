//! Image conversion, pure Rust, zero external dependencies.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image` crate (JPEG, PNG, BMP, WebP, TIFF, GIF) |
//! | **Fit math** | [`calculations`] (pure, no I/O) |
//! | **Resize** | Lanczos3 |
//! | **Encode** | PNG, 3-channel, always opaque |
//!
//! The module is split into:
//! - **Calculations**: pure functions for letterbox dimension math
//! - **Parameters**: data structures describing a conversion
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
pub mod calculations;
mod params;
pub mod rust_backend;

pub use backend::{BackendError, ImageBackend};
pub use calculations::{center_offsets, fit_within};
pub use params::{ConvertParams, FitMode};
pub use rust_backend::RustBackend;
