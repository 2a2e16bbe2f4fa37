//! Format gate: decides which input files the converter will attempt to decode.
//!
//! Support is determined purely from the file name's extension, compared
//! case-insensitively against a fixed allow-list. File contents are never
//! inspected here; a file with a lying extension is admitted by the gate and
//! fails later, at decode time, with a per-file error.

use std::path::Path;

/// Input extensions the converter accepts, lowercase.
///
/// These match the decoders compiled into the `image` crate via this crate's
/// feature selection; keep the two lists in sync.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "webp", "tiff", "gif"];

/// Returns `true` when `path` names a supported raster-image format.
///
/// Pure and infallible: a missing, non-UTF-8, or unknown extension yields
/// `false`, never an error.
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}
