//! Parameter types for conversion operations.
//!
//! These structs describe *what* to do, not *how* to do it. They are the
//! interface between the [`engine`](crate::engine) (which decides which files
//! to convert and where outputs go) and the [`backend`](super::backend)
//! (which does the actual pixel work), so a backend can be swapped for a mock
//! in tests without touching batch logic.

use std::path::PathBuf;

/// How the decoded source is mapped onto the fixed-size canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Aspect-preserving scale, centered on an opaque black canvas.
    Letterbox,
    /// Direct resize to the canvas size, ignoring aspect ratio. May distort.
    Stretch,
}

/// Full specification for one conversion: decode `source`, fit it onto a
/// `width`×`height` canvas per `fit`, encode as an opaque PNG at `output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertParams {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Exact output canvas size; the written PNG is never any other size.
    pub width: u32,
    pub height: u32,
    pub fit: FitMode,
}
