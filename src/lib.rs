//! # oplart
//!
//! Batch-converts arbitrary raster images into the fixed set of PNG art
//! assets OPL Manager expects (cover, spine, back cover, screenshot,
//! background, disc icon, logo), each at an exact pixel size. Sources are
//! letterboxed onto an opaque black canvas (or stretched, on request) and
//! always come out as 3-channel PNG.
//!
//! # Architecture: Gate → Engine
//!
//! Two strictly layered components:
//!
//! ```text
//! 1. Format gate   path      →  supported?        (extension allow-list)
//! 2. Engine        requests  →  PNGs + outcomes   (fit, composite, name, write)
//! ```
//!
//! The gate is a pure leaf; the engine never decodes a file the gate
//! rejected. Everything around them (input collection, history ledger,
//! display) is CLI plumbing that consumes the engine's per-file outcomes.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`formats`] | Format gate: extension allow-list, no content sniffing |
//! | [`assets`] | `AssetKind` and the fixed dimension table |
//! | [`imaging`] | Pixel work: fit math, backend trait, `image`-crate backend |
//! | [`engine`] | Per-file conversion, batch loop, error taxonomy, progress events |
//! | [`naming`] | Collision-free `{stem}_{kind}.png` output naming |
//! | [`scan`] | CLI input collection: expands directories into flat path lists |
//! | [`history`] | Pipe-delimited per-batch ledger (CLI layer) |
//! | [`output`] | CLI display: pure `format_*` functions + `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Exact Dimensions, Always
//!
//! Every successful output has exactly the table's dimensions for its kind,
//! regardless of input aspect ratio or fit mode. Letterbox padding is opaque
//! black; alpha in the source is discarded, never composited.
//!
//! ## Sequential Core
//!
//! A batch is a plain loop. Output naming checks the real directory before
//! each write, which is a read-then-write sequence, so one batch per output
//! directory at a time, and nothing in the engine spawns threads. The CLI's
//! only concurrency is a printer thread draining progress events.
//!
//! ## Per-File Failure Containment
//!
//! Any single input's failure (unsupported extension, corrupt data, a write
//! error) becomes a tagged outcome for that file and the batch moves on.
//! The engine's public surface never panics and never aborts a batch.

pub mod assets;
pub mod engine;
pub mod formats;
pub mod history;
pub mod imaging;
pub mod naming;
pub mod output;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
