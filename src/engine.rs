//! Transform engine: per-file conversion and batch orchestration.
//!
//! The engine owns the error taxonomy and the batch loop. Pixel work is
//! delegated through the [`ImageBackend`](crate::imaging::ImageBackend) seam;
//! `*_with_backend` variants exist so tests can run the orchestration against
//! a recording mock.
//!
//! Every public entry point returns tagged per-file results: no error is
//! fatal to a batch, and nothing here panics on bad input. The batch loop is
//! deliberately sequential: the filename collision check in
//! [`naming`](crate::naming) reads the directory before writing to it, so at
//! most one batch may target a given output directory at a time.

use crate::assets::{AssetKind, UnknownAssetKind};
use crate::formats;
use crate::imaging::{BackendError, ConvertParams, FitMode, ImageBackend, RustBackend};
use crate::naming;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use thiserror::Error;

/// Why a single file failed to convert. All variants are recoverable at
/// single-file granularity.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("unsupported format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error(transparent)]
    InvalidAssetType(#[from] UnknownAssetKind),
    #[error("decode failed: {0}")]
    Decode(String),
    #[error("write failed: {0}")]
    Write(String),
}

impl From<BackendError> for ConvertError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Decode(msg) => ConvertError::Decode(msg),
            BackendError::Write(msg) => ConvertError::Write(msg),
        }
    }
}

/// Per-file batch result: the input it belongs to plus the written output
/// path or the error that stopped it.
#[derive(Debug)]
pub struct Outcome {
    pub input: PathBuf,
    pub result: Result<PathBuf, ConvertError>,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Output path on success, error text on failure; what a caller shows
    /// next to the input name.
    pub fn detail(&self) -> String {
        match &self.result {
            Ok(path) => path.display().to_string(),
            Err(err) => err.to_string(),
        }
    }
}

/// Progress event, sent once per processed input (success or failure).
///
/// A side-effect channel for display layers only; conversion results come
/// back in the returned [`Outcome`] list regardless.
#[derive(Debug, Clone)]
pub struct ConvertEvent {
    pub input: PathBuf,
    pub success: bool,
    pub detail: String,
}

/// Convert one image to `kind`'s exact dimensions, writing a PNG at `output`.
///
/// With `maintain_aspect` the source is letterboxed onto an opaque black
/// canvas; without it the source is stretched to fill. Either way the output
/// is exactly the dimension table's size for `kind`.
pub fn convert_resize(
    input: &Path,
    output: &Path,
    kind: AssetKind,
    maintain_aspect: bool,
) -> Result<PathBuf, ConvertError> {
    convert_resize_with_backend(&RustBackend::new(), input, output, kind, maintain_aspect)
}

/// [`convert_resize`] against a caller-chosen backend.
pub fn convert_resize_with_backend(
    backend: &impl ImageBackend,
    input: &Path,
    output: &Path,
    kind: AssetKind,
    maintain_aspect: bool,
) -> Result<PathBuf, ConvertError> {
    let (width, height) = kind.dimensions();
    let fit = if maintain_aspect {
        FitMode::Letterbox
    } else {
        FitMode::Stretch
    };

    backend.convert(&ConvertParams {
        source: input.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
        fit,
    })?;
    Ok(output.to_path_buf())
}

/// Convert a flat list of inputs into `output_dir`, one outcome per input,
/// in input order.
///
/// The directory is created if absent. Inputs the format gate rejects are
/// short-circuited to `UnsupportedFormat` without a decode attempt; every
/// other failure is contained to its own file. Pass `events` to receive one
/// [`ConvertEvent`] per processed input.
pub fn batch_process(
    inputs: &[PathBuf],
    output_dir: &Path,
    kind: AssetKind,
    maintain_aspect: bool,
    events: Option<mpsc::Sender<ConvertEvent>>,
) -> Vec<Outcome> {
    batch_process_with_backend(
        &RustBackend::new(),
        inputs,
        output_dir,
        kind,
        maintain_aspect,
        events,
    )
}

/// [`batch_process`] against a caller-chosen backend.
pub fn batch_process_with_backend(
    backend: &impl ImageBackend,
    inputs: &[PathBuf],
    output_dir: &Path,
    kind: AssetKind,
    maintain_aspect: bool,
    events: Option<mpsc::Sender<ConvertEvent>>,
) -> Vec<Outcome> {
    if let Err(err) = std::fs::create_dir_all(output_dir) {
        // The whole batch has nowhere to go; still report it per file
        return inputs
            .iter()
            .map(|input| {
                let outcome = Outcome {
                    input: input.clone(),
                    result: Err(ConvertError::Write(format!(
                        "{}: {}",
                        output_dir.display(),
                        err
                    ))),
                };
                notify(&events, &outcome);
                outcome
            })
            .collect();
    }

    inputs
        .iter()
        .map(|input| {
            let result = if !formats::is_supported(input) {
                Err(ConvertError::UnsupportedFormat(input.clone()))
            } else {
                let output = naming::output_path(input, output_dir, kind);
                convert_resize_with_backend(backend, input, &output, kind, maintain_aspect)
            };

            let outcome = Outcome {
                input: input.clone(),
                result,
            };
            notify(&events, &outcome);
            outcome
        })
        .collect()
}

/// Best-effort progress send; a hung-up receiver never fails the batch.
fn notify(events: &Option<mpsc::Sender<ConvertEvent>>, outcome: &Outcome) {
    if let Some(tx) = events {
        let _ = tx.send(ConvertEvent {
            input: outcome.input.clone(),
            success: outcome.is_success(),
            detail: outcome.detail(),
        });
    }
}
