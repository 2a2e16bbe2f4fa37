//! Input collection for the CLI.
//!
//! The engine takes a flat list of file paths; this module produces that list
//! from the CLI's mixed file-and-directory arguments. Directories are walked
//! recursively and silently filtered through the format gate (an `images/`
//! folder full of sidecar `.txt` files should not flood the report with
//! failures). Explicitly named files pass through unfiltered so an
//! unsupported file the user asked for by name shows up as a visible
//! per-file failure instead of vanishing.

use crate::formats;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("input not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Expand `args` into the ordered input list for a batch.
///
/// Arguments keep their given order; each directory expands in place to its
/// supported files, sorted by path for run-to-run determinism.
pub fn collect_inputs(args: &[PathBuf]) -> Result<Vec<PathBuf>, ScanError> {
    let mut inputs = Vec::new();

    for arg in args {
        if arg.is_dir() {
            inputs.extend(walk_directory(arg)?);
        } else if arg.is_file() {
            inputs.push(arg.clone());
        } else {
            return Err(ScanError::NotFound(arg.clone()));
        }
    }

    Ok(inputs)
}

fn walk_directory(dir: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut found = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(io::Error::from)?;
        if entry.file_type().is_file() && formats::is_supported(entry.path()) {
            found.push(entry.into_path());
        }
    }
    found.sort();
    Ok(found)
}
