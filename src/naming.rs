//! Output naming policy.
//!
//! Every output is named `{stem}_{kind}.png` after its input's file stem.
//! When that name is already taken in the output directory, an incrementing
//! integer suffix is appended (`_1`, `_2`, ...) until a free name is found,
//! always the lowest unused integer.
//!
//! The existence check runs against the real directory contents at call time,
//! not batch-local bookkeeping, so repeated runs into a persistent output
//! directory keep allocating fresh names instead of overwriting earlier
//! results.

use crate::assets::AssetKind;
use std::path::{Path, PathBuf};

/// Pick a collision-free output path for `input` converted to `kind`.
pub fn output_path(input: &Path, output_dir: &Path, kind: AssetKind) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = format!("{stem}_{kind}");

    let mut candidate = output_dir.join(format!("{base}.png"));
    let mut counter: u64 = 1;
    while candidate.exists() {
        candidate = output_dir.join(format!("{base}_{counter}.png"));
        counter += 1;
    }
    candidate
}
