//! Asset kinds and the fixed dimension table.
//!
//! OPL Manager expects each art slot at an exact pixel size; the table below
//! is the authoritative mapping. It is process-wide constant data: there is
//! no runtime mutation and no configuration hook for it.
//!
//! | kind       | px      | slot                       |
//! |------------|---------|----------------------------|
//! | cover      | 140×200 | front cover art            |
//! | spine      | 18×240  | case spine                 |
//! | back-cover | 242×344 | back cover art             |
//! | screenshot | 250×168 | in-game screenshot         |
//! | background | 640×480 | full-screen background     |
//! | disc-icon  | 128×128 | disc label                 |
//! | logo       | 300×125 | game logo                  |

use clap::ValueEnum;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The seven art slots OPL Manager knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetKind {
    Cover,
    Spine,
    BackCover,
    Screenshot,
    Background,
    DiscIcon,
    Logo,
}

/// All kinds in display order (the order OPL Manager lists them).
pub const ALL_KINDS: &[AssetKind] = &[
    AssetKind::Cover,
    AssetKind::Spine,
    AssetKind::BackCover,
    AssetKind::Screenshot,
    AssetKind::Background,
    AssetKind::DiscIcon,
    AssetKind::Logo,
];

impl AssetKind {
    /// Exact output size in pixels, `(width, height)`.
    pub const fn dimensions(self) -> (u32, u32) {
        match self {
            AssetKind::Cover => (140, 200),
            AssetKind::Spine => (18, 240),
            AssetKind::BackCover => (242, 344),
            AssetKind::Screenshot => (250, 168),
            AssetKind::Background => (640, 480),
            AssetKind::DiscIcon => (128, 128),
            AssetKind::Logo => (300, 125),
        }
    }

    /// Stable kebab-case name, used in output filenames and the ledger.
    pub const fn name(self) -> &'static str {
        match self {
            AssetKind::Cover => "cover",
            AssetKind::Spine => "spine",
            AssetKind::BackCover => "back-cover",
            AssetKind::Screenshot => "screenshot",
            AssetKind::Background => "background",
            AssetKind::DiscIcon => "disc-icon",
            AssetKind::Logo => "logo",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string that names no entry in the dimension table.
///
/// With kinds modeled as an enum, a parse at the string boundary is the only
/// place an invalid asset type can exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown asset kind: {0}")]
pub struct UnknownAssetKind(pub String);

impl FromStr for AssetKind {
    type Err = UnknownAssetKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_KINDS
            .iter()
            .copied()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownAssetKind(s.to_string()))
    }
}

/// String-keyed lookup into the dimension table.
///
/// `None` for names that are not asset kinds; never panics.
pub fn dimensions_for(name: &str) -> Option<(u32, u32)> {
    name.parse::<AssetKind>().ok().map(AssetKind::dimensions)
}
