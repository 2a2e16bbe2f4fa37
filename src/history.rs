//! Conversion history ledger.
//!
//! A pipe-delimited text file with one record per completed batch:
//!
//! ```text
//! 20260806_153012|06/08/2026 15:30|cover|12|11|/home/user/OPL_Images
//! ```
//!
//! Fields in order: batch timestamp id, human-readable date, asset kind,
//! total file count, success count, output directory. The file is loaded
//! fully into memory at startup and rewritten on each append. Malformed
//! lines are skipped on load, never fatal; a damaged ledger costs old
//! entries, not the ability to convert.
//!
//! This lives in the CLI layer; the engine neither reads nor writes it.

use crate::assets::AssetKind;
use chrono::Local;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One completed batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HistoryEntry {
    /// Sortable batch id, `%Y%m%d_%H%M%S`.
    pub id: String,
    /// Display date, `%d/%m/%Y %H:%M`.
    pub date: String,
    pub kind: String,
    pub total: usize,
    pub success: usize,
    pub directory: PathBuf,
}

impl HistoryEntry {
    /// Build an entry for a batch that just finished, stamped with the local
    /// wall clock.
    pub fn now(kind: AssetKind, total: usize, success: usize, directory: &Path) -> Self {
        let now = Local::now();
        Self {
            id: now.format("%Y%m%d_%H%M%S").to_string(),
            date: now.format("%d/%m/%Y %H:%M").to_string(),
            kind: kind.to_string(),
            total,
            success,
            directory: directory.to_path_buf(),
        }
    }

    fn to_line(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}",
            self.id,
            self.date,
            self.kind,
            self.total,
            self.success,
            self.directory.display()
        )
    }

    /// Parse one ledger line; `None` for anything malformed.
    ///
    /// The directory is the final field and may itself contain pipes, so the
    /// split is capped at six parts.
    fn parse_line(line: &str) -> Option<Self> {
        let parts: Vec<&str> = line.splitn(6, '|').collect();
        if parts.len() != 6 {
            return None;
        }
        Some(Self {
            id: parts[0].to_string(),
            date: parts[1].to_string(),
            kind: parts[2].to_string(),
            total: parts[3].parse().ok()?,
            success: parts[4].parse().ok()?,
            directory: PathBuf::from(parts[5]),
        })
    }
}

/// The ledger file plus its in-memory entries, oldest first.
#[derive(Debug)]
pub struct History {
    path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl History {
    /// Default ledger location, `~/.oplart_history.txt`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".oplart_history.txt"))
    }

    /// Load the ledger at `path`. A missing file is an empty history;
    /// unparseable lines are dropped.
    pub fn load(path: &Path) -> io::Result<Self> {
        let entries = match fs::read_to_string(path) {
            Ok(content) => content
                .lines()
                .filter(|line| !line.trim().is_empty())
                .filter_map(HistoryEntry::parse_line)
                .collect(),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(err) => return Err(err),
        };
        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    /// Entries oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Append an entry and rewrite the ledger file.
    pub fn append(&mut self, entry: HistoryEntry) -> io::Result<()> {
        self.entries.push(entry);
        let mut content = String::new();
        for entry in &self.entries {
            content.push_str(&entry.to_line());
            content.push('\n');
        }
        fs::write(&self.path, content)
    }
}
