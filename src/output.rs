//! CLI output formatting.
//!
//! Each display has a pure `format_*` function (returns lines, no I/O) and a
//! `print_*` wrapper, so tests assert on strings and the binary stays thin.
//! Progress and summary lines go to stderr; stdout is reserved for output
//! that is itself the result: the kinds table, the history listing, and the
//! `--json` report.

use crate::assets::{ALL_KINDS, AssetKind};
use crate::engine::{ConvertEvent, Outcome};
use crate::history::HistoryEntry;
use serde::Serialize;
use std::path::{Path, PathBuf};

// ============================================================================
// Batch progress and summary
// ============================================================================

/// One line per processed input.
///
/// ```text
///   ok    dawn.jpg -> /out/dawn_cover.png
///   fail  notes.txt: unsupported format: notes.txt
/// ```
pub fn format_event(event: &ConvertEvent) -> String {
    let name = event
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| event.input.display().to_string());

    if event.success {
        format!("  ok    {} -> {}", name, event.detail)
    } else {
        format!("  fail  {}: {}", name, event.detail)
    }
}

pub fn print_event(event: &ConvertEvent) {
    eprintln!("{}", format_event(event));
}

/// Closing summary for a batch.
pub fn format_summary(outcomes: &[Outcome], output_dir: &Path) -> String {
    let success = outcomes.iter().filter(|o| o.is_success()).count();
    format!(
        "{} of {} images converted into {}",
        success,
        outcomes.len(),
        output_dir.display()
    )
}

pub fn print_summary(outcomes: &[Outcome], output_dir: &Path) {
    eprintln!("{}", format_summary(outcomes, output_dir));
}

// ============================================================================
// Kinds table
// ============================================================================

/// The dimension table, one kind per line.
pub fn format_kinds() -> Vec<String> {
    ALL_KINDS
        .iter()
        .map(|kind| {
            let (w, h) = kind.dimensions();
            format!("{:<12} {}x{} px", kind.name(), w, h)
        })
        .collect()
}

pub fn print_kinds() {
    for line in format_kinds() {
        println!("{line}");
    }
}

// ============================================================================
// History listing
// ============================================================================

/// The ledger, most recent batch first.
pub fn format_history(entries: &[HistoryEntry]) -> Vec<String> {
    if entries.is_empty() {
        return vec!["no conversions recorded yet".to_string()];
    }
    entries
        .iter()
        .rev()
        .map(|entry| {
            format!(
                "{}  {:<12} {:>3}/{:<3}  {}",
                entry.date,
                entry.kind,
                entry.success,
                entry.total,
                entry.directory.display()
            )
        })
        .collect()
}

pub fn print_history(entries: &[HistoryEntry]) {
    for line in format_history(entries) {
        println!("{line}");
    }
}

// ============================================================================
// JSON report
// ============================================================================

/// Machine-readable batch report for `--json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub kind: AssetKind,
    pub output_dir: PathBuf,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub files: Vec<FileReport>,
}

#[derive(Debug, Serialize)]
pub struct FileReport {
    pub input: PathBuf,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Report {
    pub fn new(kind: AssetKind, output_dir: &Path, outcomes: &[Outcome]) -> Self {
        let files: Vec<FileReport> = outcomes
            .iter()
            .map(|outcome| match &outcome.result {
                Ok(path) => FileReport {
                    input: outcome.input.clone(),
                    success: true,
                    output: Some(path.clone()),
                    error: None,
                },
                Err(err) => FileReport {
                    input: outcome.input.clone(),
                    success: false,
                    output: None,
                    error: Some(err.to_string()),
                },
            })
            .collect();
        let succeeded = files.iter().filter(|f| f.success).count();

        Self {
            kind,
            output_dir: output_dir.to_path_buf(),
            total: files.len(),
            succeeded,
            failed: files.len() - succeeded,
            files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ConvertError;

    fn success(input: &str, output: &str) -> Outcome {
        Outcome {
            input: PathBuf::from(input),
            result: Ok(PathBuf::from(output)),
        }
    }

    fn failure(input: &str, err: ConvertError) -> Outcome {
        Outcome {
            input: PathBuf::from(input),
            result: Err(err),
        }
    }

    #[test]
    fn event_lines_lead_with_the_file_name() {
        let ok = ConvertEvent {
            input: PathBuf::from("/somewhere/dawn.jpg"),
            success: true,
            detail: "/out/dawn_cover.png".to_string(),
        };
        assert_eq!(format_event(&ok), "  ok    dawn.jpg -> /out/dawn_cover.png");

        let fail = ConvertEvent {
            input: PathBuf::from("/somewhere/notes.txt"),
            success: false,
            detail: "unsupported format: /somewhere/notes.txt".to_string(),
        };
        assert_eq!(
            format_event(&fail),
            "  fail  notes.txt: unsupported format: /somewhere/notes.txt"
        );
    }

    #[test]
    fn summary_counts_successes() {
        let outcomes = vec![
            success("a.png", "/out/a_cover.png"),
            failure("b.txt", ConvertError::UnsupportedFormat("b.txt".into())),
            success("c.png", "/out/c_cover.png"),
        ];
        assert_eq!(
            format_summary(&outcomes, Path::new("/out")),
            "2 of 3 images converted into /out"
        );
    }

    #[test]
    fn kinds_table_lists_all_seven() {
        let lines = format_kinds();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "cover        140x200 px");
        assert!(lines.iter().any(|l| l.starts_with("disc-icon")));
        assert!(lines.iter().any(|l| l.contains("18x240")));
    }

    #[test]
    fn history_listing_is_most_recent_first() {
        let entries = vec![
            HistoryEntry {
                id: "20260805_100000".into(),
                date: "05/08/2026 10:00".into(),
                kind: "cover".into(),
                total: 3,
                success: 3,
                directory: PathBuf::from("/out/a"),
            },
            HistoryEntry {
                id: "20260806_100000".into(),
                date: "06/08/2026 10:00".into(),
                kind: "logo".into(),
                total: 1,
                success: 0,
                directory: PathBuf::from("/out/b"),
            },
        ];

        let lines = format_history(&entries);
        assert!(lines[0].starts_with("06/08/2026"));
        assert!(lines[1].starts_with("05/08/2026"));
    }

    #[test]
    fn empty_history_has_a_placeholder() {
        assert_eq!(format_history(&[]), vec!["no conversions recorded yet"]);
    }

    #[test]
    fn report_splits_outcomes_by_result() {
        let outcomes = vec![
            success("a.png", "/out/a_cover.png"),
            failure("b.png", ConvertError::Decode("bad bytes".into())),
        ];
        let report = Report::new(AssetKind::Cover, Path::new("/out"), &outcomes);

        assert_eq!(report.total, 2);
        assert_eq!(report.succeeded, 1);
        assert_eq!(report.failed, 1);
        assert_eq!(report.files[0].output.as_deref(), Some(Path::new("/out/a_cover.png")));
        assert!(report.files[0].error.is_none());
        assert_eq!(report.files[1].error.as_deref(), Some("decode failed: bad bytes"));
    }

    #[test]
    fn report_serializes_kind_as_kebab_case() {
        let report = Report::new(AssetKind::BackCover, Path::new("/out"), &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["kind"], "back-cover");
        assert_eq!(json["total"], 0);
    }
}
