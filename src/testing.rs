//! Fixtures and assertion helpers for testing ingestion.
//!
//! The fixture texts are deliberately messy: unsorted lines, variable
//! whitespace runs, blank lines, and a missing final newline, matching what
//! real judgment and run files look like.

use anyhow::{Context, Result};
use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Qrels/prefs fixture: three queries, five judgments, unsorted.
#[must_use]
pub fn sample_qrels_text() -> &'static str {
    "q2  0\tdocB 0\n\
     q1 0 docA 1\n\
     \n\
     q3 0 docC 2\n\
     q1 0\t docC 0.5\n\
     q2 0 docA 1"
}

/// Run-results fixture: two queries, four documents, run id `bm25`.
#[must_use]
pub fn sample_results_text() -> &'static str {
    "q2 Q0 docB 1 8.25 bm25\n\
     q1 Q0 docA 1 7.00 bm25\n\
     \n\
     q1 Q0 docC 2 6.50 bm25\n\
     q2 Q0 docA 2 5.75 bm25"
}

/// Write fixture text to a file inside a fresh temporary directory.
///
/// Returns the directory handle along with the file path; keep the handle
/// alive for as long as the path is used.
pub fn fixture_file(contents: &str) -> Result<(TempDir, PathBuf)> {
    let dir = tempfile::tempdir().context("create fixture dir")?;
    let path = dir.path().join("input.txt");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))?;
    Ok((dir, path))
}

/// Assert that a sequence is strictly increasing.
///
/// # Panics
///
/// Panics with the offending pair and its position.
pub fn assert_strictly_increasing<T: Ord + Debug>(items: &[T]) {
    for (i, pair) in items.windows(2).enumerate() {
        assert!(
            pair[0] < pair[1],
            "Sequence not strictly increasing at index {}:\n  Left:  {:?}\n  Right: {:?}\n  Full: {items:?}",
            i,
            pair[0],
            pair[1]
        );
    }
}

/// Assert that a sequence is non-decreasing.
///
/// # Panics
///
/// Panics with the offending pair and its position.
pub fn assert_non_decreasing<T: Ord + Debug>(items: &[T]) {
    for (i, pair) in items.windows(2).enumerate() {
        assert!(
            pair[0] <= pair[1],
            "Sequence not non-decreasing at index {}:\n  Left:  {:?}\n  Right: {:?}\n  Full: {items:?}",
            i,
            pair[0],
            pair[1]
        );
    }
}
