//! Error type for ingestion failures.
//!
//! Ingestion is all-or-nothing: the first failure aborts the whole call and
//! no partial result is ever returned. Each variant carries enough context
//! (file path, line number) for the caller to produce a localized diagnostic
//! without re-reading the input.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Reasons an ingestion call can fail.
#[derive(Debug)]
pub enum IngestError {
    /// The input file could not be opened or fully read.
    Io {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying OS error.
        source: io::Error,
    },
    /// A line did not match the family grammar.
    ///
    /// `line` is the 1-based physical line number, counted across skipped
    /// blank lines, so it matches what an editor shows for the input file.
    MalformedLine {
        /// Path of the offending file, if ingestion started from a path.
        path: Option<PathBuf>,
        /// 1-based line number of the first malformed line.
        line: u64,
    },
    /// Reserving space for the group or detail arrays failed.
    Allocation {
        /// Which array was being sized.
        what: &'static str,
        /// Requested element count.
        count: usize,
    },
    /// The input contained no parsable lines (empty file, or blank lines
    /// only). Surfaced distinctly so callers can decide whether zero groups
    /// is acceptable.
    EmptyInput {
        /// Path of the degenerate file, if ingestion started from a path.
        path: Option<PathBuf>,
    },
}

impl IngestError {
    pub(crate) fn malformed(path: Option<&PathBuf>, line: u64) -> Self {
        Self::MalformedLine {
            path: path.cloned(),
            line,
        }
    }
}

impl fmt::Display for IngestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read '{}': {source}", path.display())
            }
            Self::MalformedLine {
                path: Some(path),
                line,
            } => {
                write!(f, "malformed line {line} in '{}'", path.display())
            }
            Self::MalformedLine { path: None, line } => {
                write!(f, "malformed line {line}")
            }
            Self::Allocation { what, count } => {
                write!(f, "cannot allocate {what} array ({count} entries)")
            }
            Self::EmptyInput { path: Some(path) } => {
                write!(f, "no records in '{}'", path.display())
            }
            Self::EmptyInput { path: None } => {
                write!(f, "no records in input")
            }
        }
    }
}

impl Error for IngestError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn display_includes_path_and_line() {
        let err = IngestError::MalformedLine {
            path: Some(Path::new("qrels.txt").to_path_buf()),
            line: 7,
        };
        assert_eq!(err.to_string(), "malformed line 7 in 'qrels.txt'");
    }

    #[test]
    fn display_without_path() {
        let err = IngestError::MalformedLine { path: None, line: 1 };
        assert_eq!(err.to_string(), "malformed line 1");
    }

    #[test]
    fn io_variant_exposes_source() {
        let err = IngestError::Io {
            path: "missing.txt".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(err.source().is_some());
    }
}
