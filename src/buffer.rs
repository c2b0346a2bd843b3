//! Buffer loading: the first pipeline stage.
//!
//! The whole input is read into one owned, contiguous byte buffer before any
//! tokenization starts. The loader normalizes the tail of the buffer so the
//! scanner never needs a bounds check: the content always ends with a
//! newline (synthesized if the file lacked one) followed by a single NUL
//! sentinel byte.

use crate::error::{IngestError, Result};
use std::fs;
use std::path::Path;

/// Sentinel appended after the final newline; never occurs inside a token.
pub(crate) const SENTINEL: u8 = 0;

/// An input file held in memory, normalized for scanning.
///
/// Invariants after construction:
/// - the last byte is [`SENTINEL`];
/// - if any content bytes precede the sentinel, the byte just before the
///   sentinel is `\n`.
#[derive(Debug, Clone)]
pub struct LoadedBuffer {
    bytes: Vec<u8>,
}

impl LoadedBuffer {
    /// Read the full content of `path` into a normalized buffer.
    ///
    /// # Errors
    ///
    /// Returns [`IngestError::Io`] if the file cannot be opened or read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| IngestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_bytes(bytes))
    }

    /// Wrap already-loaded content, normalizing the tail.
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Self {
        let mut bytes = content.into();
        if !bytes.is_empty() && bytes.last() != Some(&b'\n') {
            bytes.push(b'\n');
        }
        bytes.push(SENTINEL);
        Self { bytes }
    }

    /// Full buffer including the trailing sentinel; this is what the
    /// scanner walks.
    pub(crate) fn scan_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Content bytes only (everything before the sentinel).
    pub fn content(&self) -> &[u8] {
        &self.bytes[..self.bytes.len() - 1]
    }

    /// True if the input had no content bytes at all.
    pub fn is_empty(&self) -> bool {
        self.bytes.len() == 1
    }
}
