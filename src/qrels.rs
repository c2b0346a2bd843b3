//! The qrels/prefs record family: relevance and preference judgments.
//!
//! Input lines carry four whitespace-run-separated fields:
//!
//! ```text
//! <query_id> <judgment_group> <document_id> <relevance>
//! ```
//!
//! A fifth trailing token is tolerated when only whitespace follows it
//! before the line terminator; blank lines are skipped. Any other shape
//! aborts ingestion with the offending line number.

use crate::buffer::LoadedBuffer;
use crate::error::{IngestError, Result};
use crate::group::{GroupLine, QueryGroup, build_groups, owned_field};
use crate::numeric::permissive_f64;
use crate::scan::Scanner;
use crate::sort::{KeyedLine, sort_by_qid_docno};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::slice;

/// One relevance/preference judgment for a (query, document) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefJudgment {
    /// Judgment group label from the input line.
    pub judgment_group: String,
    /// Judgment subgroup; always `"0"` in this format.
    pub judgment_subgroup: String,
    /// Graded relevance level, permissively converted (see
    /// [`permissive_f64`]).
    pub relevance: f64,
    /// Judged document identifier.
    pub docno: String,
}

impl PrefJudgment {
    /// Build a judgment with the fixed `"0"` subgroup.
    pub fn new(
        judgment_group: impl Into<String>,
        docno: impl Into<String>,
        relevance: f64,
    ) -> Self {
        Self {
            judgment_group: judgment_group.into(),
            judgment_subgroup: "0".to_string(),
            relevance,
            docno: docno.into(),
        }
    }
}

/// Parsed field spans of one qrels line, borrowing the loaded buffer.
struct RawQrelsLine<'a> {
    qid: &'a [u8],
    jg: &'a [u8],
    docno: &'a [u8],
    rel: &'a [u8],
}

impl KeyedLine for RawQrelsLine<'_> {
    fn qid(&self) -> &[u8] {
        self.qid
    }
    fn docno(&self) -> &[u8] {
        self.docno
    }
}

impl GroupLine for RawQrelsLine<'_> {
    type Detail = PrefJudgment;

    fn detail(&self) -> PrefJudgment {
        PrefJudgment {
            judgment_group: owned_field(self.jg),
            judgment_subgroup: "0".to_string(),
            relevance: permissive_f64(self.rel),
            docno: owned_field(self.docno),
        }
    }
}

/// A fully ingested qrels/prefs file: one group per query, queries in
/// ascending byte order, each group's judgments in ascending docno order.
///
/// # Example
///
/// ```
/// use trecset::Qrels;
///
/// let qrels = Qrels::from_bytes(b"q2 0 dB 0\nq1 0 dA 1\nq1 0 dC 2\n".as_slice())?;
/// assert_eq!(qrels.num_queries(), 2);
/// assert_eq!(qrels.group("q1").unwrap().count(), 2);
/// # Ok::<(), trecset::IngestError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Qrels {
    groups: Vec<QueryGroup<PrefJudgment>>,
}

impl Qrels {
    /// Label stored on every group of this family.
    pub const COLLECTION_LABEL: &'static str = "prefs";

    /// Ingest a qrels/prefs file from disk.
    ///
    /// # Errors
    ///
    /// [`IngestError::Io`] if the file cannot be read,
    /// [`IngestError::MalformedLine`] on the first grammar violation,
    /// [`IngestError::EmptyInput`] if no line parsed.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let buffer = LoadedBuffer::from_path(&path)?;
        Self::ingest(&buffer, Some(path))
    }

    /// Ingest qrels/prefs content already held in memory.
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Result<Self> {
        Self::ingest(&LoadedBuffer::from_bytes(content), None)
    }

    fn ingest(buffer: &LoadedBuffer, path: Option<PathBuf>) -> Result<Self> {
        let mut raw = parse_lines(buffer, path.as_ref())?;
        sort_by_qid_docno(&mut raw);
        let groups = build_groups(&raw, Self::COLLECTION_LABEL, path.as_ref())?;
        Ok(Self { groups })
    }

    /// The family label, also present on every group.
    pub fn collection_label(&self) -> &'static str {
        Self::COLLECTION_LABEL
    }

    /// Number of distinct queries.
    pub fn num_queries(&self) -> usize {
        self.groups.len()
    }

    /// Total judgments across all queries.
    pub fn total_judgments(&self) -> usize {
        self.groups.iter().map(QueryGroup::count).sum()
    }

    /// All groups, in ascending query-id byte order.
    pub fn groups(&self) -> &[QueryGroup<PrefJudgment>] {
        &self.groups
    }

    /// Look up one query's group by its identifier.
    pub fn group(&self, qid: &str) -> Option<&QueryGroup<PrefJudgment>> {
        lookup_group(&self.groups, qid)
    }

    /// Iterate over the groups in query-id order.
    pub fn iter(&self) -> slice::Iter<'_, QueryGroup<PrefJudgment>> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a Qrels {
    type Item = &'a QueryGroup<PrefJudgment>;
    type IntoIter = slice::Iter<'a, QueryGroup<PrefJudgment>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Binary search over groups sorted by qid. Shared with the results family.
pub(crate) fn lookup_group<'a, D>(
    groups: &'a [QueryGroup<D>],
    qid: &str,
) -> Option<&'a QueryGroup<D>> {
    groups
        .binary_search_by(|g| g.qid().as_bytes().cmp(qid.as_bytes()))
        .ok()
        .map(|i| &groups[i])
}

fn parse_lines<'a>(
    buffer: &'a LoadedBuffer,
    path: Option<&PathBuf>,
) -> Result<Vec<RawQrelsLine<'a>>> {
    let mut scanner = Scanner::new(buffer);
    let mut lines = Vec::new();

    loop {
        scanner.skip_blank_lines();
        if scanner.at_end() {
            return Ok(lines);
        }
        let line_no = scanner.line();

        let qid = require(scanner.token(), path, line_no)?;
        scanner.skip_blanks();
        let jg = require(scanner.token(), path, line_no)?;
        scanner.skip_blanks();
        let docno = require(scanner.token(), path, line_no)?;
        scanner.skip_blanks();
        let rel = require(scanner.token(), path, line_no)?;

        // Tolerate one extra token, then only whitespace to end of line.
        scanner.skip_blanks();
        if !scanner.at_eol() {
            let _ = scanner.token();
            scanner.skip_blanks();
            if !scanner.at_eol() {
                return Err(IngestError::malformed(path, line_no));
            }
        }
        scanner.next_line();

        lines.push(RawQrelsLine {
            qid,
            jg,
            docno,
            rel,
        });
    }
}

pub(crate) fn require<'a>(
    token: Option<&'a [u8]>,
    path: Option<&PathBuf>,
    line: u64,
) -> Result<&'a [u8]> {
    token.ok_or_else(|| IngestError::malformed(path, line))
}

/// Ingest a qrels/prefs file from disk. Convenience alias for
/// [`Qrels::from_path`].
pub fn load_qrels(path: impl AsRef<Path>) -> Result<Qrels> {
    Qrels::from_path(path)
}
