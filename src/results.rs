//! The results record family: ranked retrieval run output.
//!
//! Input lines carry six whitespace-run-separated columns, of which the
//! second and fourth (classically `iter` and `rank`) must be present but
//! are otherwise ignored:
//!
//! ```text
//! <query_id> <ignored> <document_id> <ignored> <similarity> <run_id>
//! ```
//!
//! Anything after the run id is tolerated up to the line terminator, and
//! blank lines are skipped. The run id kept for the whole file is the one
//! on the first successfully parsed line; later lines may carry a
//! different value and it is never re-checked. That is legacy trec_eval
//! behavior, preserved for compatibility rather than corrected.

use crate::buffer::LoadedBuffer;
use crate::error::Result;
use crate::group::{GroupLine, QueryGroup, build_groups, owned_field};
use crate::numeric::permissive_f64;
use crate::qrels::{lookup_group, require};
use crate::scan::Scanner;
use crate::sort::{KeyedLine, sort_by_qid_docno};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::slice;

/// One scored document in a retrieval run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredDocument {
    /// Retrieved document identifier.
    pub docno: String,
    /// Similarity score assigned by the run, permissively converted (see
    /// [`permissive_f64`]).
    pub similarity: f64,
}

impl ScoredDocument {
    pub fn new(docno: impl Into<String>, similarity: f64) -> Self {
        Self {
            docno: docno.into(),
            similarity,
        }
    }
}

/// Parsed field spans of one results line, borrowing the loaded buffer.
struct RawResultsLine<'a> {
    qid: &'a [u8],
    docno: &'a [u8],
    sim: &'a [u8],
}

impl KeyedLine for RawResultsLine<'_> {
    fn qid(&self) -> &[u8] {
        self.qid
    }
    fn docno(&self) -> &[u8] {
        self.docno
    }
}

impl GroupLine for RawResultsLine<'_> {
    type Detail = ScoredDocument;

    fn detail(&self) -> ScoredDocument {
        ScoredDocument {
            docno: owned_field(self.docno),
            similarity: permissive_f64(self.sim),
        }
    }
}

/// A fully ingested run-results file: one group per query, queries in
/// ascending byte order, each group's documents in ascending docno order.
///
/// # Example
///
/// ```
/// use trecset::RunResults;
///
/// let text = b"q1 Q0 dA 1 7.25 bm25\nq1 Q0 dB 2 6.50 bm25\n";
/// let results = RunResults::from_bytes(text.as_slice())?;
/// assert_eq!(results.run_id(), "bm25");
/// assert_eq!(results.group("q1").unwrap().count(), 2);
/// # Ok::<(), trecset::IngestError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResults {
    run_id: String,
    groups: Vec<QueryGroup<ScoredDocument>>,
}

impl RunResults {
    /// Label stored on every group of this family.
    pub const COLLECTION_LABEL: &'static str = "trec_results";

    /// Ingest a run-results file from disk.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`Qrels::from_path`](crate::Qrels::from_path).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let buffer = LoadedBuffer::from_path(&path)?;
        Self::ingest(&buffer, Some(path))
    }

    /// Ingest run-results content already held in memory.
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Result<Self> {
        Self::ingest(&LoadedBuffer::from_bytes(content), None)
    }

    fn ingest(buffer: &LoadedBuffer, path: Option<PathBuf>) -> Result<Self> {
        let (mut raw, run_id) = parse_lines(buffer, path.as_ref())?;
        sort_by_qid_docno(&mut raw);
        let groups = build_groups(&raw, Self::COLLECTION_LABEL, path.as_ref())?;
        // Groups are non-empty here, so the first line's run id was seen.
        Ok(Self {
            run_id: run_id.unwrap_or_default(),
            groups,
        })
    }

    /// Run identifier from the first parsed line, shared by every group.
    ///
    /// Legacy compatibility: later lines are never checked against it.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    /// The family label, also present on every group.
    pub fn collection_label(&self) -> &'static str {
        Self::COLLECTION_LABEL
    }

    /// Number of distinct queries.
    pub fn num_queries(&self) -> usize {
        self.groups.len()
    }

    /// Total retrieved documents across all queries.
    pub fn total_documents(&self) -> usize {
        self.groups.iter().map(QueryGroup::count).sum()
    }

    /// All groups, in ascending query-id byte order.
    pub fn groups(&self) -> &[QueryGroup<ScoredDocument>] {
        &self.groups
    }

    /// Look up one query's group by its identifier.
    pub fn group(&self, qid: &str) -> Option<&QueryGroup<ScoredDocument>> {
        lookup_group(&self.groups, qid)
    }

    /// Iterate over the groups in query-id order.
    pub fn iter(&self) -> slice::Iter<'_, QueryGroup<ScoredDocument>> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a RunResults {
    type Item = &'a QueryGroup<ScoredDocument>;
    type IntoIter = slice::Iter<'a, QueryGroup<ScoredDocument>>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

type ParsedResults<'a> = (Vec<RawResultsLine<'a>>, Option<String>);

fn parse_lines<'a>(buffer: &'a LoadedBuffer, path: Option<&PathBuf>) -> Result<ParsedResults<'a>> {
    let mut scanner = Scanner::new(buffer);
    let mut lines = Vec::new();
    let mut run_id: Option<String> = None;

    loop {
        scanner.skip_blank_lines();
        if scanner.at_end() {
            return Ok((lines, run_id));
        }
        let line_no = scanner.line();

        let qid = require(scanner.token(), path, line_no)?;
        scanner.skip_blanks();
        require(scanner.token(), path, line_no)?; // ignored column 2
        scanner.skip_blanks();
        let docno = require(scanner.token(), path, line_no)?;
        scanner.skip_blanks();
        require(scanner.token(), path, line_no)?; // ignored column 4
        scanner.skip_blanks();
        let sim = require(scanner.token(), path, line_no)?;
        scanner.skip_blanks();
        let run = require(scanner.token(), path, line_no)?;

        if run_id.is_none() {
            run_id = Some(owned_field(run));
        }

        // Trailing content after the run id is tolerated.
        scanner.skip_to_eol();
        if !scanner.at_end() {
            scanner.next_line();
        }

        lines.push(RawResultsLine { qid, docno, sim });
    }
}

/// Ingest a run-results file from disk. Convenience alias for
/// [`RunResults::from_path`].
pub fn load_results(path: impl AsRef<Path>) -> Result<RunResults> {
    RunResults::from_path(path)
}
