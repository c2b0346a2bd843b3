//! # trecset
//!
//! **Grouped in-memory ingestion of TREC qrels/prefs and run-result files.**
//! Trecset turns the two classic whitespace-delimited evaluation formats into
//! per-query, sorted, randomly-addressable collections ready for
//! metric computation (precision, recall, MAP, and friends — computed by a
//! downstream layer, not by this crate).
//!
//! ## Key Features
//!
//! - **Lenient tokenization** - variable whitespace runs, CRLF, blank
//!   lines, and a missing final newline are all tolerated
//! - **Strict structure** - the first malformed line aborts ingestion with
//!   its 1-based line number; no partial result ever escapes
//! - **Deterministic grouping** - stable sort by (query id, document id),
//!   byte-lexicographic, then one contiguous group per query
//! - **Legacy-faithful semantics** - `atof`-style numeric coercion and the
//!   run-id-from-first-line behavior of trec_eval are preserved
//! - **Explicit ownership** - each result owns all of its storage; drop it
//!   and everything is released, no cleanup call, no global state
//!
//! ## Quick Start
//!
//! ```
//! use trecset::{Qrels, RunResults};
//!
//! # fn main() -> anyhow::Result<()> {
//! let qrels = Qrels::from_bytes(b"q2 0 dB 0\nq1 0 dA 1\nq1 0 dC 2\n".as_slice())?;
//! assert_eq!(qrels.num_queries(), 2);
//!
//! let run = RunResults::from_bytes(b"q1 Q0 dA 1 7.5 bm25\n".as_slice())?;
//! for group in &run {
//!     // Evaluate this query's ranking against qrels.group(group.qid()).
//!     assert!(qrels.group(group.qid()).is_some());
//! }
//! assert_eq!(run.run_id(), "bm25");
//! # Ok(())
//! # }
//! ```
//!
//! ## Pipeline
//!
//! Each ingestion call runs four stages, every stage consuming the previous
//! stage's full output:
//!
//! 1. [`buffer`] - load the whole file into one owned byte buffer,
//!    normalized to end with a newline plus a sentinel byte
//! 2. tokenize - split each line into its family's fields ([`qrels`],
//!    [`results`])
//! 3. sort - stable order by (query id, document id)
//! 4. group - one [`QueryGroup`] per distinct query id ([`group`])
//!
//! Ingestion is single-threaded and synchronous; independent files can be
//! ingested concurrently on separate threads since calls share no state.
//!
//! ## Input Formats
//!
//! Qrels/prefs, four required fields per line:
//!
//! ```text
//! <query_id> <judgment_group> <document_id> <relevance>
//! ```
//!
//! Run results, six columns with columns 2 and 4 present but ignored:
//!
//! ```text
//! <query_id> <ignored> <document_id> <ignored> <similarity> <run_id>
//! ```
//!
//! ## Error Handling
//!
//! Every entry point returns [`Result<T>`](Result) with a specific
//! [`IngestError`]: `Io`, `MalformedLine` (with line number),
//! `Allocation`, or `EmptyInput`. Errors interoperate with `anyhow` via
//! `std::error::Error`.

pub mod buffer;
pub mod error;
pub mod export;
pub mod group;
pub mod numeric;
pub mod qrels;
pub mod results;
pub mod testing;

mod scan;
mod sort;

pub use buffer::LoadedBuffer;
pub use error::{IngestError, Result};
pub use export::write_groups_jsonl;
pub use group::QueryGroup;
pub use qrels::{PrefJudgment, Qrels, load_qrels};
pub use results::{RunResults, ScoredDocument, load_results};
