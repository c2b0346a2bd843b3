//! Key sorting: the third pipeline stage.
//!
//! Both record families sort the same way, so the composite key lives
//! behind one trait instead of two copies of the comparator.

/// A raw line that can be ordered by (query id, document id).
pub(crate) trait KeyedLine {
    fn qid(&self) -> &[u8];
    fn docno(&self) -> &[u8];
}

/// Stable sort by query id, then document id, byte-lexicographic.
///
/// Stability makes grouping deterministic when an input repeats a
/// (qid, docno) pair: duplicates keep their original relative order. No
/// numeric interpretation is applied, so docno `"10"` sorts before `"2"`.
pub(crate) fn sort_by_qid_docno<L: KeyedLine>(lines: &mut [L]) {
    lines.sort_by(|a, b| a.qid().cmp(b.qid()).then_with(|| a.docno().cmp(b.docno())));
}
