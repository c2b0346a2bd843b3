//! Group building: the final pipeline stage.
//!
//! A single linear pass over the sorted raw lines emits one [`QueryGroup`]
//! per distinct query id. The legacy reader carried two copies of this loop,
//! one per record family; here the family plugs in through [`GroupLine`] and
//! the walk is written once.

use crate::error::{IngestError, Result};
use crate::sort::KeyedLine;
use serde::Serialize;
use std::path::PathBuf;
use std::slice;

/// A sorted raw line that can produce its family's owned detail record.
pub(crate) trait GroupLine: KeyedLine {
    type Detail;
    fn detail(&self) -> Self::Detail;
}

/// All detail records for one query, in ascending docno order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryGroup<D> {
    qid: String,
    label: &'static str,
    details: Vec<D>,
}

impl<D> QueryGroup<D> {
    /// The query identifier shared by every detail record in this group.
    pub fn qid(&self) -> &str {
        &self.qid
    }

    /// Constant label naming the record family (`"prefs"` or
    /// `"trec_results"`).
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Number of detail records in this group.
    pub fn count(&self) -> usize {
        self.details.len()
    }

    /// Same as [`count`](Self::count); present for slice-like ergonomics.
    pub fn len(&self) -> usize {
        self.details.len()
    }

    /// A group is never empty when produced by ingestion, but the check is
    /// cheap to offer.
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Detail records in ascending docno order.
    pub fn details(&self) -> &[D] {
        &self.details
    }

    /// Random access into the sorted detail records.
    pub fn get(&self, index: usize) -> Option<&D> {
        self.details.get(index)
    }

    /// Iterate over the sorted detail records.
    pub fn iter(&self) -> slice::Iter<'_, D> {
        self.details.iter()
    }
}

impl<'a, D> IntoIterator for &'a QueryGroup<D> {
    type Item = &'a D;
    type IntoIter = slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.details.iter()
    }
}

/// Field bytes to owned text. Inputs are expected to be ASCII; anything
/// else is carried through lossily rather than failing ingestion.
pub(crate) fn owned_field(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Walk the sorted lines once and materialize the per-query groups.
///
/// Group and detail vectors are reserved to their exact final sizes;
/// a failed reservation surfaces as [`IngestError::Allocation`].
///
/// # Errors
///
/// Returns [`IngestError::EmptyInput`] when no lines parsed at all.
pub(crate) fn build_groups<L: GroupLine>(
    sorted: &[L],
    label: &'static str,
    path: Option<&PathBuf>,
) -> Result<Vec<QueryGroup<L::Detail>>> {
    if sorted.is_empty() {
        return Err(IngestError::EmptyInput { path: path.cloned() });
    }

    let num_qid = 1 + sorted
        .windows(2)
        .filter(|w| w[0].qid() != w[1].qid())
        .count();

    let mut groups = Vec::new();
    groups
        .try_reserve_exact(num_qid)
        .map_err(|_| IngestError::Allocation {
            what: "group",
            count: num_qid,
        })?;

    let mut start = 0;
    while start < sorted.len() {
        let qid = sorted[start].qid();
        let mut end = start + 1;
        while end < sorted.len() && sorted[end].qid() == qid {
            end += 1;
        }

        let mut details = Vec::new();
        details
            .try_reserve_exact(end - start)
            .map_err(|_| IngestError::Allocation {
                what: "detail",
                count: end - start,
            })?;
        for line in &sorted[start..end] {
            details.push(line.detail());
        }

        groups.push(QueryGroup {
            qid: owned_field(qid),
            label,
            details,
        });
        start = end;
    }

    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line(&'static [u8], &'static [u8]);

    impl KeyedLine for Line {
        fn qid(&self) -> &[u8] {
            self.0
        }
        fn docno(&self) -> &[u8] {
            self.1
        }
    }

    impl GroupLine for Line {
        type Detail = String;
        fn detail(&self) -> String {
            owned_field(self.1)
        }
    }

    #[test]
    fn one_group_per_distinct_qid() {
        let sorted = vec![
            Line(b"q1", b"dA"),
            Line(b"q1", b"dC"),
            Line(b"q2", b"dB"),
        ];
        let groups = build_groups(&sorted, "prefs", None).unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].qid(), "q1");
        assert_eq!(groups[0].details(), ["dA".to_string(), "dC".to_string()]);
        assert_eq!(groups[1].qid(), "q2");
        assert_eq!(groups[1].count(), 1);
    }

    #[test]
    fn single_line_input_forms_one_group() {
        let sorted = vec![Line(b"q9", b"d1")];
        let groups = build_groups(&sorted, "prefs", None).unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label(), "prefs");
        assert_eq!(groups[0].get(0), Some(&"d1".to_string()));
    }

    #[test]
    fn no_lines_is_empty_input() {
        let sorted: Vec<Line> = Vec::new();
        let err = build_groups(&sorted, "prefs", None).unwrap_err();
        assert!(matches!(err, IngestError::EmptyInput { .. }));
    }
}
