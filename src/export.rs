//! JSONL export of grouped output.
//!
//! Downstream metric tooling often wants the grouped collections on disk in
//! a line-oriented form it can re-read without this crate. One JSON object
//! is written per query group.

use crate::group::QueryGroup;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::{File, create_dir_all};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one JSON object per query group; returns the number of groups
/// written. Creates parent directories if needed.
pub fn write_groups_jsonl<D: Serialize>(
    path: impl AsRef<Path>,
    groups: &[QueryGroup<D>],
) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent).with_context(|| format!("mkdir -p {}", parent.display()))?;
    }
    let f = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut w = BufWriter::new(f);

    for group in groups {
        serde_json::to_writer(&mut w, group)
            .with_context(|| format!("serialize group '{}' to {}", group.qid(), path.display()))?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(groups.len())
}
