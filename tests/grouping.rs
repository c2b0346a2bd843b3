//! Cross-family invariants over the grouped output.

use anyhow::Result;
use trecset::testing::{
    assert_non_decreasing, assert_strictly_increasing, fixture_file, sample_qrels_text,
    sample_results_text,
};
use trecset::{Qrels, RunResults, write_groups_jsonl};

#[test]
fn qrels_round_trip_accounts_for_every_parsed_line() -> Result<()> {
    let qrels = Qrels::from_bytes(sample_qrels_text())?;

    // 6 physical lines, one blank: 5 parsed lines.
    let total: usize = qrels.iter().map(|g| g.count()).sum();
    assert_eq!(total, 5);
    assert_eq!(total, qrels.total_judgments());

    let mut docnos: Vec<String> = qrels
        .iter()
        .flat_map(|g| g.iter().map(|j| j.docno.clone()))
        .collect();
    docnos.sort();
    assert_eq!(docnos, ["docA", "docA", "docB", "docC", "docC"]);
    Ok(())
}

#[test]
fn qids_strictly_increase_and_docnos_never_decrease() -> Result<()> {
    let qrels = Qrels::from_bytes(sample_qrels_text())?;
    let qids: Vec<&str> = qrels.iter().map(|g| g.qid()).collect();
    assert_strictly_increasing(&qids);
    for group in &qrels {
        let docnos: Vec<&str> = group.iter().map(|j| j.docno.as_str()).collect();
        assert_non_decreasing(&docnos);
    }

    let run = RunResults::from_bytes(sample_results_text())?;
    let qids: Vec<&str> = run.iter().map(|g| g.qid()).collect();
    assert_strictly_increasing(&qids);
    for group in &run {
        let docnos: Vec<&str> = group.iter().map(|d| d.docno.as_str()).collect();
        assert_non_decreasing(&docnos);
    }
    Ok(())
}

#[test]
fn duplicate_pairs_keep_input_order() -> Result<()> {
    // Same (qid, docno) twice: the stable sort keeps file order, so the
    // relevance values come out in input order.
    let qrels = Qrels::from_bytes(b"q1 0 d1 1\nq1 0 d1 2\n".as_slice())?;
    let rels: Vec<f64> = qrels.group("q1").unwrap().iter().map(|j| j.relevance).collect();
    assert_eq!(rels, [1.0, 2.0]);
    Ok(())
}

#[test]
fn groups_carry_family_labels() -> Result<()> {
    let qrels = Qrels::from_bytes(b"q1 0 d1 1\n".as_slice())?;
    assert_eq!(qrels.groups()[0].label(), "prefs");

    let run = RunResults::from_bytes(b"q1 Q0 d1 1 1.0 r\n".as_slice())?;
    assert_eq!(run.groups()[0].label(), "trec_results");
    Ok(())
}

#[test]
fn crlf_input_parses_like_lf() -> Result<()> {
    let lf = Qrels::from_bytes(b"q1 0 d1 1\nq2 0 d2 2\n".as_slice())?;
    let crlf = Qrels::from_bytes(b"q1 0 d1 1\r\nq2 0 d2 2\r\n".as_slice())?;
    assert_eq!(lf, crlf);
    Ok(())
}

#[test]
fn group_access_is_slice_like() -> Result<()> {
    let qrels = Qrels::from_bytes(sample_qrels_text())?;
    let q2 = qrels.group("q2").unwrap();
    assert_eq!(q2.len(), 2);
    assert!(!q2.is_empty());
    assert_eq!(q2.get(0).unwrap().docno, "docA");
    assert_eq!(q2.get(2), None);
    assert_eq!(q2.iter().count(), q2.count());
    Ok(())
}

#[test]
fn results_are_send_and_sync() {
    fn check<T: Send + Sync>() {}
    check::<Qrels>();
    check::<RunResults>();
}

#[test]
fn grouped_output_exports_as_jsonl() -> Result<()> {
    let (_dir, path) = fixture_file(sample_qrels_text())?;
    let qrels = trecset::load_qrels(&path)?;

    let out = path.with_file_name("groups.jsonl");
    let written = write_groups_jsonl(&out, qrels.groups())?;
    assert_eq!(written, qrels.num_queries());

    let text = std::fs::read_to_string(&out)?;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    let first: serde_json::Value = serde_json::from_str(lines[0])?;
    assert_eq!(first["qid"], "q1");
    assert_eq!(first["label"], "prefs");
    assert_eq!(first["details"].as_array().unwrap().len(), 2);
    Ok(())
}
