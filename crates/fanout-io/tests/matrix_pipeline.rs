//! End-to-end pipeline test: read a document, expand it, write the records.

use fanout_core::Value;
use fanout_expander::expand;
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(name)
}

#[test]
fn matrix_document_expands_to_ordered_records() {
    let input = temp_path("fanout-pipeline-input.json");
    std::fs::write(
        &input,
        r#"{
            "service": "api",
            "replicas": [1, 3],
            "env": {"log_level": ["debug", "info"]}
        }"#,
    )
    .unwrap();

    let document = fanout_io::read_document(&input).unwrap();
    std::fs::remove_file(&input).ok();

    let variants = expand(&document, 2);

    let mut buffer = Vec::new();
    fanout_io::write_records(&mut buffer, &variants).unwrap();

    // Replica fan-out first (it is a root-level sequence), then the nested
    // log_level fan-out one mapping level down, in element order throughout.
    let expected = [
        r#"{"service":"api","replicas":1,"env":{"log_level":"debug"}}"#,
        r#"{"service":"api","replicas":1,"env":{"log_level":"info"}}"#,
        r#"{"service":"api","replicas":3,"env":{"log_level":"debug"}}"#,
        r#"{"service":"api","replicas":3,"env":{"log_level":"info"}}"#,
    ]
    .join("\n");
    assert_eq!(String::from_utf8(buffer).unwrap(), expected);
}

#[test]
fn written_records_reparse_to_the_expanded_documents() {
    let document: Value = r#"{"a":[1,2],"b":{"c":true}}"#.parse().unwrap();
    let variants = expand(&document, 1);

    let output = temp_path("fanout-pipeline-output.jsonl");
    fanout_io::write_records_file(&output, &variants).unwrap();
    let text = std::fs::read_to_string(&output).unwrap();
    std::fs::remove_file(&output).ok();

    let reparsed: Vec<Value> = text
        .lines()
        .map(|line| line.parse().unwrap())
        .collect();
    assert_eq!(reparsed, variants);
}
