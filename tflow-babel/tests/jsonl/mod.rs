//! JSONL format tests
//!
//! Records in, T-Flow out, including hand-authored records with loose field types.

use crate::common::fixture;
use tflow_babel::{FormatError, FormatRegistry};

#[test]
fn test_loose_records_convert_by_coercion() {
    let registry = FormatRegistry::default();
    let output = registry
        .convert_str(&fixture("loose.jsonl"), "jsonl", "tflow")
        .expect("loose records should convert");
    assert_eq!(output, fixture("loose.tflow"));
}

#[test]
fn test_jsonl_passthrough_keeps_key_order() {
    let registry = FormatRegistry::default();
    let input = "{\"z\":1,\"a\":[\"é\"],\"m\":null}\n";
    let output = registry.convert_str(input, "jsonl", "jsonl").unwrap();
    assert_eq!(output, input);
}

#[test]
fn test_malformed_record_aborts_conversion() {
    let registry = FormatRegistry::default();
    let input = "{\"source\": \"one\"}\n\"just a string\"\n{\"source\": \"three\"}\n";
    let mut out = Vec::new();
    let result = registry.convert(Box::new(input.as_bytes()), "jsonl", "tflow", &mut out);

    match result {
        Err(FormatError::MalformedRecord {
            line_number, line, ..
        }) => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "\"just a string\"");
        }
        other => panic!("expected malformed record, got {other:?}"),
    }
    // the first record was already streamed out
    assert_eq!(String::from_utf8(out).unwrap(), "< one\n");
}

#[test]
fn test_records_to_jsonl_and_back() {
    let registry = FormatRegistry::default();
    let records = registry.parse(&fixture("corpus.jsonl"), "jsonl").unwrap();
    assert_eq!(records.len(), 3);

    let output = registry.serialize(records, "jsonl").unwrap();
    assert_eq!(output, fixture("corpus.jsonl"));
}

#[test]
fn test_embedded_newlines_in_loose_fields_reparse() {
    let registry = FormatRegistry::default();
    let input = concat!(
        r#"{"meta": ["note: a\nb"], "target_paragraphs": [["x\ny", 2]], "comments": ["c\nd"]}"#,
        "\n"
    );
    let tflow = registry.convert_str(input, "jsonl", "tflow").unwrap();
    assert_eq!(tflow, "@ note: a\n@ b\n> x\n> y\n> 2\n# c\n# d\n");

    let records = registry.parse(&tflow, "tflow").expect("output should reparse");
    assert_eq!(records.len(), 1);
    assert_eq!(
        records[0].get("target_paragraphs"),
        Some(&serde_json::json!(["x\ny\n2"]))
    );
}
