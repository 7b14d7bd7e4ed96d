//! Serialization tests (records → T-Flow)

use crate::common::{fixture, record};
use insta::assert_snapshot;
use serde_json::json;
use tflow_babel::formats::tflow::serializer::segment_lines;
use tflow_babel::FormatRegistry;

#[test]
fn test_reference_record() {
    let lines = segment_lines(&record(json!({
        "meta": ["id: 001"],
        "id": "001",
        "source": "Hello world.",
        "source_paragraphs": ["Hello world."],
        "mt": "Bonjour monde.",
        "mt_paragraphs": ["Bonjour monde."],
        "target": "Bonjour le monde.",
        "target_paragraphs": ["Bonjour le monde."],
        "comments": ["fix punctuation"],
    })));
    assert_snapshot!(lines.join("\n"), @r"
    @ id: 001
    < Hello world.
    ~ Bonjour monde.
    > Bonjour le monde.
    # fix punctuation
    ");
}

#[test]
fn test_lines_follow_marker_order_regardless_of_keys() {
    let lines = segment_lines(&record(json!({
        "comments": ["last"],
        "target": "t",
        "mt": "m",
        "source": "s",
        "meta": ["lang: fr"],
        "id": "x",
    })));
    assert_eq!(
        lines,
        vec!["@ id: x", "@ lang: fr", "< s", "~ m", "> t", "# last"]
    );
}

#[test]
fn test_corpus_jsonl_to_tflow() {
    let registry = FormatRegistry::default();
    let output = registry
        .convert_str(&fixture("corpus.jsonl"), "jsonl", "tflow")
        .unwrap();
    assert_eq!(output, fixture("corpus.canonical.tflow"));
}

#[test]
fn test_canonical_output_is_stable() {
    let registry = FormatRegistry::default();
    let canonical = fixture("corpus.canonical.tflow");
    let output = registry.convert_str(&canonical, "tflow", "tflow").unwrap();
    assert_eq!(output, canonical);
}

#[test]
fn test_empty_record_still_separates() {
    let registry = FormatRegistry::default();
    let output = registry
        .convert_str("{\"source\":\"a\"}\n{}\n{\"source\":\"b\"}\n", "jsonl", "tflow")
        .unwrap();
    assert_eq!(output, "< a\n\n\n< b\n");
}
