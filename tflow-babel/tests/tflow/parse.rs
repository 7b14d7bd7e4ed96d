//! Parsing tests (T-Flow → records)

use crate::common::fixture;
use serde_json::json;
use tflow_babel::formats::tflow::parse_segments;
use tflow_babel::{FormatError, FormatRegistry, Record, Segment};

fn segments(source: &str) -> Vec<Segment> {
    parse_segments(source)
        .collect::<Result<_, _>>()
        .expect("Should parse T-Flow")
}

#[test]
fn test_reference_segment() {
    let source = "@ id: 001\n< Hello world.\n~ Bonjour monde.\n> Bonjour le monde.\n# fix punctuation\n";
    let parsed = segments(source);
    assert_eq!(parsed.len(), 1);

    let record = Record::from(parsed.into_iter().next().unwrap());
    let expected = json!({
        "meta": ["id: 001"],
        "id": "001",
        "source": "Hello world.",
        "source_paragraphs": ["Hello world."],
        "mt": "Bonjour monde.",
        "mt_paragraphs": ["Bonjour monde."],
        "target": "Bonjour le monde.",
        "target_paragraphs": ["Bonjour le monde."],
        "comments": ["fix punctuation"],
    });
    assert_eq!(serde_json::to_value(&record).unwrap(), expected);
}

#[test]
fn test_corpus_to_jsonl() {
    let registry = FormatRegistry::default();
    let output = registry
        .convert_str(&fixture("corpus.tflow"), "tflow", "jsonl")
        .unwrap();
    assert_eq!(output, fixture("corpus.jsonl"));
}

#[test]
fn test_extra_blank_lines_do_not_create_segments() {
    let parsed = segments("< one\n\n\n< two\n\n\n\n");
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].source.as_ref().unwrap().text, "one");
    assert_eq!(parsed[1].source.as_ref().unwrap().text, "two");
}

#[test]
fn test_consecutive_separators_collapse() {
    let parsed = segments("> a\n>\n>\n>\n>\n> b\n>\n>\n");
    let target = parsed[0].target.as_ref().unwrap();
    assert_eq!(target.paragraphs, vec!["a", "b"]);
    assert_eq!(target.text, "a\n\nb");
}

#[test]
fn test_blank_payload_segment_is_suppressed() {
    let parsed = segments("<\n~\n>\n<\n\n< real\n");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].source.as_ref().unwrap().text, "real");
}

#[test]
fn test_payload_escaping() {
    let parsed = segments("< hello\n<hello\n<  indented\n");
    let source = parsed[0].source.as_ref().unwrap();
    assert_eq!(source.paragraphs, vec!["hello\nhello\n indented"]);
}

#[test]
fn test_roles_accumulate_independently() {
    let parsed = segments("< s1\n> t1\n<\n> t2\n< s2\n");
    assert_eq!(
        parsed[0].source.as_ref().unwrap().paragraphs,
        vec!["s1", "s2"]
    );
    assert_eq!(parsed[0].target.as_ref().unwrap().paragraphs, vec!["t1\nt2"]);
}

#[test]
fn test_malformed_line_halts_after_earlier_segments() {
    let mut parser = parse_segments("@ id: 1\n< ok\n\nX hello\n\n< never\n");

    let first = parser.next().unwrap().unwrap();
    assert_eq!(first.id.as_deref(), Some("1"));

    match parser.next() {
        Some(Err(FormatError::MalformedLine { line_number, line })) => {
            assert_eq!(line_number, 4);
            assert_eq!(line, "X hello");
        }
        other => panic!("expected malformed line, got {other:?}"),
    }
    assert!(parser.next().is_none());
}

#[test]
fn test_malformed_line_error_message() {
    let registry = FormatRegistry::default();
    let err = registry
        .convert_str("plain prose\n", "tflow", "jsonl")
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Invalid T-Flow line 1 (no marker): \"plain prose\""
    );
}
