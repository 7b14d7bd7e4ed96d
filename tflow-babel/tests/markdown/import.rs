//! Import tests for Markdown (Markdown → T-Flow / records)

use crate::common::fixture;
use serde_json::json;
use tflow_babel::formats::{MarkdownFormat, MarkdownOptions};
use tflow_babel::{FormatError, FormatRegistry};

#[test]
fn test_document_to_tflow() {
    let registry = FormatRegistry::default();
    let output = registry
        .convert_str(&fixture("document.md"), "markdown", "tflow")
        .unwrap();
    assert_eq!(output, fixture("document.tflow"));
}

#[test]
fn test_fenced_block_keeps_blank_lines() {
    let registry = FormatRegistry::default();
    let records = registry.parse(&fixture("document.md"), "markdown").unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(
        records[2].get("source"),
        Some(&json!("```text\n< source line\n\n> target line\n```"))
    );
}

#[test]
fn test_custom_id_numbering() {
    let mut registry = FormatRegistry::default();
    registry.register(MarkdownFormat::new(MarkdownOptions {
        id_start: 98,
        id_width: 2,
    }));

    let output = registry
        .convert_str("one\n\ntwo\n\nthree\n", "markdown", "tflow")
        .unwrap();
    assert_eq!(
        output,
        "@ id: 98\n< one\n\n@ id: 99\n< two\n\n@ id: 100\n< three\n"
    );
}

#[test]
fn test_markdown_to_records() {
    let registry = FormatRegistry::default();
    let output = registry
        .convert_str("Hello *world*\n", "markdown", "jsonl")
        .unwrap();
    assert_eq!(
        output,
        "{\"meta\":[\"id: 0001\"],\"id\":\"0001\",\"source\":\"Hello *world*\",\"source_paragraphs\":[\"Hello *world*\"]}\n"
    );
}

#[test]
fn test_markdown_cannot_be_written() {
    let registry = FormatRegistry::default();
    let result = registry.convert_str("< a\n", "tflow", "markdown");
    assert!(matches!(result, Err(FormatError::NotSupported(_))));
}

#[test]
fn test_empty_document_produces_nothing() {
    let registry = FormatRegistry::default();
    let output = registry.convert_str("\n\n   \n", "markdown", "tflow").unwrap();
    assert!(output.is_empty());
}
