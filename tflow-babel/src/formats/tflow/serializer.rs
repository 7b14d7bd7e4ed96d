//! T-Flow serialization (records → T-Flow)
//!
//! The inverse of parsing plus normalization, but driven by loosely typed
//! [`Record`]s: records read from JSONL may lack the paragraph arrays, or carry
//! numbers where strings were expected. Nothing here fails on shape drift; values
//! are coerced or skipped instead.

use super::marker::Marker;
use crate::error::FormatError;
use crate::format::RecordStream;
use crate::record::{coerce_to_string, is_id_line, Record, Role};
use serde_json::Value;
use std::io::Write;
use tracing::debug;

/// Render one record as T-Flow lines (without terminators).
pub fn segment_lines(record: &Record) -> Vec<String> {
    let mut lines = Vec::new();

    let id = record.get("id").filter(|value| !value.is_null());
    if let Some(id) = id {
        push_prefixed(&mut lines, Marker::Meta, &format!("id: {}", coerce_to_string(id)));
    }
    for meta in string_entries(record.get("meta")) {
        if id.is_some() && is_id_line(meta) {
            continue;
        }
        push_prefixed(&mut lines, Marker::Meta, meta);
    }

    for role in Role::ALL {
        let marker = Marker::for_role(role);
        for (index, paragraph) in role_paragraphs(record, role).iter().enumerate() {
            if index > 0 {
                lines.push(marker.as_char().to_string());
            }
            lines.extend(paragraph.iter().map(|line| marker.line(line)));
        }
    }

    for comment in string_entries(record.get("comments")) {
        push_prefixed(&mut lines, Marker::Comment, comment);
    }

    lines
}

/// Write records as T-Flow, one blank line between segments.
pub fn write_segments(
    records: RecordStream<'_>,
    out: &mut dyn Write,
) -> Result<usize, FormatError> {
    let mut written = 0;
    for record in records {
        let record = record?;
        if written > 0 {
            out.write_all(b"\n")?;
        }
        for line in segment_lines(&record) {
            out.write_all(line.as_bytes())?;
            out.write_all(b"\n")?;
        }
        written += 1;
    }
    out.flush()?;
    debug!(records = written, "t-flow written");
    Ok(written)
}

/// Meta and comment entries are written verbatim, always with the separator space.
///
/// An embedded newline would leave an unmarked line behind, so each piece gets its
/// own marker line.
fn push_prefixed(lines: &mut Vec<String>, marker: Marker, text: &str) {
    lines.extend(text.split('\n').map(|piece| format!("{} {}", marker.as_char(), piece)));
}

/// String items of an optional array field; anything else is ignored.
fn string_entries(value: Option<&Value>) -> impl Iterator<Item = &str> {
    value
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str)
}

/// Paragraphs of a role as line lists, preferring the array form over the scalar.
fn role_paragraphs(record: &Record, role: Role) -> Vec<Vec<String>> {
    if let Some(items) = record
        .get(role.paragraphs_field())
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
    {
        return items.iter().map(paragraph_lines).collect();
    }
    match record.get(role.field()) {
        Some(Value::String(text)) => text
            .split("\n\n")
            .map(|paragraph| paragraph.split('\n').map(str::to_string).collect())
            .collect(),
        _ => Vec::new(),
    }
}

fn paragraph_lines(item: &Value) -> Vec<String> {
    match item {
        Value::String(text) => split_lines(text),
        Value::Array(parts) => parts
            .iter()
            .flat_map(|part| split_lines(&coerce_to_string(part)))
            .collect(),
        other => vec![coerce_to_string(other)],
    }
}

fn split_lines(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
