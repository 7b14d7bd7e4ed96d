//! JSONL record format
//!
//! One JSON object per line. Reading skips blank lines and rejects any line that is
//! not an object; writing emits compact JSON with non-ASCII text kept literal and
//! keys in record order.

use crate::error::FormatError;
use crate::format::{Format, RecordStream};
use crate::formats::common::read_lines;
use crate::record::Record;
use serde_json::Value;
use std::io::{BufRead, Write};
use tracing::debug;

/// Format implementation for line-delimited JSON records
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonlFormat;

impl Format for JsonlFormat {
    fn name(&self) -> &str {
        "jsonl"
    }

    fn description(&self) -> &str {
        "Line-delimited JSON records"
    }

    fn file_extensions(&self) -> &[&str] {
        &["jsonl", "ndjson"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse<'a>(&self, input: Box<dyn BufRead + 'a>) -> Result<RecordStream<'a>, FormatError> {
        Ok(Box::new(RecordReader::new(read_lines(input))))
    }

    fn serialize(
        &self,
        records: RecordStream<'_>,
        out: &mut dyn Write,
    ) -> Result<usize, FormatError> {
        write_records(records, out)
    }
}

/// Lazy JSONL reader, fused after the first error.
pub struct RecordReader<I> {
    lines: I,
    line_number: usize,
    finished: bool,
}

impl<I> RecordReader<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    pub fn new(lines: I) -> Self {
        RecordReader {
            lines,
            line_number: 0,
            finished: false,
        }
    }
}

impl<I> Iterator for RecordReader<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    type Item = Result<Record, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        for line in self.lines.by_ref() {
            self.line_number += 1;
            let result = line.and_then(|line| parse_record(&line, self.line_number));
            match result {
                Ok(Some(record)) => return Some(Ok(record)),
                Ok(None) => continue,
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            }
        }
        self.finished = true;
        None
    }
}

/// Parse one JSONL line. Blank lines yield `Ok(None)`.
pub fn parse_record(line: &str, line_number: usize) -> Result<Option<Record>, FormatError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let malformed = |message: String| FormatError::MalformedRecord {
        line_number,
        line: line.to_string(),
        message,
    };
    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => Ok(Some(Record::from(map))),
        Ok(other) => Err(malformed(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
        Err(e) => Err(malformed(e.to_string())),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Write each record as a single JSON line.
pub fn write_records(
    records: RecordStream<'_>,
    out: &mut dyn Write,
) -> Result<usize, FormatError> {
    let mut written = 0;
    for record in records {
        let record = record?;
        serde_json::to_writer(&mut *out, &record).map_err(std::io::Error::from)?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;
    debug!(records = written, "jsonl written");
    Ok(written)
}
