//! Markdown block splitting (Markdown → records)
//!
//! This is deliberately not a Markdown parser. Text is cut into blocks at blank
//! lines, except inside fenced code blocks, where every line (blank ones included)
//! stays with the fence. Each block becomes one source-only record.

use super::MarkdownOptions;
use crate::error::FormatError;
use crate::record::{Record, Role};
use serde_json::Value;
use tracing::trace;

const FENCE: &str = "```";

/// Lazy block splitter over Markdown lines.
pub struct BlockSplitter<I> {
    lines: I,
    in_code: bool,
    finished: bool,
}

impl<I> BlockSplitter<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    pub fn new(lines: I) -> Self {
        BlockSplitter {
            lines,
            in_code: false,
            finished: false,
        }
    }
}

impl<I> Iterator for BlockSplitter<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    type Item = Result<Vec<String>, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let mut block = Vec::new();
        for line in self.lines.by_ref() {
            let line = match line {
                Ok(line) => line,
                Err(error) => {
                    self.finished = true;
                    return Some(Err(error));
                }
            };
            let stripped = line.trim();

            if stripped.starts_with(FENCE) {
                self.in_code = !self.in_code;
            } else if !self.in_code && stripped.is_empty() {
                if block.is_empty() {
                    continue;
                }
                return Some(Ok(block));
            }
            block.push(line);
        }
        self.finished = true;
        (!block.is_empty()).then_some(Ok(block))
    }
}

/// Turns Markdown blocks into numbered records.
pub struct BlockRecords<I> {
    blocks: BlockSplitter<I>,
    next_id: u64,
    id_width: usize,
}

impl<I> BlockRecords<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    pub fn new(lines: I, options: MarkdownOptions) -> Self {
        BlockRecords {
            blocks: BlockSplitter::new(lines),
            next_id: options.id_start,
            id_width: options.id_width,
        }
    }
}

impl<I> Iterator for BlockRecords<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    type Item = Result<Record, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let block = match self.blocks.next()? {
            Ok(block) => block,
            Err(error) => return Some(Err(error)),
        };
        let id = format!("{:0width$}", self.next_id, width = self.id_width);
        self.next_id += 1;
        trace!(id = %id, lines = block.len(), "markdown block");
        Some(Ok(block_record(id, &block)))
    }
}

/// Build the record for one block: its id plus the block text as a single paragraph.
pub fn block_record(id: String, block: &[String]) -> Record {
    let text = block.join("\n");
    let mut record = Record::new();
    record.insert("meta", Value::Array(vec![Value::String(format!("id: {id}"))]));
    record.insert("id", Value::String(id));
    record.insert(Role::Source.field(), Value::String(text.clone()));
    record.insert(
        Role::Source.paragraphs_field(),
        Value::Array(vec![Value::String(text)]),
    );
    record
}
