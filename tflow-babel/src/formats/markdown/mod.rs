//! Markdown format implementation (import only)
//!
//! Markdown documents are brought into T-Flow by cutting them into blocks, one
//! segment per block, so translators can post-edit a document paragraph by
//! paragraph. There is no export and no round-trip contract.
//!
//! # Block Rules
//!
//! | Input                        | Result                                   |
//! |------------------------------|------------------------------------------|
//! | Blank line (outside a fence) | Ends the current block                   |
//! | Line starting with ```` ``` ```` | Toggles fenced code; kept in the block |
//! | Any line inside a fence      | Kept in the block, blank lines included  |
//! | Anything else                | Appended to the current block            |
//!
//! Each block becomes a record carrying `meta: ["id: NNNN"]`, `id`, and the block
//! text as `source` / `source_paragraphs`. Through the T-Flow serializer that is
//! exactly:
//!
//! ```text
//! @ id: 0001
//! < first line of the block
//! <
//! < line after an empty line
//! ```
//!
//! # Library Choice
//!
//! No Markdown library is involved: block boundaries are purely line based, which
//! keeps list items, tables and raw HTML exactly as the author wrote them.

pub mod parser;

use crate::error::FormatError;
use crate::format::{Format, RecordStream};
use crate::formats::common::read_lines;
use std::io::BufRead;

use parser::BlockRecords;

/// Widest zero padding accepted for generated ids.
pub const MAX_ID_WIDTH: usize = 64;

/// Numbering of generated segment ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownOptions {
    /// Id of the first block
    pub id_start: u64,
    /// Minimum number of digits; shorter ids are zero padded
    pub id_width: usize,
}

impl MarkdownOptions {
    /// Reject options the block numbering cannot honor.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.id_width > MAX_ID_WIDTH {
            return Err(FormatError::InvalidOption(format!(
                "markdown id width {} exceeds the maximum of {MAX_ID_WIDTH}",
                self.id_width
            )));
        }
        Ok(())
    }
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        MarkdownOptions {
            id_start: 1,
            id_width: 4,
        }
    }
}

/// Format implementation for Markdown
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkdownFormat {
    options: MarkdownOptions,
}

impl MarkdownFormat {
    pub fn new(options: MarkdownOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> MarkdownOptions {
        self.options
    }
}

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Markdown, one segment per block (import only)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse<'a>(&self, input: Box<dyn BufRead + 'a>) -> Result<RecordStream<'a>, FormatError> {
        self.options.validate()?;
        Ok(Box::new(BlockRecords::new(read_lines(input), self.options)))
    }
}
