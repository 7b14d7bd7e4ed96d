//! T-Flow format implementation
//!
//! T-Flow is a line-marker format for machine translation post-editing. A corpus is
//! a sequence of segments separated by blank lines; every other line starts with a
//! marker naming its role:
//!
//! | Marker | Role                    | Record fields                     |
//! |--------|-------------------------|-----------------------------------|
//! | `@`    | metadata                | `meta`, `id` (from `id:` lines)   |
//! | `<`    | source text             | `source`, `source_paragraphs`     |
//! | `~`    | machine translation     | `mt`, `mt_paragraphs`             |
//! | `>`    | post-edited target      | `target`, `target_paragraphs`     |
//! | `#`    | free-form comment       | `comments`                        |
//!
//! A single space after the marker separates it from the payload. A bare marker
//! inside a text role is a paragraph break (or, on output, an empty line).
//!
//! ```text
//! @ id: 001
//! < Hello world.
//! ~ Bonjour monde.
//! > Bonjour le monde.
//! # fix punctuation
//! ```
//!
//! Pipeline: lines → [`parser::SegmentParser`] (raw segments) →
//! [`normalizer::normalize`] → [`Record`](crate::record::Record). Serialization
//! skips the normalizer and renders records directly with
//! [`serializer::segment_lines`].

pub mod marker;
pub mod normalizer;
pub mod parser;
pub mod serializer;

use crate::error::FormatError;
use crate::format::{Format, RecordStream};
use crate::formats::common::read_lines;
use crate::record::Record;
use std::io::{BufRead, Write};

pub use marker::Marker;
pub use parser::{parse_segments, RawSegment, SegmentParser};

/// Format implementation for T-Flow
#[derive(Debug, Default, Clone, Copy)]
pub struct TflowFormat;

impl Format for TflowFormat {
    fn name(&self) -> &str {
        "tflow"
    }

    fn description(&self) -> &str {
        "T-Flow post-editing format"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tflow", "tf"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse<'a>(&self, input: Box<dyn BufRead + 'a>) -> Result<RecordStream<'a>, FormatError> {
        let segments = SegmentParser::new(read_lines(input));
        Ok(Box::new(segments.map(|segment| segment.map(Record::from))))
    }

    fn serialize(
        &self,
        records: RecordStream<'_>,
        out: &mut dyn Write,
    ) -> Result<usize, FormatError> {
        serializer::write_segments(records, out)
    }
}
