//! T-Flow parsing (T-Flow → segments)
//!
//! The parser is a forward-only iterator over lines. It buckets marker lines into
//! a [`RawSegment`] until a blank line or the end of input, then hands the raw
//! segment to the normalizer. Only one raw segment is alive at a time, so memory
//! stays bounded no matter how large the corpus is.

use super::marker::Marker;
use super::normalizer::normalize;
use crate::error::FormatError;
use crate::formats::common::str_lines;
use crate::record::{Role, Segment};
use tracing::debug;

/// Lines of one text role, grouped into paragraphs.
pub type Paragraphs = Vec<Vec<String>>;

/// A segment still being read: marker payloads in file order, nothing joined yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSegment {
    pub meta: Vec<String>,
    pub source: Paragraphs,
    pub mt: Paragraphs,
    pub target: Paragraphs,
    pub comments: Vec<String>,
}

impl RawSegment {
    fn paragraphs_mut(&mut self, role: Role) -> &mut Paragraphs {
        match role {
            Role::Source => &mut self.source,
            Role::Mt => &mut self.mt,
            Role::Target => &mut self.target,
        }
    }

    /// Route one payload by marker.
    pub fn push(&mut self, marker: Marker, payload: &str) {
        match marker.role() {
            Some(role) => self.push_text(role, payload),
            None if marker == Marker::Meta => self.meta.push(payload.to_string()),
            None => self.comments.push(payload.to_string()),
        }
    }

    /// Add a text line to a role.
    ///
    /// An empty payload closes the current paragraph, but only when that paragraph
    /// has content, so runs of bare markers collapse into a single break.
    pub fn push_text(&mut self, role: Role, payload: &str) {
        let paragraphs = self.paragraphs_mut(role);
        if paragraphs.is_empty() {
            paragraphs.push(Vec::new());
        }
        if payload.is_empty() {
            if paragraphs.last().is_some_and(|p| !p.is_empty()) {
                paragraphs.push(Vec::new());
            }
        } else if let Some(current) = paragraphs.last_mut() {
            current.push(payload.to_string());
        }
    }
}

/// Streaming T-Flow parser.
///
/// Yields one normalized [`Segment`] per non-empty blank-line-delimited block. The
/// first error (malformed line or failing line source) is yielded once and ends the
/// iteration.
pub struct SegmentParser<I> {
    lines: I,
    current: Option<RawSegment>,
    line_number: usize,
    finished: bool,
}

impl<I> SegmentParser<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    pub fn new(lines: I) -> Self {
        SegmentParser {
            lines,
            current: None,
            line_number: 0,
            finished: false,
        }
    }

    /// Close the open segment, returning its normalized form if it had content.
    fn flush(&mut self) -> Option<Segment> {
        let segment = normalize(self.current.take()?)?;
        debug!(
            line = self.line_number,
            id = segment.id.as_deref().unwrap_or(""),
            "segment parsed"
        );
        Some(segment)
    }

    fn accept(&mut self, line: &str) -> Result<(), FormatError> {
        let (marker, payload) =
            Marker::split_line(line).ok_or_else(|| FormatError::MalformedLine {
                line_number: self.line_number,
                line: line.to_string(),
            })?;
        self.current
            .get_or_insert_with(RawSegment::default)
            .push(marker, payload);
        Ok(())
    }

    fn fail(&mut self, error: FormatError) -> Option<Result<Segment, FormatError>> {
        self.finished = true;
        self.current = None;
        Some(Err(error))
    }
}

impl<I> Iterator for SegmentParser<I>
where
    I: Iterator<Item = Result<String, FormatError>>,
{
    type Item = Result<Segment, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        loop {
            let line = match self.lines.next() {
                Some(Ok(line)) => line,
                Some(Err(error)) => return self.fail(error),
                None => {
                    self.finished = true;
                    return self.flush().map(Ok);
                }
            };
            self.line_number += 1;

            if line.trim().is_empty() {
                if let Some(segment) = self.flush() {
                    return Some(Ok(segment));
                }
                continue;
            }

            if let Err(error) = self.accept(&line) {
                return self.fail(error);
            }
        }
    }
}

/// Parse T-Flow text held in memory.
pub fn parse_segments(
    source: &str,
) -> SegmentParser<impl Iterator<Item = Result<String, FormatError>> + '_> {
    SegmentParser::new(str_lines(source))
}
