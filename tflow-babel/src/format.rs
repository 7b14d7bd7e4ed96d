//! Format trait definition
//!
//! This module defines the core Format trait that all format implementations must implement.
//! The trait provides a uniform, streaming interface: parsing turns a line source into a lazy
//! [`RecordStream`], serializing drains a stream into a writer.

use crate::error::FormatError;
use crate::record::Record;
use std::io::{BufRead, Write};

/// Lazy, single-pass sequence of records produced by a parser.
///
/// The stream ends after the first error.
pub type RecordStream<'a> = Box<dyn Iterator<Item = Result<Record, FormatError>> + 'a>;

/// Trait for record formats
///
/// Implementors provide conversion between a textual representation and [`Record`]s.
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn supports_parsing(&self) -> bool {
///         true
///     }
///
///     fn parse<'a>(&self, input: Box<dyn BufRead + 'a>) -> Result<RecordStream<'a>, FormatError> {
///         todo!()
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "tflow", "jsonl", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["tflow"], ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Whether this format supports parsing (source → records)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (records → source)
    fn supports_serialization(&self) -> bool {
        false
    }

    /// Parse a line source into a lazy record stream
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support parsing should override this method.
    fn parse<'a>(&self, _input: Box<dyn BufRead + 'a>) -> Result<RecordStream<'a>, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    /// Serialize a record stream into `out`, returning the number of records written
    ///
    /// Default implementation returns NotSupported error.
    /// Formats that support serialization should override this method.
    fn serialize(
        &self,
        _records: RecordStream<'_>,
        _out: &mut dyn Write,
    ) -> Result<usize, FormatError> {
        Err(FormatError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }
}
