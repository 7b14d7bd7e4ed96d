//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name, and any parsing format can be
//! piped into any serializing format with [`FormatRegistry::convert`].

use crate::error::FormatError;
use crate::format::Format;
use crate::record::Record;
use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use tracing::debug;

/// Registry of record formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let jsonl = registry.convert_str("< Hello\n", "tflow", "jsonl")?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        self.formats
            .values()
            .find(|format| format.file_extensions().contains(&extension))
            .map(|format| format.name().to_string())
    }

    /// Look up a format and check that it can parse
    fn parser(&self, name: &str) -> Result<&dyn Format, FormatError> {
        let fmt = self.get(name)?;
        if !fmt.supports_parsing() {
            return Err(FormatError::NotSupported(format!(
                "Format '{name}' does not support parsing"
            )));
        }
        Ok(fmt)
    }

    /// Look up a format and check that it can serialize
    fn serializer(&self, name: &str) -> Result<&dyn Format, FormatError> {
        let fmt = self.get(name)?;
        if !fmt.supports_serialization() {
            return Err(FormatError::NotSupported(format!(
                "Format '{name}' does not support serialization"
            )));
        }
        Ok(fmt)
    }

    /// Check that `from` can parse and `to` can serialize, without reading anything
    pub fn check_conversion(&self, from: &str, to: &str) -> Result<(), FormatError> {
        self.parser(from)?;
        self.serializer(to)?;
        Ok(())
    }

    /// Stream `input` in format `from` into `out` in format `to`
    ///
    /// Both formats are validated before any input is read. Returns the number of
    /// records written. Output already written before an error is not rolled back.
    pub fn convert<'a>(
        &self,
        input: Box<dyn BufRead + 'a>,
        from: &str,
        to: &str,
        out: &mut dyn Write,
    ) -> Result<usize, FormatError> {
        let reader = self.parser(from)?;
        let writer = self.serializer(to)?;
        let records = reader.parse(input)?;
        let written = writer.serialize(records, out)?;
        debug!(from, to, records = written, "conversion finished");
        Ok(written)
    }

    /// Parse source text into records using the specified format
    pub fn parse(&self, source: &str, format: &str) -> Result<Vec<Record>, FormatError> {
        let fmt = self.parser(format)?;
        fmt.parse(Box::new(source.as_bytes()))?.collect()
    }

    /// Serialize records into text using the specified format
    pub fn serialize(&self, records: Vec<Record>, format: &str) -> Result<String, FormatError> {
        let fmt = self.serializer(format)?;
        let mut buffer = Vec::new();
        let stream = records.into_iter().map(Ok::<_, FormatError>);
        fmt.serialize(Box::new(stream), &mut buffer)?;
        into_text(buffer)
    }

    /// Convert source text between two formats
    pub fn convert_str(&self, source: &str, from: &str, to: &str) -> Result<String, FormatError> {
        let mut buffer = Vec::new();
        self.convert(Box::new(source.as_bytes()), from, to, &mut buffer)?;
        into_text(buffer)
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::tflow::TflowFormat);
        registry.register(crate::formats::jsonl::JsonlFormat);
        registry.register(crate::formats::markdown::MarkdownFormat::default());

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn into_text(buffer: Vec<u8>) -> Result<String, FormatError> {
    String::from_utf8(buffer)
        .map_err(|e| FormatError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
