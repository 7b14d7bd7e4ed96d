//! Common utilities for line-oriented formats
//!
//! All built-in formats read their input one line at a time. This module turns a
//! buffered reader into an iterator of terminator-free lines with I/O failures
//! already mapped into [`FormatError`].

use crate::error::FormatError;
use std::io::BufRead;

/// Iterate over the lines of `input`, stripping `\n` / `\r\n` terminators.
pub fn read_lines<'a>(
    input: Box<dyn BufRead + 'a>,
) -> impl Iterator<Item = Result<String, FormatError>> + 'a {
    input.lines().map(|line| {
        line.map(|mut text| {
            let trimmed = text.trim_end_matches('\r').len();
            text.truncate(trimmed);
            text
        })
        .map_err(FormatError::from)
    })
}

/// Iterate over the lines of an in-memory string, with the same terminator rules.
pub fn str_lines(source: &str) -> impl Iterator<Item = Result<String, FormatError>> + '_ {
    source
        .lines()
        .map(|line| Ok(line.trim_end_matches('\r').to_string()))
}
