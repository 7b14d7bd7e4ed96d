//! Markdown format tests
//!
//! Markdown is import only: documents are split into blocks, one segment each.

mod import;
