//! Format implementations
//!
//! This module contains all format implementations that convert between
//! [`Record`](crate::record::Record) streams and their text representations.

pub mod common;
pub mod jsonl;
pub mod markdown;
pub mod tflow;

pub use jsonl::JsonlFormat;
pub use markdown::{MarkdownFormat, MarkdownOptions, MAX_ID_WIDTH};
pub use tflow::TflowFormat;
