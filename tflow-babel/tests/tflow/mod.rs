//! T-Flow format tests
//!
//! Parsing, serialization, and the round-trip property between them.

mod parse;
mod roundtrip;
mod serialize;
