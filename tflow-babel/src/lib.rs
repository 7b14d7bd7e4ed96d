//! Multi-format interoperability for T-Flow post-editing corpora
//!
//!     This crate converts between T-Flow (the marker-line format translators edit by hand),
//!     line-delimited JSON records, and Markdown (import only).
//!
//!     This is a pure lib, that is, it powers tflow-cli but is shell agnostic: no code here
//!     assumes a shell environment, be it printing to std streams, env vars etc. Inputs are
//!     `BufRead`s and outputs are `Write`s supplied by the caller.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── record.rs               # Segment (typed) and Record (loose) models
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formats
//!     │   ├── common              # Line reading shared by all formats
//!     │   ├── tflow
//!     │   │   ├── marker.rs       # The five line markers
//!     │   │   ├── parser.rs       # Streaming segment parser
//!     │   │   ├── normalizer.rs   # Raw segment → normalized segment
//!     │   │   ├── serializer.rs   # Record → T-Flow lines
//!     │   │   └── mod.rs
//!     │   ├── jsonl
//!     │   └── markdown
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         ├── <testname>.rs
//!         └── fixtures
//!         ├── corpus.tflow
//!         ├── corpus.jsonl
//!         └── document.md
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Core Algorithms
//!
//!     The interesting part is the T-Flow state machine: lines are bucketed by marker into a raw
//!     segment, blank lines close segments, bare markers close paragraphs, and the normalizer
//!     folds the result into scalar + paragraph-array fields. Its inverse, the serializer, works
//!     on loosely typed records so hand-written JSONL still converts.
//!
//! Streaming
//!
//!     Every parser is a lazy iterator holding at most one segment (or block, or record) in
//!     memory, so corpora of any size convert in bounded memory. Streams end at the first error;
//!     nothing malformed is skipped or repaired.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait. Formats have a
//!     parse() and/or serialize() method, a name and file extensions. See the trait def [./format.rs ]
//!     - Format trait: Uniform interface for all formats (parsing and/or serialization)
//!     - FormatRegistry: Centralized discovery and selection of formats
//!     - Format implementations: tflow, jsonl, markdown
//!
pub mod error;
pub mod format;
pub mod formats;
pub mod record;
pub mod registry;

pub use error::FormatError;
pub use format::{Format, RecordStream};
pub use record::{Record, Role, RoleText, Segment};
pub use registry::FormatRegistry;
