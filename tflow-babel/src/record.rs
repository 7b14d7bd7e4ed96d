//! Record model shared by all formats
//!
//! Two shapes live here:
//!
//! - [`Segment`]: the typed, normalized translation unit produced by the T-Flow
//!   parser. Every field is optional and absent fields carry no content.
//! - [`Record`]: the loosely typed JSON object that formats exchange. Records read
//!   from JSONL may be hand authored, so fields can be missing or carry unexpected
//!   types; consumers must coerce rather than reject.
//!
//! A `Segment` always converts into a `Record` with keys in the canonical order
//! `meta, id, source, source_paragraphs, mt, mt_paragraphs, target,
//! target_paragraphs, comments`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The three text roles of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Source,
    Mt,
    Target,
}

impl Role {
    /// All roles, in T-Flow line order.
    pub const ALL: [Role; 3] = [Role::Source, Role::Mt, Role::Target];

    /// Name of the scalar record field (`source`, `mt`, `target`).
    pub fn field(self) -> &'static str {
        match self {
            Role::Source => "source",
            Role::Mt => "mt",
            Role::Target => "target",
        }
    }

    /// Name of the parallel array field (`source_paragraphs`, ...).
    pub fn paragraphs_field(self) -> &'static str {
        match self {
            Role::Source => "source_paragraphs",
            Role::Mt => "mt_paragraphs",
            Role::Target => "target_paragraphs",
        }
    }
}

/// Finalized text of one role: the scalar form plus the paragraphs it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleText {
    pub text: String,
    pub paragraphs: Vec<String>,
}

impl RoleText {
    /// Build from paragraph strings. Returns `None` when there are no paragraphs.
    pub fn from_paragraphs(paragraphs: Vec<String>) -> Option<Self> {
        if paragraphs.is_empty() {
            return None;
        }
        Some(RoleText {
            text: paragraphs.join("\n\n"),
            paragraphs,
        })
    }
}

/// A normalized translation segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Segment {
    pub meta: Vec<String>,
    pub id: Option<String>,
    pub source: Option<RoleText>,
    pub mt: Option<RoleText>,
    pub target: Option<RoleText>,
    pub comments: Vec<String>,
}

impl Segment {
    pub fn role(&self, role: Role) -> Option<&RoleText> {
        match role {
            Role::Source => self.source.as_ref(),
            Role::Mt => self.mt.as_ref(),
            Role::Target => self.target.as_ref(),
        }
    }

    pub fn role_mut(&mut self, role: Role) -> &mut Option<RoleText> {
        match role {
            Role::Source => &mut self.source,
            Role::Mt => &mut self.mt,
            Role::Target => &mut self.target,
        }
    }

    /// True when the segment carries no meta, no role text and no comments.
    pub fn is_empty(&self) -> bool {
        self.meta.is_empty()
            && Role::ALL.iter().all(|role| self.role(*role).is_none())
            && self.comments.is_empty()
    }
}

/// Loosely typed record, a JSON object with insertion-ordered keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Record(Map::new())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Record(map)
    }
}

impl From<Segment> for Record {
    fn from(segment: Segment) -> Self {
        let mut record = Record::new();
        if !segment.meta.is_empty() {
            record.insert("meta", string_array(segment.meta));
        }
        if let Some(id) = segment.id {
            record.insert("id", Value::String(id));
        }
        let Segment {
            source,
            mt,
            target,
            comments,
            ..
        } = segment;
        for (role, text) in [(Role::Source, source), (Role::Mt, mt), (Role::Target, target)] {
            if let Some(text) = text {
                record.insert(role.field(), Value::String(text.text));
                record.insert(role.paragraphs_field(), string_array(text.paragraphs));
            }
        }
        if !comments.is_empty() {
            record.insert("comments", string_array(comments));
        }
        record
    }
}

fn string_array(items: Vec<String>) -> Value {
    Value::Array(items.into_iter().map(Value::String).collect())
}

/// Whether a meta line carries the segment id (`id:` prefix, ASCII case-insensitive).
pub fn is_id_line(meta: &str) -> bool {
    meta.get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("id:"))
}

/// Extract the id value from a meta line: everything after the first colon, trimmed.
pub fn id_from_meta(meta: &str) -> Option<&str> {
    if !is_id_line(meta) {
        return None;
    }
    meta.split_once(':').map(|(_, value)| value.trim())
}

/// Coerce a loosely typed JSON value to the string written into a text line.
///
/// Strings pass through unchanged; anything else uses its compact JSON text.
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
