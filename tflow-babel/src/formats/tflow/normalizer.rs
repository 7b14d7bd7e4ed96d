//! Segment normalization (raw segment → record shape)

use super::parser::{Paragraphs, RawSegment};
use crate::record::{id_from_meta, Role, RoleText, Segment};

/// Reshape a raw segment into its normalized form.
///
/// Returns `None` for a segment with no meta, no role text and no comments, which
/// callers suppress instead of emitting.
pub fn normalize(raw: RawSegment) -> Option<Segment> {
    let RawSegment {
        meta,
        source,
        mt,
        target,
        comments,
    } = raw;

    let mut segment = Segment {
        id: meta
            .iter()
            .find_map(|line| id_from_meta(line))
            .map(str::to_string),
        meta,
        comments,
        ..Segment::default()
    };
    for (role, paragraphs) in [(Role::Source, source), (Role::Mt, mt), (Role::Target, target)] {
        *segment.role_mut(role) = RoleText::from_paragraphs(finalize_paragraphs(paragraphs));
    }

    (!segment.is_empty()).then_some(segment)
}

/// Drop one trailing empty paragraph (and any stray empty ones), then join lines.
fn finalize_paragraphs(mut paragraphs: Paragraphs) -> Vec<String> {
    if paragraphs.last().is_some_and(Vec::is_empty) {
        paragraphs.pop();
    }
    paragraphs
        .into_iter()
        .filter(|p| !p.is_empty())
        .map(|p| p.join("\n"))
        .collect()
}
