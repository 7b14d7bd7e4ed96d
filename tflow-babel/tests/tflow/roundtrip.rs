//! Round-trip property: serialize → parse → normalize gives back the same segments.

use proptest::prelude::*;
use tflow_babel::formats::tflow::parse_segments;
use tflow_babel::{FormatRegistry, Record, RoleText, Segment};

/// A non-empty text line. May contain leading, trailing or inner spaces.
fn text_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.'üé]{1,12}"
}

fn role_text() -> impl Strategy<Value = Option<RoleText>> {
    let paragraph = prop::collection::vec(text_line(), 1..4).prop_map(|lines| lines.join("\n"));
    proptest::option::of(prop::collection::vec(paragraph, 1..4))
        .prop_map(|paragraphs| paragraphs.and_then(RoleText::from_paragraphs))
}

prop_compose! {
    fn segment()(
        id in proptest::option::of("[a-z0-9][a-z0-9-]{0,6}"),
        // never starts with `i`, so never an id line
        extra_meta in prop::collection::vec("[a-hj-z][a-z0-9 :]{0,10}", 0..3),
        source in role_text(),
        mt in role_text(),
        target in role_text(),
        comments in prop::collection::vec("[a-z !?]{0,10}", 0..3),
    ) -> Segment {
        let mut meta = Vec::new();
        if let Some(id) = &id {
            meta.push(format!("id: {id}"));
        }
        meta.extend(extra_meta);
        Segment { meta, id, source, mt, target, comments }
    }
}

fn non_empty_segment() -> impl Strategy<Value = Segment> {
    segment().prop_filter("segment must carry content", |s| !s.is_empty())
}

proptest! {
    #[test]
    fn segments_survive_a_round_trip(segments in prop::collection::vec(non_empty_segment(), 1..5)) {
        let registry = FormatRegistry::default();
        let records: Vec<Record> = segments.iter().cloned().map(Record::from).collect();
        let text = registry.serialize(records, "tflow").unwrap();

        let reparsed: Vec<Segment> = parse_segments(&text).collect::<Result<_, _>>().unwrap();
        prop_assert_eq!(reparsed, segments);
    }

    #[test]
    fn duplicate_id_meta_collapses_to_one_line(id in "[a-z0-9]{1,6}", other in "[a-h][a-z]{0,6}") {
        let segment = Segment {
            meta: vec![format!("{other}: x"), format!("ID: {id}"), format!("id: {id}")],
            id: Some(id.clone()),
            ..Segment::default()
        };
        let registry = FormatRegistry::default();
        let text = registry.serialize(vec![Record::from(segment)], "tflow").unwrap();
        prop_assert_eq!(text, format!("@ id: {id}\n@ {other}: x\n"));
    }

    #[test]
    fn separator_runs_collapse(runs in prop::collection::vec(1usize..5, 1..5)) {
        let mut source = String::new();
        for (index, run) in runs.iter().enumerate() {
            source.push_str(&format!("< p{index}\n"));
            source.push_str(&"<\n".repeat(*run));
        }
        let parsed: Vec<Segment> = parse_segments(&source).collect::<Result<_, _>>().unwrap();
        let expected: Vec<String> = (0..runs.len()).map(|i| format!("p{i}")).collect();
        prop_assert_eq!(&parsed[0].source.as_ref().unwrap().paragraphs, &expected);
    }
}
