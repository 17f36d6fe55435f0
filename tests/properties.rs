//! Property-based tests: segmenting never panics, keeps text in order, and
//! is stable when fed its own source rendering.

use std::mem::discriminant;

use postdoc::{Block, blocks_to_source, format_inline, segment, visible_text};
use proptest::prelude::*;

/// Strings built from the characters the markup cares about.
fn markup() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just("## ".to_string()),
            Just("### ".to_string()),
            Just("- ".to_string()),
            Just("```".to_string()),
            Just("`".to_string()),
            Just("**".to_string()),
            Just("*".to_string()),
            Just("\n".to_string()),
            Just("\n\n".to_string()),
            Just(" ".to_string()),
            "[a-z]{1,4}",
            "\\PC{1,3}",
        ],
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn block_text(block: &Block) -> String {
    match block {
        Block::Heading2 { content }
        | Block::Heading3 { content }
        | Block::Paragraph { content } => visible_text(content),
        Block::CodeBlock { content, .. } => content.clone(),
        Block::List { items } => items.iter().map(|item| visible_text(&item.content)).collect(),
    }
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|c| hay.any(|h| h == c))
}

fn without_markers(text: &str) -> String {
    text.chars().filter(|c| *c != '`' && *c != '*').collect()
}

proptest! {
    #[test]
    fn segment_keeps_text_in_order(raw in markup()) {
        let blocks = segment(&raw);
        let text: String = blocks.iter().map(block_text).collect();
        prop_assert!(is_subsequence(&text, &raw), "{text:?} not found in order in {raw:?}");
    }

    #[test]
    fn segment_accepts_any_string(raw in "\\PC*") {
        let _ = segment(&raw);
    }

    #[test]
    fn block_kinds_survive_source_rendering(raw in markup()) {
        let first = segment(&raw);
        let second = segment(&blocks_to_source(&first));
        let kinds = |blocks: &[Block]| blocks.iter().map(discriminant).collect::<Vec<_>>();
        prop_assert_eq!(kinds(&first[..]), kinds(&second[..]));
    }

    #[test]
    fn inline_keeps_visible_text(text in markup()) {
        let nodes = format_inline(&text);
        prop_assert_eq!(without_markers(&visible_text(&nodes)), without_markers(&text));
    }

    #[test]
    fn inline_without_markers_is_plain(text in "[^`*]+") {
        prop_assert_eq!(format_inline(&text), vec![postdoc::InlineNode::PlainText(text.clone())]);
    }
}
