use tracing::{debug, trace, warn};

use crate::block::{Block, Document, ListItem};
use crate::inline::format_inline;

const FENCE: &str = "```";
const UNIT_SEPARATOR: &str = "\n\n";
const HEADING2: &str = "## ";
const HEADING3: &str = "### ";
const LIST_MARKER: &str = "- ";

/// Segment raw text into blocks
pub fn segment(raw: &str) -> Document {
    let mut blocks = Vec::new();
    let mut cursor = 0;

    // Fenced code is cut out first so nothing inside it is ever classified
    while let Some(offset) = raw[cursor..].find(FENCE) {
        let open = cursor + offset;
        push_prose(&raw[cursor..open], &mut blocks);

        let body_start = open + FENCE.len();
        match raw[body_start..].find(FENCE) {
            Some(len) => {
                let close = body_start + len;
                blocks.push(code_block(&raw[body_start..close]));
                cursor = close + FENCE.len();
            }
            None => {
                warn!(
                    offset = open,
                    "unterminated code fence, treating the rest of the document as code"
                );
                blocks.push(code_block(&raw[body_start..]));
                cursor = raw.len();
            }
        }
    }
    push_prose(&raw[cursor..], &mut blocks);

    debug!(blocks = blocks.len(), "segmented document");
    blocks
}

/// Build a code block from the text between the fence markers.
///
/// The rest of the opening line is the info string. Without a line break the
/// whole text is the payload.
fn code_block(inner: &str) -> Block {
    let (language, content) = match inner.split_once('\n') {
        Some((info, body)) => {
            let info = info.trim();
            let language = (!info.is_empty()).then(|| info.to_string());
            (language, body.strip_suffix('\n').unwrap_or(body))
        }
        None => (None, inner),
    };

    Block::CodeBlock {
        language,
        content: content.to_string(),
    }
}

fn push_prose(prose: &str, blocks: &mut Vec<Block>) {
    for unit in prose.split(UNIT_SEPARATOR) {
        if unit.trim().is_empty() {
            continue;
        }
        let block = classify(unit.trim_matches('\n'));
        trace!(kind = block.kind(), "classified unit");
        blocks.push(block);
    }
}

/// First matching rule wins: heading2, heading3, list, paragraph.
fn classify(unit: &str) -> Block {
    if let Some(text) = unit.strip_prefix(HEADING2) {
        return Block::Heading2 {
            content: format_inline(text),
        };
    }
    if let Some(text) = unit.strip_prefix(HEADING3) {
        return Block::Heading3 {
            content: format_inline(text),
        };
    }
    if unit.lines().any(|line| line.starts_with(LIST_MARKER)) {
        // Lines without a marker do not belong to any item and are dropped
        let items = unit
            .lines()
            .filter_map(|line| line.strip_prefix(LIST_MARKER))
            .map(|text| ListItem {
                content: format_inline(text),
            })
            .collect();
        return Block::List { items };
    }

    Block::Paragraph {
        content: format_inline(unit),
    }
}
