use crate::block::{Block, InlineNode};

/// Render blocks back to the smallest markup that segments into the same blocks.
///
/// Blocks are separated by a blank line. Inline text is reproduced with its
/// markers, so unpaired markers come back exactly as they were written.
pub fn blocks_to_source(blocks: &[Block]) -> String {
    let mut out = String::new();
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str("\n\n");
        }
        emit_block(block, &mut out);
    }
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

fn emit_block(block: &Block, out: &mut String) {
    match block {
        Block::Heading2 { content } => {
            out.push_str("## ");
            nodes_to_source(content, out);
        }
        Block::Heading3 { content } => {
            out.push_str("### ");
            nodes_to_source(content, out);
        }
        Block::Paragraph { content } => nodes_to_source(content, out),
        Block::CodeBlock { language, content } => {
            out.push_str("```");
            if let Some(lang) = language {
                out.push_str(lang);
            }
            out.push('\n');
            out.push_str(content);
            out.push_str("\n```");
        }
        Block::List { items } => {
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push('\n');
                }
                out.push_str("- ");
                nodes_to_source(&item.content, out);
            }
        }
    }
}

/// Inline nodes with their markers restored.
fn nodes_to_source(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::PlainText(text) => out.push_str(text),
            InlineNode::InlineCode(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
            InlineNode::Bold(inner) => {
                out.push_str("**");
                nodes_to_source(inner, out);
                out.push_str("**");
            }
        }
    }
}
