use crate::block::{Block, InlineNode, ListItem};
use crate::config::Config;

/// Convert blocks to Typst markup
pub fn blocks_to_typst(blocks: &[Block], config: &Config) -> String {
    let mut out = String::new();

    // Set up paragraph settings to prevent widows/orphans
    out.push_str("#set par(linebreaks: \"optimized\")\n");
    if config.page.numbers {
        out.push_str("#set page(numbering: \"1\")\n");
    }
    out.push('\n');

    let mut i = 0;
    while i < blocks.len() {
        let block = &blocks[i];

        if is_heading(block) && config.layout.keep_heading_with_next {
            // Keep heading with following content using a block that prevents breaks
            out.push_str("#block(breakable: false)[\n");
            emit_block(block, config, &mut out);

            if i + 1 < blocks.len() {
                i += 1;
                emit_block(&blocks[i], config, &mut out);
            }
            out.push_str("]\n\n");
        } else {
            emit_block(block, config, &mut out);
        }

        i += 1;
    }

    out
}

fn is_heading(block: &Block) -> bool {
    matches!(block, Block::Heading2 { .. } | Block::Heading3 { .. })
}

fn emit_heading(marker: &str, content: &[InlineNode], out: &mut String) {
    // A Typst heading ends at the line break
    let mut text = String::new();
    nodes_to_typst(content, &mut text);

    out.push_str(marker);
    out.push(' ');
    out.push_str(&text.replace('\n', " "));
    out.push_str("\n\n");
}

fn emit_block(block: &Block, config: &Config, out: &mut String) {
    match block {
        Block::Heading2 { content } => emit_heading("==", content, out),
        Block::Heading3 { content } => emit_heading("===", content, out),
        Block::Paragraph { content } => {
            nodes_to_typst(content, out);
            out.push_str("\n\n");
        }
        Block::CodeBlock { language, content } => {
            let unbreakable = config.layout.unbreakable_code;
            if unbreakable {
                out.push_str("#block(breakable: false)[\n");
            }
            out.push_str("```");
            if let Some(lang) = language {
                out.push_str(lang);
            }
            out.push('\n');
            out.push_str(content);
            if !content.ends_with('\n') {
                out.push('\n');
            }
            out.push_str("```\n");
            if unbreakable {
                out.push_str("]\n");
            }
            out.push('\n');
        }
        Block::List { items } => {
            // Keep short lists together, allow breaks in long ones
            if items.len() <= config.layout.unbreakable_list_max_items {
                out.push_str("#block(breakable: false)[\n");
                list_to_typst(items, out);
                out.push_str("]\n\n");
            } else {
                list_to_typst(items, out);
                out.push('\n');
            }
        }
    }
}

fn nodes_to_typst(nodes: &[InlineNode], out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::PlainText(text) => escape_text(text, out),
            InlineNode::Bold(inner) => {
                out.push('*');
                nodes_to_typst(inner, out);
                out.push('*');
            }
            InlineNode::InlineCode(code) => {
                out.push('`');
                out.push_str(code);
                out.push('`');
            }
        }
    }
}

/// Escape characters Typst treats as markup.
fn escape_text(text: &str, out: &mut String) {
    let mut line_start = out.is_empty() || out.ends_with('\n');
    // Digits since the start of the line, as in a `1.` enum marker
    let mut leading_digits = false;
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' | '~' | '/' => {
                out.push('\\');
                out.push(ch);
            }
            // List and heading markers only matter at the start of a line
            '-' | '+' | '=' if line_start => {
                out.push('\\');
                out.push(ch);
            }
            '.' if leading_digits => out.push_str("\\."),
            _ => out.push(ch),
        }
        leading_digits = ch.is_ascii_digit() && (line_start || leading_digits);
        line_start = ch == '\n' || (line_start && ch.is_whitespace());
    }
}

fn list_to_typst(items: &[ListItem], out: &mut String) {
    for item in items {
        out.push_str("- ");
        let mut text = String::new();
        nodes_to_typst(&item.content, &mut text);
        out.push_str(&text.replace('\n', " "));
        out.push('\n');
    }
}
