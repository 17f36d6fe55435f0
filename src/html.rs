use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::block::{Block, InlineNode, ListItem};
use crate::config::HtmlConfig;

/// Convert blocks to an HTML fragment, one top-level element per block
pub fn blocks_to_html(blocks: &[Block], config: &HtmlConfig) -> String {
    let mut out = String::new();
    for block in blocks {
        emit_block(block, config, &mut out);
    }
    out
}

fn emit_block(block: &Block, config: &HtmlConfig, out: &mut String) {
    match block {
        Block::Heading2 { content } => {
            emit_element("h2", config.h2_class.as_deref(), content, config, out);
        }
        Block::Heading3 { content } => {
            emit_element("h3", config.h3_class.as_deref(), content, config, out);
        }
        Block::Paragraph { content } => {
            emit_element("p", config.paragraph_class.as_deref(), content, config, out);
        }
        Block::CodeBlock { language, content } => {
            open_tag("pre", config.code_block_class.as_deref(), out);
            let language_class = language.as_ref().map(|lang| format!("language-{lang}"));
            open_tag("code", language_class.as_deref(), out);
            out.push_str(&encode_text(content));
            out.push_str("</code></pre>\n");
        }
        Block::List { items } => {
            open_tag("ul", config.list_class.as_deref(), out);
            out.push('\n');
            for ListItem { content } in items {
                emit_element("li", config.list_item_class.as_deref(), content, config, out);
            }
            out.push_str("</ul>\n");
        }
    }
}

fn emit_element(
    tag: &str,
    class: Option<&str>,
    content: &[InlineNode],
    config: &HtmlConfig,
    out: &mut String,
) {
    open_tag(tag, class, out);
    nodes_to_html(content, config, out);
    out.push_str("</");
    out.push_str(tag);
    out.push_str(">\n");
}

fn open_tag(tag: &str, class: Option<&str>, out: &mut String) {
    out.push('<');
    out.push_str(tag);
    if let Some(class) = class {
        out.push_str(" class=\"");
        out.push_str(&encode_double_quoted_attribute(class));
        out.push('"');
    }
    out.push('>');
}

fn nodes_to_html(nodes: &[InlineNode], config: &HtmlConfig, out: &mut String) {
    for node in nodes {
        match node {
            InlineNode::PlainText(text) => out.push_str(&encode_text(text)),
            InlineNode::InlineCode(code) => {
                open_tag("code", config.inline_code_class.as_deref(), out);
                out.push_str(&encode_text(code));
                out.push_str("</code>");
            }
            InlineNode::Bold(inner) => {
                open_tag("strong", config.bold_class.as_deref(), out);
                nodes_to_html(inner, config, out);
                out.push_str("</strong>");
            }
        }
    }
}
