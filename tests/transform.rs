//! End-to-end checks of segmenting and inline formatting through the public API.

use postdoc::{Block, InlineNode, ListItem, format_inline, markdown_to_html, segment};
use pretty_assertions::assert_eq;

fn plain(text: &str) -> InlineNode {
    InlineNode::PlainText(text.to_string())
}

fn code(text: &str) -> InlineNode {
    InlineNode::InlineCode(text.to_string())
}

#[test]
fn inline_formatting_examples() {
    assert_eq!(format_inline(""), vec![]);
    assert_eq!(format_inline("plain text"), vec![plain("plain text")]);
    assert_eq!(
        format_inline("use `npm install` now"),
        vec![plain("use "), code("npm install"), plain(" now")]
    );
    assert_eq!(
        format_inline("**bold** and `code`"),
        vec![
            InlineNode::Bold(vec![plain("bold")]),
            plain(" and "),
            code("code")
        ]
    );
    assert_eq!(
        format_inline("**unclosed bold"),
        vec![plain("**unclosed bold")]
    );
}

#[test]
fn blog_post() {
    let post = "\
## Getting started

Install with `cargo install postdoc`. It is **fast**.

### Requirements

You will need:
- a recent `rustc`
- **patience**

```toml
[page]
numbers = true
```

That's all.
";

    assert_eq!(
        segment(post),
        vec![
            Block::Heading2 {
                content: vec![plain("Getting started")]
            },
            Block::Paragraph {
                content: vec![
                    plain("Install with "),
                    code("cargo install postdoc"),
                    plain(". It is "),
                    InlineNode::Bold(vec![plain("fast")]),
                    plain("."),
                ]
            },
            Block::Heading3 {
                content: vec![plain("Requirements")]
            },
            Block::List {
                items: vec![
                    ListItem {
                        content: vec![plain("a recent "), code("rustc")]
                    },
                    ListItem {
                        content: vec![InlineNode::Bold(vec![plain("patience")])]
                    },
                ]
            },
            Block::CodeBlock {
                language: Some("toml".to_string()),
                content: "[page]\nnumbers = true".to_string(),
            },
            Block::Paragraph {
                content: vec![plain("That's all.")]
            },
        ]
    );
}

#[test]
fn code_fence_protects_markup() {
    let blocks = segment("before\n\n```\n- not\n\n## a list\n```\n\nafter");
    assert_eq!(blocks.len(), 3);
    assert_eq!(
        blocks[1],
        Block::CodeBlock {
            language: None,
            content: "- not\n\n## a list".to_string(),
        }
    );
}

#[test]
fn html_for_blog_post() {
    assert_eq!(
        markdown_to_html("## A & B\n\n- `x` first\n- then **y**"),
        "<h2>A &amp; B</h2>\n<ul>\n<li><code>x</code> first</li>\n<li>then <strong>y</strong></li>\n</ul>\n"
    );
}

#[test]
fn unterminated_fence_keeps_the_rest() {
    let blocks = segment("## Setup\n\n```\nstep one\n\n## not a heading");
    assert_eq!(
        blocks,
        vec![
            Block::Heading2 {
                content: vec![plain("Setup")]
            },
            Block::CodeBlock {
                language: None,
                content: "step one\n\n## not a heading".to_string(),
            },
        ]
    );
}
