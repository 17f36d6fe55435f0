use serde::Serialize;

/// Inline text spans with formatting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum InlineNode {
    PlainText(String),
    InlineCode(String),
    /// Bold never contains another `Bold`, only plain text and inline code.
    Bold(Vec<InlineNode>),
}

impl InlineNode {
    /// The text a reader sees, with all markers removed.
    pub fn visible_text(&self) -> String {
        match self {
            InlineNode::PlainText(text) | InlineNode::InlineCode(text) => text.clone(),
            InlineNode::Bold(inner) => visible_text(inner),
        }
    }
}

/// Concatenated visible text of a run of inline nodes.
pub fn visible_text(nodes: &[InlineNode]) -> String {
    nodes.iter().map(InlineNode::visible_text).collect()
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub content: Vec<InlineNode>,
}

/// Block-level elements segmented from the source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Heading2 {
        content: Vec<InlineNode>,
    },
    Heading3 {
        content: Vec<InlineNode>,
    },
    Paragraph {
        content: Vec<InlineNode>,
    },
    CodeBlock {
        /// Info string after the opening fence, if any.
        language: Option<String>,
        content: String,
    },
    List {
        items: Vec<ListItem>,
    },
}

impl Block {
    /// Short name of the variant, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Block::Heading2 { .. } => "heading2",
            Block::Heading3 { .. } => "heading3",
            Block::Paragraph { .. } => "paragraph",
            Block::CodeBlock { .. } => "code_block",
            Block::List { .. } => "list",
        }
    }
}

/// A whole segmented document, in source order.
pub type Document = Vec<Block>;
