//! Turn lightweight blog markup into typed document blocks.
//!
//! The supported markup is deliberately small: `## ` and `### ` headings,
//! paragraphs separated by blank lines, `- ` lists, triple-backtick code
//! fences, inline code and `**bold**`. Anything malformed degrades to plain
//! text, so [`segment`] and [`format_inline`] accept every input.

mod block;
mod config;
mod error;
mod html;
mod inline;
mod parser;
mod source;
mod typst;

pub use block::{Block, Document, InlineNode, ListItem, visible_text};
pub use config::{Config, HtmlConfig, LayoutConfig, PageConfig};
pub use error::{Error, Result};
pub use html::blocks_to_html;
pub use source::blocks_to_source;
pub use typst::blocks_to_typst;

use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

/// Segment raw text into an ordered document of blocks.
pub fn segment(raw: &str) -> Document {
    parser::segment(raw)
}

/// Split block text into plain, inline code and bold nodes.
pub fn format_inline(text: &str) -> Vec<InlineNode> {
    inline::format_inline(text)
}

/// Convert markup to an HTML fragment using default config.
pub fn markdown_to_html(markdown: &str) -> String {
    markdown_to_html_with_config(markdown, &Config::default())
}

/// Convert markup to an HTML fragment with custom config.
pub fn markdown_to_html_with_config(markdown: &str, config: &Config) -> String {
    let blocks = segment(markdown);
    html::blocks_to_html(&blocks, &config.html)
}

/// Convert markup to Typst markup using default config.
pub fn markdown_to_typst(markdown: &str) -> String {
    markdown_to_typst_with_config(markdown, &Config::default())
}

/// Convert markup to Typst markup with custom config.
pub fn markdown_to_typst_with_config(markdown: &str, config: &Config) -> String {
    let blocks = segment(markdown);
    typst::blocks_to_typst(&blocks, config)
}

/// Serialize a document as pretty-printed JSON.
pub fn blocks_to_json(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string_pretty(blocks)?)
}

/// Convert markup to PDF bytes using default config.
pub fn markdown_to_pdf(markdown: &str) -> Result<Vec<u8>> {
    markdown_to_pdf_with_config(markdown, &Config::default())
}

/// Convert markup to PDF bytes with custom config.
pub fn markdown_to_pdf_with_config(markdown: &str, config: &Config) -> Result<Vec<u8>> {
    blocks_to_pdf(&segment(markdown), config)
}

/// Typeset already segmented blocks as PDF bytes.
pub fn blocks_to_pdf(blocks: &[Block], config: &Config) -> Result<Vec<u8>> {
    use typst_library::layout::PagedDocument;

    let typst_content = typst::blocks_to_typst(blocks, config);

    let font_options = TypstKitFontOptions::new()
        .include_embedded_fonts(true)
        .include_system_fonts(false);

    let engine = TypstEngine::builder()
        .main_file(typst_content)
        .search_fonts_with(font_options)
        .build();

    let doc: PagedDocument = engine
        .compile()
        .output
        .map_err(|e| Error::Typst(format!("{:?}", e)))?;

    typst_pdf::pdf(&doc, &PdfOptions::default()).map_err(|e| Error::Pdf(format!("{:?}", e)))
}
