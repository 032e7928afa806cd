//! # Markdown Renderer
//!
//! Converts the constrained Markdown subset produced by the generative model
//! into HTML fragments for the console output pane.
//!
//! Supported: `##`/`###` headings, `**bold**`, `*italic*`, `[links](url)`,
//! `* ` bullet items with indented continuation lines, fenced code blocks
//! with an optional language tag, inline code spans, `---` rules, and
//! paragraph wrapping for everything else.
//!
//! The conversion is a fixed sequence of passes over the whole text. Later
//! passes see the markup produced by earlier ones, so the order matters:
//! bold runs before italic because both use `*`, and paragraph wrapping
//! runs last so it can recognize the structural tags already emitted.
//!
//! This is not a conforming Markdown parser. Nested structures, escaped
//! markers and multi-paragraph list items may render incorrectly.

mod blocks;
mod escape;
mod inline;

pub use escape::escape_html;

/// Render `markdown` to an HTML fragment.
///
/// Pure and deterministic. The source is HTML-escaped first, so any markup
/// in the input is displayed as text.
pub fn markdown_to_html(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let html = escape_html(&markdown.replace("\r\n", "\n"));
    let html = blocks::headings(&html);
    let html = inline::emphasis(&html);
    let html = inline::links(&html);
    let html = blocks::lists(&html);
    let html = blocks::code_blocks(&html);
    let html = inline::code_spans(&html);
    let html = blocks::rules(&html);
    let html = blocks::paragraphs(&html);
    blocks::drop_empty_paragraphs(&html)
}
