//! Markdown rendering for bot answers.
//!
//! Answers come from a language model and routinely use `**bold**`, lists and
//! tables. Raw HTML in the answer is dropped before rendering.

#[cfg(test)]
#[path = "markdown_test.rs"]
mod markdown_test;

use pulldown_cmark::{Event, Options, Parser, html};

/// Render `markdown` to HTML with inline and block HTML removed.
pub fn render_markdown_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Format a similarity score the way the debug panel shows it.
pub fn format_score(score: f64) -> String {
    format!("{score:.4}")
}
