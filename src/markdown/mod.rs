//!
//! Markdown to HTML conversion for notification bodies.
//!
//! Only a small, fixed subset is understood: headings, emphasis, code, links,
//! list lines and bare URLs. The conversion is a chain of substitutions over
//! the whole text, so its output is not valid input for another pass: the
//! escaping step would escape the markup produced by the first run.

mod substitution;

pub use substitution::Substitution;

use std::borrow::Cow;
use substitution::PIPELINE;

/// Converts notification Markdown into HTML for a rich-text label
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Names of the pipeline steps, in the order they run
    pub fn steps(&self) -> impl Iterator<Item = &'static str> {
        PIPELINE.iter().map(Substitution::name)
    }

    /// Render `text`. Missing or empty input yields an empty string.
    pub fn render(&self, text: Option<&str>) -> String {
        match text {
            Some(text) if !text.is_empty() => self.render_str(text),
            _ => String::new(),
        }
    }

    fn render_str(&self, text: &str) -> String {
        let mut html = text.to_string();

        for step in PIPELINE.iter() {
            let rewritten = match step.apply(&html) {
                Cow::Owned(rewritten) => Some(rewritten),
                Cow::Borrowed(_) => None,
            };
            if let Some(rewritten) = rewritten {
                log::trace!("markdown step {} rewrote the text", step.name());
                html = rewritten;
            }
        }

        if !html.starts_with('<') {
            html = format!("<p>{html}</p>");
        }

        html
    }
}

/// Render `text` with the default renderer
pub fn render(text: Option<&str>) -> String {
    MarkdownRenderer::new().render(text)
}

/// Render a Markdown string to HTML
pub fn markdown_to_html(text: &str) -> String {
    render(Some(text))
}
