//! Markdown rendering for the folio content site.
//!
//! Content records (posts, project READMEs, notes) store markdown; this
//! crate turns those strings into HTML for page display. On top of the
//! CommonMark/GFM baseline it adds:
//!
//! - stable anchor ids on every heading, plus a table of contents
//! - syntax-highlighted fenced code blocks (CSS classes, no inline styles)
//! - a horizontal scroll container around every table
//! - the `!![label](type:value:extra)!!` widget directive syntax, expanded
//!   to placeholder markup for the page's hydration layer (see [`directive`])
//!
//! Rendering is total: malformed directives, unknown code fence languages,
//! and highlighter failures degrade to literal text or empty output instead
//! of surfacing an error.
//!
//! # Example
//!
//! ```
//! let html = folio_renderer::render("# Notes\n\nSaved !![Undo](toast:undone)!!");
//! assert!(html.contains(r#"<h1 id="notes">Notes</h1>"#));
//! assert!(html.contains(r#"data-toast="undone""#));
//! ```

mod autolink;
pub mod directive;
mod highlight;
mod renderer;
mod state;
mod util;

pub use renderer::{MarkdownRenderer, RenderResult};
pub use state::{TocEntry, escape_html};
pub use util::heading_slug;

use serde_json::Value;

use directive::DirectiveProcessor;

/// Render a markdown string to HTML.
///
/// Directives are expanded first, then the result is parsed and rendered.
/// This never fails; see the crate docs for the degradation rules.
#[must_use]
pub fn render(markdown: &str) -> String {
    render_full(markdown).html
}

/// Render a markdown string, keeping the table of contents and warnings.
#[must_use]
pub fn render_full(markdown: &str) -> RenderResult {
    let expanded = DirectiveProcessor::new().process(markdown);
    MarkdownRenderer::new().render_markdown(&expanded)
}

/// Render a JSON content field to HTML.
///
/// Record fields arrive as free-form JSON; only a string is treated as
/// markdown. Anything else (null, numbers, booleans, arrays, objects)
/// renders as the empty string.
#[must_use]
pub fn render_value(value: &Value) -> String {
    value.as_str().map_or_else(String::new, render)
}
