//! Syntax highlighting for fenced code blocks.
//!
//! Produces HTML with `hljs-`-prefixed CSS classes via syntect's
//! [`ClassedHTMLGenerator`], so the page stylesheet controls the palette.

use std::sync::LazyLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Syntax definitions are expensive to load; built once per process.
static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Error raised while highlighting a code block.
///
/// Never escapes the crate: the renderer degrades the block to empty content.
#[derive(Debug, thiserror::Error)]
pub(crate) enum HighlightError {
    /// No syntax definition matched the fence language tag.
    #[error("no syntax definition for language `{0}`")]
    UnknownLanguage(String),
    /// syntect failed while parsing a line.
    #[error("highlighting failed: {0}")]
    Syntax(#[from] syntect::Error),
}

/// Highlight `code` as `language`, returning `hljs-`-classed token spans.
pub(crate) fn highlight(language: &str, code: &str) -> Result<String, HighlightError> {
    let syntax = SYNTAXES
        .find_syntax_by_token(language)
        .or_else(|| SYNTAXES.find_syntax_by_extension(language))
        .ok_or_else(|| HighlightError::UnknownLanguage(language.to_owned()))?;

    let mut generator = ClassedHTMLGenerator::new_with_class_style(
        syntax,
        &SYNTAXES,
        ClassStyle::SpacedPrefixed { prefix: "hljs-" },
    );
    for line in LinesWithEndings::from(code) {
        generator.parse_html_for_line_which_includes_newline(line)?;
    }
    Ok(generator.finalize())
}
