//! Shared helpers for markdown rendering.

use std::sync::LazyLock;

use pulldown_cmark::HeadingLevel;
use regex::Regex;

static NON_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\W+").unwrap());

/// Derive the anchor id for a heading.
///
/// Lowercases the text and collapses every run of non-word characters into a
/// single hyphen. The result depends only on the input text, so identical
/// headings produce identical ids across documents and render calls.
///
/// # Examples
///
/// ```
/// use folio_renderer::heading_slug;
///
/// assert_eq!(heading_slug("Section Title"), "section-title");
/// assert_eq!(heading_slug("Hello, World!"), "hello-world-");
/// assert_eq!(heading_slug("v2.0 Release"), "v2-0-release");
/// ```
#[must_use]
pub fn heading_slug(text: &str) -> String {
    NON_WORD.replace_all(&text.to_lowercase(), "-").into_owned()
}

/// Convert heading level enum to number (1-6).
#[must_use]
pub(crate) fn heading_level_to_num(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_lowercases() {
        assert_eq!(heading_slug("Getting Started"), "getting-started");
    }

    #[test]
    fn test_slug_collapses_punctuation_runs() {
        assert_eq!(heading_slug("Hello, World!"), "hello-world-");
        assert_eq!(heading_slug("a -- b"), "a-b");
    }

    #[test]
    fn test_slug_is_idempotent() {
        let once = heading_slug("Install & Configure");
        assert_eq!(heading_slug(&once), once);
    }

    #[test]
    fn test_slug_deterministic_across_calls() {
        assert_eq!(heading_slug("Hello, World!"), heading_slug("Hello, World!"));
    }

    #[test]
    fn test_slug_keeps_underscores_and_digits() {
        assert_eq!(heading_slug("snake_case v12"), "snake_case-v12");
    }

    #[test]
    fn test_slug_empty() {
        assert_eq!(heading_slug(""), "");
    }

    #[test]
    fn test_heading_level_to_num() {
        assert_eq!(heading_level_to_num(HeadingLevel::H1), 1);
        assert_eq!(heading_level_to_num(HeadingLevel::H6), 6);
    }
}
