//! Bare URL autolinking for plain text.
//!
//! Turns `http://` and `https://` runs in ordinary text into anchor tags.
//! Text inside markdown links, headings, and code is never scanned.

use std::fmt::Write;

use crate::state::escape_html;

/// Append `text` to `out`, HTML-escaped, with bare URLs wrapped in `<a>` tags.
pub(crate) fn push_linkified(text: &str, out: &mut String) {
    let mut rest = text;
    while let Some(pos) = find_url_start(rest) {
        out.push_str(&escape_html(&rest[..pos]));
        let candidate = &rest[pos..];
        let scheme_len = if candidate.starts_with("https") { 8 } else { 7 };
        let end = url_end(candidate);

        if end <= scheme_len {
            // Scheme with no host, e.g. a literal "http://" mid-sentence.
            out.push_str(&escape_html(&candidate[..scheme_len]));
            rest = &candidate[scheme_len..];
            continue;
        }

        let url = escape_html(&candidate[..end]);
        write!(out, r#"<a href="{url}">{url}</a>"#).unwrap();
        rest = &candidate[end..];
    }
    out.push_str(&escape_html(rest));
}

/// Position of the next URL scheme at a word boundary, if any.
fn find_url_start(text: &str) -> Option<usize> {
    let mut offset = 0;
    loop {
        let pos = offset + text[offset..].find("http")?;
        let at = &text[pos..];
        let has_scheme = at.starts_with("http://") || at.starts_with("https://");
        let boundary = pos == 0
            || !text[..pos]
                .chars()
                .next_back()
                .is_some_and(char::is_alphanumeric);
        if has_scheme && boundary {
            return Some(pos);
        }
        offset = pos + 4;
    }
}

/// Byte length of the URL at the start of `s`.
///
/// The URL runs to the first whitespace or HTML-significant character;
/// trailing sentence punctuation and unbalanced closing parens are excluded.
fn url_end(s: &str) -> usize {
    let mut end = s
        .find(|c: char| c.is_whitespace() || matches!(c, '<' | '>' | '"'))
        .unwrap_or(s.len());

    loop {
        let url = &s[..end];
        match url.chars().next_back() {
            Some('.' | ',' | ';' | ':' | '!' | '?' | '\'') => end -= 1,
            Some(')') if url.matches('(').count() < url.matches(')').count() => end -= 1,
            _ => break,
        }
    }
    end
}
