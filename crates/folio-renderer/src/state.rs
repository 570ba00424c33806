//! Render state tracked across markdown events.

use pulldown_cmark::Alignment;

use crate::util::heading_slug;

/// A table-of-contents entry derived from a rendered heading.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TocEntry {
    /// Heading level (1-6).
    pub level: u8,
    /// Plain heading text with inline markup stripped.
    pub title: String,
    /// Anchor id attached to the rendered heading.
    pub id: String,
}

/// Escape text for safe inclusion in HTML content or attribute values.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Collects the language tag and body of the current fenced code block.
#[derive(Debug, Default)]
pub(crate) struct CodeBlockState {
    active: bool,
    language: Option<String>,
    content: String,
}

impl CodeBlockState {
    pub(crate) fn start(&mut self, language: Option<String>) {
        self.active = true;
        self.language = language;
        self.content.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.content.push_str(text);
    }

    pub(crate) fn push_newline(&mut self) {
        self.content.push('\n');
    }

    pub(crate) fn end(&mut self) -> (Option<String>, String) {
        self.active = false;
        (self.language.take(), std::mem::take(&mut self.content))
    }
}

/// Tracks head/body position and column alignments of the current table.
#[derive(Debug, Default)]
pub(crate) struct TableState {
    alignments: Vec<Alignment>,
    in_head: bool,
    cell: usize,
}

impl TableState {
    pub(crate) fn start(&mut self, alignments: Vec<Alignment>) {
        self.alignments = alignments;
        self.in_head = false;
        self.cell = 0;
    }

    pub(crate) fn start_head(&mut self) {
        self.in_head = true;
        self.cell = 0;
    }

    pub(crate) fn end_head(&mut self) {
        self.in_head = false;
    }

    pub(crate) fn is_in_head(&self) -> bool {
        self.in_head
    }

    pub(crate) fn start_row(&mut self) {
        self.cell = 0;
    }

    pub(crate) fn next_cell(&mut self) {
        self.cell += 1;
    }

    /// Inline style attribute for the current cell, or `""` when unaligned.
    pub(crate) fn current_alignment_style(&self) -> &'static str {
        match self.alignments.get(self.cell) {
            Some(Alignment::Left) => r#" style="text-align: left""#,
            Some(Alignment::Center) => r#" style="text-align: center""#,
            Some(Alignment::Right) => r#" style="text-align: right""#,
            Some(Alignment::None) | None => "",
        }
    }
}

/// Collects the alt text of the image currently being rendered.
#[derive(Debug, Default)]
pub(crate) struct ImageState {
    active: bool,
    alt: String,
}

impl ImageState {
    pub(crate) fn start(&mut self) {
        self.active = true;
        self.alt.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.alt.push_str(text);
    }

    pub(crate) fn end(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.alt)
    }
}

/// Buffers heading text and inline HTML until the heading closes.
///
/// Heading tags are written on close because the anchor id is derived from
/// the accumulated plain text.
#[derive(Debug, Default)]
pub(crate) struct HeadingState {
    active: bool,
    level: u8,
    text: String,
    html: String,
    toc: Vec<TocEntry>,
}

impl HeadingState {
    pub(crate) fn start(&mut self, level: u8) {
        self.active = true;
        self.level = level;
        self.text.clear();
        self.html.clear();
    }

    pub(crate) fn is_active(&self) -> bool {
        self.active
    }

    pub(crate) fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
    }

    pub(crate) fn push_html(&mut self, html: &str) {
        self.html.push_str(html);
    }

    pub(crate) fn html_buffer(&mut self) -> &mut String {
        &mut self.html
    }

    /// Close the heading: record a ToC entry and return `(level, id, html)`.
    pub(crate) fn complete(&mut self) -> (u8, String, String) {
        self.active = false;
        let title = self.text.trim().to_owned();
        let id = heading_slug(&title);
        self.toc.push(TocEntry {
            level: self.level,
            title,
            id: id.clone(),
        });
        self.text.clear();
        (self.level, id, std::mem::take(&mut self.html))
    }

    pub(crate) fn take_toc(&mut self) -> Vec<TocEntry> {
        std::mem::take(&mut self.toc)
    }
}
