//! Event-driven markdown renderer.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::autolink;
use crate::highlight;
use crate::state::{CodeBlockState, HeadingState, ImageState, TableState, TocEntry, escape_html};
use crate::util::heading_level_to_num;

/// Result of rendering markdown.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RenderResult {
    /// Rendered HTML content.
    pub html: String,
    /// Table of contents entries, one per heading, in document order.
    pub toc: Vec<TocEntry>,
    /// Warnings generated during rendering (e.g. dropped code blocks).
    pub warnings: Vec<String>,
}

/// Markdown to HTML renderer.
///
/// Walks the pulldown-cmark event stream and writes HTML directly, tracking
/// just enough state to wrap tables in scroll containers, derive heading
/// anchors, and hand fenced code blocks to the syntax highlighter.
///
/// Soft breaks stay newlines in the output; only explicit hard breaks
/// produce `<br>`.
pub struct MarkdownRenderer {
    output: String,
    list_stack: Vec<bool>,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    heading: HeadingState,
    link_depth: usize,
    pending_image: Option<(String, String)>,
    warnings: Vec<String>,
    gfm: bool,
}

impl MarkdownRenderer {
    /// Create a new renderer with GFM table/strikethrough/task-list support.
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: String::with_capacity(4096),
            list_stack: Vec::new(),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            heading: HeadingState::default(),
            link_depth: 0,
            pending_image: None,
            warnings: Vec::new(),
            gfm: true,
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports tables,
    /// strikethrough (`~~text~~`), and task lists (`- [ ] item`).
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render markdown text directly using configured parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> RenderResult {
        self.render(self.create_parser(markdown))
    }

    /// Render markdown events and return the result.
    pub fn render<'a, I>(&mut self, events: I) -> RenderResult
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }

        RenderResult {
            html: std::mem::take(&mut self.output),
            toc: self.heading.take_toc(),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    /// Push content to output or heading buffer based on context.
    fn push_inline(&mut self, content: &str) {
        if self.heading.is_active() {
            self.heading.push_html(content);
        } else {
            self.output.push_str(content);
        }
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.hard_break(),
            Event::Rule => self.horizontal_rule(),
            Event::TaskListMarker(checked) => self.task_list_marker(checked),
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("<p>");
                }
            }
            Tag::Heading { level, .. } => {
                // Opening tag is written in end_tag once the id is known.
                self.heading.start(heading_level_to_num(level));
            }
            Tag::BlockQuote(_) => {
                self.output.push_str("<blockquote>");
            }
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(ref info) if !info.is_empty() => {
                        // The first fence-info token is the language tag.
                        info.split_whitespace().next().map(str::to_owned)
                    }
                    _ => None,
                };
                self.code.start(lang);
            }
            Tag::List(start) => {
                self.list_stack.push(start.is_some());
                match start {
                    Some(1) => self.output.push_str("<ol>"),
                    Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                    None => self.output.push_str("<ul>"),
                }
            }
            Tag::Item => {
                self.output.push_str("<li>");
            }
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => {
                self.output.push_str("<dl>");
            }
            Tag::DefinitionListTitle => {
                self.output.push_str("<dt>");
            }
            Tag::DefinitionListDefinition => {
                self.output.push_str("<dd>");
            }
            Tag::Table(alignments) => {
                self.table.start(alignments);
                // Scroll container so wide tables don't break narrow layouts.
                self.output.push_str(r#"<div class="table-scroll"><table>"#);
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let align = self.table.current_alignment_style();
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                write!(self.output, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => self.push_inline("<em>"),
            Tag::Strong => self.push_inline("<strong>"),
            Tag::Strikethrough => self.push_inline("<s>"),
            Tag::Link { dest_url, .. } => {
                self.link_depth += 1;
                let link_tag = format!(r#"<a href="{}">"#, escape_html(&dest_url));
                self.push_inline(&link_tag);
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Start collecting alt text; image is written in end_tag.
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::Superscript => self.push_inline("<sup>"),
            Tag::Subscript => self.push_inline("<sub>"),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("</p>");
                }
            }
            TagEnd::Heading(_level) => {
                let (level, id, html) = self.heading.complete();
                write!(
                    self.output,
                    r#"<h{level} id="{id}">{}</h{level}>"#,
                    html.trim()
                )
                .unwrap();
            }
            TagEnd::BlockQuote(_) => {
                self.output.push_str("</blockquote>");
            }
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.end();
                self.code_block(lang.as_deref(), &content);
            }
            TagEnd::List(ordered) => {
                self.list_stack.pop();
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => {
                self.output.push_str("</li>");
            }
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    let title_attr = if title.is_empty() {
                        String::new()
                    } else {
                        format!(r#" title="{}""#, escape_html(&title))
                    };
                    write!(
                        self.output,
                        r#"<img src="{}"{title_attr} alt="{}">"#,
                        escape_html(&src),
                        escape_html(&alt)
                    )
                    .unwrap();
                }
            }
            TagEnd::DefinitionList => {
                self.output.push_str("</dl>");
            }
            TagEnd::DefinitionListTitle => {
                self.output.push_str("</dt>");
            }
            TagEnd::DefinitionListDefinition => {
                self.output.push_str("</dd>");
            }
            TagEnd::Table => {
                self.output.push_str("</tbody></table></div>");
            }
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => {
                self.output.push_str("</tr>");
            }
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.push_inline("</em>"),
            TagEnd::Strong => self.push_inline("</strong>"),
            TagEnd::Strikethrough => self.push_inline("</s>"),
            TagEnd::Link => {
                self.link_depth = self.link_depth.saturating_sub(1);
                self.push_inline("</a>");
            }
            TagEnd::Superscript => self.push_inline("</sup>"),
            TagEnd::Subscript => self.push_inline("</sub>"),
        }
    }

    /// Write a fenced code block.
    ///
    /// A recognized language renders highlighted token spans; a missing or
    /// unknown language, or a highlighter failure, renders an empty block.
    fn code_block(&mut self, lang: Option<&str>, content: &str) {
        if let Some(lang) = lang {
            match highlight::highlight(lang, content) {
                Ok(html) => {
                    write!(
                        self.output,
                        r#"<pre><code class="language-{}">{html}</code></pre>"#,
                        escape_html(lang)
                    )
                    .unwrap();
                    return;
                }
                Err(err) => {
                    tracing::debug!(language = lang, %err, "dropping code block body");
                    self.warnings.push(format!("code block dropped: {err}"));
                }
            }
        }
        self.output.push_str("<pre><code></code></pre>");
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else if self.heading.is_active() {
            self.heading.push_text(text);
            self.heading.push_html(&escape_html(text));
        } else if self.link_depth > 0 {
            self.output.push_str(&escape_html(text));
        } else {
            autolink::push_linkified(text, &mut self.output);
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.heading.is_active() {
            self.heading.push_text(code);
            write!(
                self.heading.html_buffer(),
                "<code>{}</code>",
                escape_html(code)
            )
            .unwrap();
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }

    fn raw_html(&mut self, html: &str) {
        self.output.push_str(html);
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_newline();
        } else if self.heading.is_active() {
            self.heading.push_text(" ");
            self.heading.push_html("\n");
        } else {
            self.output.push('\n');
        }
    }

    fn hard_break(&mut self) {
        self.push_inline("<br>");
    }

    fn horizontal_rule(&mut self) {
        self.output.push_str("<hr>");
    }

    fn task_list_marker(&mut self, checked: bool) {
        self.output.push_str(if checked {
            r#"<input type="checkbox" checked disabled>"#
        } else {
            r#"<input type="checkbox" disabled>"#
        });
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(markdown: &str) -> RenderResult {
        MarkdownRenderer::new().render_markdown(markdown)
    }

    #[test]
    fn test_basic_paragraph() {
        let result = render("Hello, world!");
        assert_eq!(result.html, "<p>Hello, world!</p>");
    }

    #[test]
    fn test_heading_with_id() {
        let result = render("## Section Title");
        assert_eq!(result.html, r#"<h2 id="section-title">Section Title</h2>"#);
        assert_eq!(result.toc.len(), 1);
        assert_eq!(result.toc[0].level, 2);
        assert_eq!(result.toc[0].title, "Section Title");
        assert_eq!(result.toc[0].id, "section-title");
    }

    #[test]
    fn test_heading_id_from_punctuated_text() {
        let result = render("# Hello, World!");
        assert!(result.html.contains(r#"<h1 id="hello-world-">"#));
    }

    #[test]
    fn test_repeated_headings_share_id() {
        let result = render("## FAQ\n\n## FAQ");
        assert_eq!(result.html.matches(r#"id="faq""#).count(), 2);
    }

    #[test]
    fn test_heading_with_inline_code() {
        let result = render("## Install `npm`");
        assert!(result.html.contains("<code>npm</code>"));
        assert_eq!(result.toc[0].title, "Install npm");
    }

    #[test]
    fn test_code_block_highlighted() {
        let result = render("```rust\nfn main() {}\n```");
        assert!(result.html.contains(r#"class="language-rust""#));
        assert!(result.html.contains("hljs-"));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_code_block_unknown_language_renders_empty() {
        let result = render("```nosuchlang\nsecret()\n```");
        assert!(result.html.contains("<pre><code></code></pre>"));
        assert!(!result.html.contains("nosuchlang"));
        assert!(!result.html.contains("secret"));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_code_block_without_language_renders_empty() {
        let result = render("```\nplain text\n```");
        assert!(result.html.contains("<pre><code></code></pre>"));
        assert!(!result.html.contains("plain text"));
    }

    #[test]
    fn test_table_wrapped_in_scroll_container() {
        let result = render("| A | B |\n|---|---|\n| 1 | 2 |");
        assert_eq!(
            result.html.matches(r#"<div class="table-scroll">"#).count(),
            1
        );
        assert!(result.html.contains(r#"<div class="table-scroll"><table>"#));
        assert!(result.html.contains("</tbody></table></div>"));
        assert!(result.html.contains("<th>"));
        assert!(result.html.contains("<td>"));
    }

    #[test]
    fn test_table_alignment() {
        let result = render("| A | B |\n|:--|--:|\n| 1 | 2 |");
        assert!(result.html.contains(r#"<th style="text-align: left">"#));
        assert!(result.html.contains(r#"<td style="text-align: right">"#));
    }

    #[test]
    fn test_soft_break_stays_newline() {
        let result = render("line one\nline two");
        assert_eq!(result.html, "<p>line one\nline two</p>");
    }

    #[test]
    fn test_hard_break_renders_br() {
        let result = render("line one  \nline two");
        assert!(result.html.contains("<br>"));
    }

    #[test]
    fn test_emphasis() {
        let result = render("*italic* and **bold**");
        assert!(result.html.contains("<em>italic</em>"));
        assert!(result.html.contains("<strong>bold</strong>"));
    }

    #[test]
    fn test_strikethrough() {
        let result = render("~~deleted~~");
        assert!(result.html.contains("<s>deleted</s>"));
    }

    #[test]
    fn test_lists() {
        let result = render("- Item 1\n- Item 2");
        assert!(result.html.contains("<ul>"));
        assert!(result.html.contains("<li>Item 1</li>"));

        let result = render("3. First\n4. Second");
        assert!(result.html.contains(r#"<ol start="3">"#));
    }

    #[test]
    fn test_task_list() {
        let result = render("- [ ] Open\n- [x] Done");
        assert!(result.html.contains(r#"<input type="checkbox" disabled>"#));
        assert!(
            result
                .html
                .contains(r#"<input type="checkbox" checked disabled>"#)
        );
    }

    #[test]
    fn test_blockquote() {
        let result = render("> Quoted");
        assert!(result.html.contains("<blockquote>"));
        assert!(result.html.contains("</blockquote>"));
    }

    #[test]
    fn test_link() {
        let result = render("[Site](https://example.com)");
        assert!(
            result
                .html
                .contains(r#"<a href="https://example.com">Site</a>"#)
        );
    }

    #[test]
    fn test_link_text_not_autolinked() {
        let result = render("[read https://example.com here](https://other.example)");
        assert_eq!(result.html.matches("<a href=").count(), 1);
    }

    #[test]
    fn test_bare_url_autolinked() {
        let result = render("Visit https://example.com today");
        assert!(
            result
                .html
                .contains(r#"<a href="https://example.com">https://example.com</a>"#)
        );
    }

    #[test]
    fn test_image() {
        let result = render("![Alt text](image.png)");
        assert!(
            result
                .html
                .contains(r#"<img src="image.png" alt="Alt text">"#)
        );
    }

    #[test]
    fn test_image_with_title() {
        let result = render(r#"![Alt](image.png "The title")"#);
        assert!(result.html.contains(r#"title="The title""#));
    }

    #[test]
    fn test_raw_inline_html_passthrough() {
        let result = render("before <mark>kept</mark> after");
        assert!(result.html.contains("<mark>kept</mark>"));
    }

    #[test]
    fn test_text_escaped() {
        let result = render("5 < 6 & 7 > 2");
        assert!(result.html.contains("5 &lt; 6 &amp; 7 &gt; 2"));
    }

    #[test]
    fn test_horizontal_rule() {
        let result = render("---");
        assert!(result.html.contains("<hr>"));
    }

    #[test]
    fn test_gfm_disabled() {
        let mut renderer = MarkdownRenderer::new().with_gfm(false);
        let result = renderer.render_markdown("| A | B |\n|---|---|\n| 1 | 2 |");
        assert!(!result.html.contains("<table>"));
    }

    #[test]
    fn test_parser_options_with_gfm() {
        let renderer = MarkdownRenderer::new();
        let options = renderer.parser_options();
        assert!(options.contains(Options::ENABLE_TABLES));
        assert!(options.contains(Options::ENABLE_STRIKETHROUGH));
        assert!(options.contains(Options::ENABLE_TASKLISTS));
    }

    #[test]
    fn test_toc_order_and_levels() {
        let result = render("# One\n\n## Two\n\n### Three\n\n## Four");
        let levels: Vec<u8> = result.toc.iter().map(|entry| entry.level).collect();
        assert_eq!(levels, vec![1, 2, 3, 2]);
        assert_eq!(result.toc[3].id, "four");
    }

    #[test]
    fn test_default_renderer() {
        let result = MarkdownRenderer::default().render_markdown("Hello");
        assert_eq!(result.html, "<p>Hello</p>");
    }
}
