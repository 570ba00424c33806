//! Directive expansion pass.
//!
//! Runs before markdown parsing: widget directives become placeholder HTML,
//! everything else is copied through byte for byte.

use super::fence::FenceTracker;
use super::parser::{ParsedWidget, parse_at};
use super::{
    BadgeWidget, DrawerWidget, IconWidget, LabelWidget, ToastWidget, TooltipWidget,
    WidgetDirective, WidgetOutput,
};

/// Expands widget directives in markdown source.
///
/// Handlers are matched by directive type. A directive whose type has no
/// handler, or whose handler returns [`WidgetOutput::Skip`], is reproduced
/// literally: the matched text is re-emitted with markdown punctuation
/// backslash-escaped so the parser delivers it to the output verbatim.
///
/// # Example
///
/// ```
/// use folio_renderer::directive::DirectiveProcessor;
///
/// let mut processor = DirectiveProcessor::new();
/// let output = processor.process("Press !![Undo](toast:undone)!! to revert.");
/// assert!(output.contains(r#"<button type="button" class="toast-trigger""#));
/// ```
pub struct DirectiveProcessor {
    handlers: Vec<Box<dyn WidgetDirective>>,
    fence: FenceTracker,
}

impl Default for DirectiveProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl DirectiveProcessor {
    /// Create a processor with the six built-in widgets registered.
    #[must_use]
    pub fn new() -> Self {
        Self::empty()
            .with_widget(ToastWidget)
            .with_widget(DrawerWidget)
            .with_widget(TooltipWidget)
            .with_widget(BadgeWidget)
            .with_widget(LabelWidget)
            .with_widget(IconWidget)
    }

    /// Create a processor with no registered widgets.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            handlers: Vec::new(),
            fence: FenceTracker::default(),
        }
    }

    /// Register a widget handler.
    #[must_use]
    pub fn with_widget<W: WidgetDirective + 'static>(mut self, widget: W) -> Self {
        self.handlers.push(Box::new(widget));
        self
    }

    /// Expand directives in `input`, leaving fenced code blocks untouched.
    #[must_use]
    pub fn process(&mut self, input: &str) -> String {
        let mut output = String::with_capacity(input.len());
        let lines: Vec<&str> = input.lines().collect();
        let line_count = lines.len();

        for (idx, line) in lines.iter().enumerate() {
            self.fence.update(line);
            if self.fence.in_fence() || !line.contains("!!") {
                output.push_str(line);
            } else {
                self.process_line(line, &mut output);
            }
            if idx < line_count - 1 || input.ends_with('\n') {
                output.push('\n');
            }
        }

        output
    }

    /// Scan one line, anchored at each `!!` marker.
    ///
    /// The scan position strictly advances: a full match consumes the whole
    /// directive, a failed match consumes the two marker characters.
    fn process_line(&mut self, line: &str, output: &mut String) {
        let mut rest = line;
        while let Some(pos) = rest.find("!!") {
            output.push_str(&rest[..pos]);
            let at = &rest[pos..];
            match parse_at(at) {
                Some((widget, consumed)) => {
                    self.dispatch(widget, &at[..consumed], output);
                    rest = &at[consumed..];
                }
                None => {
                    output.push_str("!!");
                    rest = &at[2..];
                }
            }
        }
        output.push_str(rest);
    }

    fn dispatch(&mut self, widget: ParsedWidget, matched: &str, output: &mut String) {
        let handler = self
            .handlers
            .iter_mut()
            .find(|handler| handler.name() == widget.kind);

        match handler.map(|handler| handler.expand(widget.args)) {
            Some(WidgetOutput::Html(html)) => output.push_str(&html),
            Some(WidgetOutput::Skip) | None => {
                tracing::debug!(kind = %widget.kind, "unhandled widget directive, kept literal");
                push_markdown_escaped(matched, output);
            }
        }
    }
}

/// Emit `text` with ASCII punctuation backslash-escaped.
///
/// The matched directive text contains brackets and parens the markdown
/// parser would otherwise interpret as a link; escaping reproduces the
/// original characters in the rendered output.
fn push_markdown_escaped(text: &str, output: &mut String) {
    for c in text.chars() {
        if c.is_ascii_punctuation() {
            output.push('\\');
        }
        output.push(c);
    }
}
