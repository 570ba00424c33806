//! Pluggable widget directives for the `!![label](type:value:extra)!!` syntax.
//!
//! Content records embed inline directives that stand in for interactive
//! widgets: a toast trigger, a drawer trigger, a tooltip, a badge, a label,
//! or an icon. The renderer expands each directive to placeholder HTML that
//! the page's hydration layer wires up after render; this module owns that
//! expansion.
//!
//! # Architecture
//!
//! Directives are expanded in a preprocessing pass over the source text,
//! before markdown parsing. The emitted HTML then travels through the
//! markdown parser unchanged as raw inline HTML.
//!
//! Matching is anchored at the `!!` marker: the scanner attempts the full
//! grammar only where it sees the two-character marker, and a failed match
//! leaves the marker as literal text, so a stray `!!` never disturbs the
//! surrounding document. Fenced code blocks are skipped entirely.
//!
//! # Example
//!
//! ```
//! use folio_renderer::directive::DirectiveProcessor;
//!
//! let mut processor = DirectiveProcessor::new();
//! let output = processor.process("Click !![Save](toast:saved)!! to finish.");
//! assert!(output.contains(r#"data-toast="saved""#));
//! ```

mod builtin;
mod fence;
mod parser;
mod processor;
mod widget;

pub use builtin::{
    BadgeWidget, DrawerWidget, IconWidget, LabelWidget, ToastWidget, TooltipWidget,
};
pub use processor::DirectiveProcessor;
pub use widget::{WidgetArgs, WidgetDirective, WidgetOutput};
