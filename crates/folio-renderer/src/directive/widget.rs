//! Widget directive trait and argument types.

/// Arguments extracted from a matched directive.
///
/// For `!![label](type:value:extra)!!` these are everything except the type,
/// which selects the handler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WidgetArgs {
    /// Display text from the brackets. May be empty.
    pub label: String,
    /// Widget-specific payload: toast message key, drawer identifier,
    /// tooltip text, badge/label variant, or icon name.
    pub value: String,
    /// Optional secondary parameter: icon name for badges and labels,
    /// pixel size for icons.
    pub extra: Option<String>,
}

impl WidgetArgs {
    /// The `extra` parameter, treating an empty string as absent.
    #[must_use]
    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref().filter(|extra| !extra.is_empty())
    }
}

/// Output from widget expansion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetOutput {
    /// Placeholder HTML emitted in place of the directive.
    Html(String),
    /// Decline the directive: the matched text is reproduced literally.
    Skip,
}

impl WidgetOutput {
    /// Create an HTML output.
    #[must_use]
    pub fn html(s: impl Into<String>) -> Self {
        Self::Html(s.into())
    }
}

/// Handler for one directive type.
///
/// Handlers implement `Send` only (not `Sync`): each render call gets its
/// own processor instance, so parallel rendering uses one processor per
/// document rather than shared handlers.
///
/// # Example
///
/// ```
/// use folio_renderer::directive::{WidgetArgs, WidgetDirective, WidgetOutput};
///
/// struct KbdWidget;
///
/// impl WidgetDirective for KbdWidget {
///     fn name(&self) -> &str { "kbd" }
///
///     fn expand(&mut self, args: WidgetArgs) -> WidgetOutput {
///         WidgetOutput::html(format!("<kbd>{}</kbd>", args.label))
///     }
/// }
/// ```
pub trait WidgetDirective: Send {
    /// Directive type this handler responds to (e.g. `"toast"`).
    fn name(&self) -> &str;

    /// Expand a matched directive to placeholder HTML.
    ///
    /// Returning [`WidgetOutput::Skip`] reproduces the matched text
    /// literally in the output.
    fn expand(&mut self, args: WidgetArgs) -> WidgetOutput;
}
