//! Built-in widget handlers.
//!
//! One handler per directive type in the dispatch table. The emitted markup
//! is placeholder-only: `data-*` attributes carry the payload and the page's
//! hydration layer attaches behavior after render.

use std::fmt::Write;

use crate::state::escape_html;

use super::{WidgetArgs, WidgetDirective, WidgetOutput};

/// Default icon size in pixels when a size is not given.
const DEFAULT_ICON_SIZE: &str = "20";

/// `!![label](toast:message-key)!!` — clickable toast trigger.
pub struct ToastWidget;

impl WidgetDirective for ToastWidget {
    fn name(&self) -> &'static str {
        "toast"
    }

    fn expand(&mut self, args: WidgetArgs) -> WidgetOutput {
        WidgetOutput::html(format!(
            r#"<button type="button" class="toast-trigger" data-toast="{}">{}</button>"#,
            escape_html(&args.value),
            escape_html(&args.label),
        ))
    }
}

/// `!![label](drawer:drawer-id)!!` — clickable drawer trigger.
pub struct DrawerWidget;

impl WidgetDirective for DrawerWidget {
    fn name(&self) -> &'static str {
        "drawer"
    }

    fn expand(&mut self, args: WidgetArgs) -> WidgetOutput {
        WidgetOutput::html(format!(
            r#"<button type="button" class="drawer-trigger" data-drawer="{}">{}</button>"#,
            escape_html(&args.value),
            escape_html(&args.label),
        ))
    }
}

/// `!![label](tooltip:tip text)!!` — inline tooltip host.
pub struct TooltipWidget;

impl WidgetDirective for TooltipWidget {
    fn name(&self) -> &'static str {
        "tooltip"
    }

    fn expand(&mut self, args: WidgetArgs) -> WidgetOutput {
        WidgetOutput::html(format!(
            r#"<span class="tooltip-host" data-tooltip="{}">{}</span>"#,
            escape_html(&args.value),
            escape_html(&args.label),
        ))
    }
}

/// `!![label](badge:variant:icon)!!` — inline badge, icon optional.
pub struct BadgeWidget;

impl WidgetDirective for BadgeWidget {
    fn name(&self) -> &'static str {
        "badge"
    }

    fn expand(&mut self, args: WidgetArgs) -> WidgetOutput {
        WidgetOutput::html(variant_span("badge", &args))
    }
}

/// `!![label](label:variant:icon)!!` — inline label, icon optional.
pub struct LabelWidget;

impl WidgetDirective for LabelWidget {
    fn name(&self) -> &'static str {
        "label"
    }

    fn expand(&mut self, args: WidgetArgs) -> WidgetOutput {
        WidgetOutput::html(variant_span("label", &args))
    }
}

/// `!![](icon:name:size)!!` — inline icon placeholder, size defaults to 20.
pub struct IconWidget;

impl WidgetDirective for IconWidget {
    fn name(&self) -> &'static str {
        "icon"
    }

    fn expand(&mut self, args: WidgetArgs) -> WidgetOutput {
        let size = args.extra().unwrap_or(DEFAULT_ICON_SIZE);
        WidgetOutput::html(format!(
            r#"<span class="icon" data-icon="{}" data-size="{}"></span>"#,
            escape_html(&args.value),
            escape_html(size),
        ))
    }
}

/// Shared shape of badge and label spans: variant plus optional icon.
fn variant_span(class: &str, args: &WidgetArgs) -> String {
    let mut html = format!(
        r#"<span class="{class}" data-variant="{}""#,
        escape_html(&args.value)
    );
    if let Some(icon) = args.extra() {
        write!(html, r#" data-icon="{}""#, escape_html(icon)).unwrap();
    }
    write!(html, ">{}</span>", escape_html(&args.label)).unwrap();
    html
}
