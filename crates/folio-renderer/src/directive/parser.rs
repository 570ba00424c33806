//! Directive syntax parsing.
//!
//! Matches the inline grammar `!![label](type:value:extra)!!`:
//! `label` is any run excluding `]` (possibly empty), `type` and `value` are
//! non-empty runs excluding `:` and `)`, and `extra` is an optional run
//! excluding `)`.

use super::WidgetArgs;

/// A directive matched at a scan position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ParsedWidget {
    /// Directive type from the parens (e.g. `toast`).
    pub(crate) kind: String,
    pub(crate) args: WidgetArgs,
}

/// Attempt to match the full directive grammar at the start of `input`.
///
/// `input` must begin at a `!!` marker. Returns the parsed directive and the
/// number of bytes consumed (through the trailing `!!`), or `None` when any
/// part of the grammar fails — the caller then treats the marker as literal
/// text and resumes after it.
pub(crate) fn parse_at(input: &str) -> Option<(ParsedWidget, usize)> {
    let s = input.strip_prefix("!!")?;
    let s = s.strip_prefix('[')?;

    let label_end = s.find(']')?;
    let label = &s[..label_end];
    let s = s[label_end + 1..].strip_prefix('(')?;

    // type: must be non-empty and terminated by `:`, never `)`
    let kind_end = s.find([':', ')'])?;
    if kind_end == 0 || !s[kind_end..].starts_with(':') {
        return None;
    }
    let kind = &s[..kind_end];
    let s = &s[kind_end + 1..];

    // value: non-empty, terminated by `:` (extra follows) or `)` (end)
    let value_end = s.find([':', ')'])?;
    if value_end == 0 {
        return None;
    }
    let value = &s[..value_end];
    let mut s = &s[value_end..];

    let extra = match s.strip_prefix(':') {
        Some(after) => {
            let extra_end = after.find(')')?;
            let extra = &after[..extra_end];
            s = &after[extra_end..];
            Some(extra.to_owned())
        }
        None => None,
    };

    let s = s.strip_prefix(')')?;
    let s = s.strip_prefix("!!")?;

    let consumed = input.len() - s.len();
    let widget = ParsedWidget {
        kind: kind.to_owned(),
        args: WidgetArgs {
            label: label.to_owned(),
            value: value.to_owned(),
            extra,
        },
    };
    Some((widget, consumed))
}
