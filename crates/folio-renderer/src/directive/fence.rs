//! Code fence tracking for the preprocessing pass.
//!
//! Directive syntax inside fenced code blocks is documentation, not markup,
//! so the processor skips those lines entirely.

/// Tracks fenced code block state during line-oriented scanning.
///
/// Fences open with three or more backticks or tildes; the closing fence
/// must use the same character, be at least as long, and carry nothing but
/// trailing whitespace.
#[derive(Debug, Default)]
pub(crate) struct FenceTracker {
    open: Option<(char, usize)>,
}

impl FenceTracker {
    pub(crate) fn in_fence(&self) -> bool {
        self.open.is_some()
    }

    /// Feed the next line; fence state is updated before the caller decides
    /// whether to scan the line for directives.
    pub(crate) fn update(&mut self, line: &str) {
        let trimmed = line.trim_start();
        let Some(first) = trimmed.chars().next() else {
            return;
        };
        if first != '`' && first != '~' {
            return;
        }
        let run = trimmed.chars().take_while(|&c| c == first).count();
        if run < 3 {
            return;
        }

        match self.open {
            None => self.open = Some((first, run)),
            Some((ch, len))
                if ch == first
                    && run >= len
                    && trimmed[run..].chars().all(char::is_whitespace) =>
            {
                self.open = None;
            }
            Some(_) => {}
        }
    }
}
