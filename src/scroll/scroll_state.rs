use std::ops::Range;

/// Vertical scroll position of the picker's rendered line list
///
/// Snaps back to the top whenever the cursor line is at or above the fold,
/// and advances just far enough to keep it visible when it falls below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    pub top: usize,
}

impl ScrollState {
    pub fn new() -> Self {
        Self { top: 0 }
    }

    /// Recompute `top` so that `current_line` fits in `max_rows`
    ///
    /// `current_line` is one-based: the count of lines up to and including
    /// the cursor row. Moving up onto the row at `top` snaps back to the top
    /// of the list, so in a long list that row can be left off screen for a
    /// frame; this matches the classic picker and is intended.
    pub fn follow(&mut self, current_line: usize, max_rows: usize) {
        if current_line <= self.top {
            self.top = 0;
        } else if current_line - self.top > max_rows {
            self.top = current_line - max_rows;
        }
    }

    /// Slice of `total` lines visible from the current `top`
    pub fn visible_range(&self, total: usize, max_rows: usize) -> Range<usize> {
        let start = self.top.min(total);
        let end = self.top.saturating_add(max_rows).min(total);
        start..end
    }
}

#[cfg(test)]
#[path = "scroll_state_tests.rs"]
mod scroll_state_tests;
