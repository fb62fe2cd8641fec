use crate::scroll::ScrollState;

/// Mutable state of one picker session
///
/// Handed to custom handlers, which may move the cursor or edit the query
/// before the loop redraws.
pub struct PickerState<T> {
    options: Vec<T>,
    display: Vec<String>,
    cursor: usize,
    query: String,
    pub(crate) scroll: ScrollState,
}

impl<T> PickerState<T> {
    /// Caller guarantees `options` is non-empty, `display` is the same
    /// length, and `cursor` is in range.
    pub(crate) fn new(options: Vec<T>, display: Vec<String>, cursor: usize) -> Self {
        debug_assert!(!options.is_empty());
        debug_assert_eq!(options.len(), display.len());
        debug_assert!(cursor < options.len());
        Self {
            options,
            display,
            cursor,
            query: String::new(),
            scroll: ScrollState::new(),
        }
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always false; a picker cannot be built without options
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Text shown for the option at `index`
    pub fn display_text(&self, index: usize) -> Option<&str> {
        self.display.get(index).map(String::as_str)
    }

    pub fn display_texts(&self) -> &[String] {
        &self.display
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll.top
    }

    /// Highlighted option and its index
    pub fn selected(&self) -> (&T, usize) {
        (&self.options[self.cursor], self.cursor)
    }

    /// Move the cursor to `index`, clamped to the last option
    pub fn select(&mut self, index: usize) {
        self.cursor = index.min(self.len() - 1);
    }

    pub fn move_up(&mut self) {
        self.query.clear();
        self.cursor = self.cursor.checked_sub(1).unwrap_or(self.len() - 1);
    }

    pub fn move_down(&mut self) {
        self.query.clear();
        self.cursor = (self.cursor + 1) % self.len();
    }

    pub fn jump_to_start(&mut self) {
        self.query.clear();
        self.cursor = 0;
    }

    /// Jump to the last option, or with `strict_last_index` off, to the one
    /// before it (never below the first)
    pub fn jump_to_end(&mut self, strict_last_index: bool) {
        self.query.clear();
        self.cursor = if strict_last_index {
            self.len() - 1
        } else {
            self.len().saturating_sub(2)
        };
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Append to the query and jump to the last option whose display text
    /// starts with it; the cursor stays put when nothing matches
    pub fn push_query_char(&mut self, c: char) {
        self.query.push(c);
        if let Some(index) = self
            .display
            .iter()
            .rposition(|text| text.starts_with(self.query.as_str()))
        {
            self.cursor = index;
        }
    }

    pub(crate) fn into_selected(mut self) -> (T, usize) {
        let index = self.cursor;
        (self.options.swap_remove(index), index)
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
