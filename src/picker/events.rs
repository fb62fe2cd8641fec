use ratatui::crossterm::event::KeyEvent;

use super::{Picker, Step};
use crate::keys::{self, KeyBinding, KeyCategory};

impl<T, R> Picker<T, R> {
    /// Apply one key press to the picker state
    pub fn handle_key(&mut self, key: KeyEvent) -> Step<R> {
        let category = keys::classify(&key, |binding| self.handlers.contains_key(binding));
        log::debug!("Key {:?} classified as {:?}", key.code, category);

        match category {
            KeyCategory::MoveUp => self.state.move_up(),
            KeyCategory::MoveDown => self.state.move_down(),
            KeyCategory::Confirm => return Step::Confirm,
            KeyCategory::Custom(binding) => return self.run_handler(binding),
            KeyCategory::JumpToStart => self.state.jump_to_start(),
            KeyCategory::JumpToEnd => self.state.jump_to_end(self.config.strict_last_index),
            KeyCategory::ClearQuery => self.state.clear_query(),
            KeyCategory::Cancel => return Step::Cancel,
            KeyCategory::Query(c) => self.state.push_query_char(c),
            KeyCategory::Ignored => {}
        }

        Step::Continue
    }

    fn run_handler(&mut self, binding: KeyBinding) -> Step<R> {
        let Some(handler) = self.handlers.get_mut(&binding) else {
            return Step::Continue;
        };

        match handler(&mut self.state) {
            Some(result) => Step::Custom(result),
            None => Step::Continue,
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
