//! Key decoding for the picker loop
//!
//! Every key event falls into exactly one [`KeyCategory`]. When a key could
//! belong to several categories the earliest one wins, in this order:
//! movement, confirm, custom handler, jump, clear, cancel, query input.

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Identifies a key for custom handler registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Binding for a decoded key event
    ///
    /// SHIFT is dropped for character keys since it is already reflected in
    /// the character itself (`'D'` vs `'d'`).
    pub fn from_event(key: &KeyEvent) -> Self {
        let mut modifiers = key.modifiers;
        if matches!(key.code, KeyCode::Char(_)) {
            modifiers.remove(KeyModifiers::SHIFT);
        }
        Self::new(key.code, modifiers)
    }
}

impl From<char> for KeyBinding {
    fn from(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::NONE)
    }
}

impl From<KeyCode> for KeyBinding {
    fn from(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }
}

/// What a key means to the picker loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCategory {
    MoveUp,
    MoveDown,
    Confirm,
    Custom(KeyBinding),
    JumpToStart,
    JumpToEnd,
    ClearQuery,
    Cancel,
    Query(char),
    Ignored,
}

/// Classify a key, consulting `is_registered` for custom bindings
pub fn classify(key: &KeyEvent, is_registered: impl Fn(&KeyBinding) -> bool) -> KeyCategory {
    let binding = KeyBinding::from_event(key);

    if binding.code == KeyCode::Up {
        KeyCategory::MoveUp
    } else if binding.code == KeyCode::Down {
        KeyCategory::MoveDown
    } else if is_confirm(&binding) {
        KeyCategory::Confirm
    } else if is_registered(&binding) {
        KeyCategory::Custom(binding)
    } else if binding.code == KeyCode::Home {
        KeyCategory::JumpToStart
    } else if binding.code == KeyCode::End {
        KeyCategory::JumpToEnd
    } else if matches!(binding.code, KeyCode::Delete | KeyCode::Backspace) {
        KeyCategory::ClearQuery
    } else if is_cancel(&binding) {
        KeyCategory::Cancel
    } else {
        query_char(&binding).map_or(KeyCategory::Ignored, KeyCategory::Query)
    }
}

fn is_confirm(binding: &KeyBinding) -> bool {
    match binding.code {
        KeyCode::Enter | KeyCode::Right => true,
        KeyCode::Char(' ') => binding.modifiers.is_empty(),
        // Raw line feed / carriage return as some terminals report them
        KeyCode::Char('j') | KeyCode::Char('m') => binding.modifiers == KeyModifiers::CONTROL,
        _ => false,
    }
}

fn is_cancel(binding: &KeyBinding) -> bool {
    match binding.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('u') | KeyCode::Char('e') => {
            binding.modifiers.contains(KeyModifiers::CONTROL)
        }
        _ => false,
    }
}

fn query_char(binding: &KeyBinding) -> Option<char> {
    match binding.code {
        KeyCode::Char(c)
            if !c.is_control()
                && !binding
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod keys_tests;
