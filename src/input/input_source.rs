use std::collections::VecDeque;
use std::io;

use ratatui::crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// One event the picker loop reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    /// Viewport changed size; redraw without changing state
    Resize,
}

/// Blocking source of picker input
pub trait InputSource {
    /// Block until the next relevant event is available
    fn read_event(&mut self) -> io::Result<InputEvent>;
}

/// Reads key presses and resizes from the terminal via crossterm
#[derive(Debug, Default)]
pub struct TerminalInput;

impl InputSource for TerminalInput {
    fn read_event(&mut self) -> io::Result<InputEvent> {
        loop {
            match event::read()? {
                // Only key presses; release/repeat would double-apply keys
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(InputEvent::Key(key));
                }
                Event::Resize(_, _) => return Ok(InputEvent::Resize),
                _ => {}
            }
        }
    }
}

/// Pre-recorded event queue
///
/// Reading past the last event fails with `UnexpectedEof` so a script that
/// never reaches an outcome cannot block forever.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    events: VecDeque<InputEvent>,
}

impl ScriptedInput {
    pub fn new(events: impl IntoIterator<Item = InputEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }

    pub fn from_keys(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self::new(keys.into_iter().map(InputEvent::Key))
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn remaining(&self) -> usize {
        self.events.len()
    }
}

impl InputSource for ScriptedInput {
    fn read_event(&mut self) -> io::Result<InputEvent> {
        self.events.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "scripted input exhausted")
        })
    }
}

#[cfg(test)]
#[path = "input_source_tests.rs"]
mod input_source_tests;
