//! Single-selection list picker
//!
//! A [`Picker`] draws its options full-screen, moves a cursor with the arrow
//! keys, jumps to options by typed prefix and ends with an [`Outcome`].

mod events;
mod outcome;
mod render;
mod state;

use std::collections::HashMap;
use std::fmt::Display;

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::config::PickerConfig;
use crate::error::{InvalidArgument, PickerError};
use crate::input::{InputEvent, InputSource};
use crate::keys::KeyBinding;
use crate::theme::Palette;

pub use outcome::{Outcome, Step};
pub use render::TITLE_LINE_COUNT;
pub use state::PickerState;

/// Custom key action; returning `Some` ends the picker with that result
pub type Handler<T, R> = Box<dyn FnMut(&mut PickerState<T>) -> Option<R>>;

/// Interactive picker over `T` options; custom handlers may end it with an `R`
pub struct Picker<T, R = ()> {
    state: PickerState<T>,
    handlers: HashMap<KeyBinding, Handler<T, R>>,
    config: PickerConfig,
    palette: Palette,
}

impl<T: Display, R> Picker<T, R> {
    /// Picker showing each option through its `Display` impl
    pub fn new(options: Vec<T>, default_index: usize) -> Result<Self, PickerError> {
        Self::with_display_map(options, default_index, |option| option.to_string())
    }
}

impl<T, R> Picker<T, R> {
    /// Picker showing each option as `display_map` renders it
    ///
    /// # Errors
    /// `InvalidArgument` if `options` is empty or `default_index` is not a
    /// valid index into it.
    pub fn with_display_map<F>(
        options: Vec<T>,
        default_index: usize,
        display_map: F,
    ) -> Result<Self, PickerError>
    where
        F: Fn(&T) -> String,
    {
        if options.is_empty() {
            return Err(InvalidArgument::EmptyOptions.into());
        }
        if default_index >= options.len() {
            return Err(InvalidArgument::DefaultIndexOutOfRange {
                index: default_index,
                len: options.len(),
            }
            .into());
        }

        let display = options.iter().map(display_map).collect();
        Ok(Self {
            state: PickerState::new(options, display, default_index),
            handlers: HashMap::new(),
            config: PickerConfig::default(),
            palette: Palette::default(),
        })
    }

    pub fn with_config(mut self, config: PickerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Bind `handler` to `key`, replacing any earlier handler for that key
    pub fn register_handler<F>(&mut self, key: impl Into<KeyBinding>, handler: F)
    where
        F: FnMut(&mut PickerState<T>) -> Option<R> + 'static,
    {
        self.handlers.insert(key.into(), Box::new(handler));
    }

    pub fn state(&self) -> &PickerState<T> {
        &self.state
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Draw, read one event, repeat until the session ends
    ///
    /// Blocks on `input` between frames. The picker is consumed; a selection
    /// hands back ownership of the chosen option.
    pub fn run<B: Backend>(
        mut self,
        terminal: &mut Terminal<B>,
        input: &mut impl InputSource,
    ) -> Result<Outcome<T, R>, PickerError> {
        loop {
            terminal.draw(|frame| self.render(frame))?;

            let key = match input.read_event()? {
                InputEvent::Key(key) => key,
                InputEvent::Resize => continue,
            };

            match self.handle_key(key) {
                Step::Continue => {}
                Step::Confirm => {
                    let (option, index) = self.state.into_selected();
                    log::debug!("Selected option {}", index);
                    return Ok(Outcome::Selected { option, index });
                }
                Step::Cancel => {
                    log::debug!("Picker cancelled");
                    return Ok(Outcome::Cancelled);
                }
                Step::Custom(result) => {
                    log::debug!("Custom handler ended the picker");
                    return Ok(Outcome::Custom(result));
                }
            }
        }
    }
}
