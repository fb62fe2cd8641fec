//! Input module
//!
//! Event sources for the picker loop and the option reader used by hosts.

mod input_source;
mod reader;

pub use input_source::{InputEvent, InputSource, ScriptedInput, TerminalInput};
pub use reader::OptionReader;
