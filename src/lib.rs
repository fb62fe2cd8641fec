//! Interactive single-selection list picker for the terminal
//!
//! ```no_run
//! use envpick::{Picker, host};
//!
//! let options = vec!["alpha".to_string(), "beta".to_string()];
//! let picker: Picker<String> = Picker::new(options, 0)?;
//! let outcome = host::pick_interactive(picker)?;
//! if let Some((option, index)) = outcome.selected() {
//!     println!("{} {}", index, option);
//! }
//! # Ok::<(), envpick::PickerError>(())
//! ```

pub mod config;
pub mod error;
pub mod host;
pub mod input;
pub mod keys;
pub mod logging;
pub mod picker;
pub mod scroll;
pub mod theme;


pub use error::{InvalidArgument, PickerError};
pub use keys::KeyBinding;
pub use picker::{Outcome, Picker, PickerState};
