//! Configuration module
//!
//! Loads optional settings from `<config dir>/envpick/config.toml`.
//! A missing file yields defaults; a broken file yields defaults plus a
//! warning for the host to report.

mod loader;
mod types;

pub use loader::{ConfigResult, config_path, load_config, load_config_from_path};
pub use types::{Config, PickerConfig};
