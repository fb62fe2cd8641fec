// Configuration type definitions

use serde::Deserialize;

use crate::theme::Palette;

pub const DEFAULT_TITLE: &str = "Select an option";
pub const DEFAULT_INDICATOR: &str = "●";
pub const DEFAULT_PROMPT: &str = "$ ";

/// Picker behavior and decoration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PickerConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_indicator")]
    pub indicator: String,
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// `End` jumps to the last option when true, or to the one before it
    /// (legacy behavior) when false
    #[serde(default = "default_strict_last_index")]
    pub strict_last_index: bool,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_indicator() -> String {
    DEFAULT_INDICATOR.to_string()
}

fn default_prompt() -> String {
    DEFAULT_PROMPT.to_string()
}

fn default_strict_last_index() -> bool {
    true
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            title: default_title(),
            indicator: default_indicator(),
            prompt: default_prompt(),
            strict_last_index: default_strict_last_index(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub picker: PickerConfig,
    #[serde(default)]
    pub colors: Palette,
}
