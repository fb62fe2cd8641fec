//! Fixed semantic palette
//!
//! The picker draws with three roles (heading, highlight, default), each
//! mapped onto one of seven terminal colors. The palette is passed to the
//! renderer explicitly rather than registered as terminal-wide state.

use ratatui::style::Color;
use serde::Deserialize;

/// The seven color slots the picker can draw with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteColor {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl PaletteColor {
    /// Foreground color on the terminal's own (transparent) background
    pub fn fg(self) -> Color {
        match self {
            PaletteColor::Red => Color::Red,
            PaletteColor::Green => Color::Green,
            PaletteColor::Yellow => Color::Yellow,
            PaletteColor::Blue => Color::Blue,
            PaletteColor::Magenta => Color::Magenta,
            PaletteColor::Cyan => Color::Cyan,
            PaletteColor::White => Color::White,
        }
    }
}

/// Role → color mapping used by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Palette {
    /// Title block and query prompt
    #[serde(default = "default_heading")]
    pub heading: PaletteColor,
    /// Row under the cursor
    #[serde(default = "default_highlight")]
    pub highlight: PaletteColor,
    /// Every other row
    #[serde(default = "default_default")]
    pub default: PaletteColor,
}

fn default_heading() -> PaletteColor {
    PaletteColor::Green
}

fn default_highlight() -> PaletteColor {
    PaletteColor::Yellow
}

fn default_default() -> PaletteColor {
    PaletteColor::White
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            heading: default_heading(),
            highlight: default_highlight(),
            default: default_default(),
        }
    }
}
