use ratatui::style::Color;

use crate::io::store::{self, Slot, Store};
use crate::model::theme::{CUSTOM, CustomColors, DEFAULT_PRESET, ThemePreference};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub border: Color,
    pub dim: Color,
    /// Cursor/selection accent
    pub highlight: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // nord
        Theme::from_triple(
            Color::Rgb(0x2E, 0x34, 0x40),
            Color::Rgb(0xEC, 0xEF, 0xF4),
            Color::Rgb(0x4C, 0x56, 0x6A),
        )
    }
}

impl Theme {
    fn from_triple(background: Color, text: Color, border: Color) -> Self {
        Theme {
            background,
            text,
            border,
            dim: border,
            highlight: text,
            error: Color::Rgb(0xFF, 0x44, 0x44),
        }
    }

    /// Look up a preset by name. Unknown names fall back to the default
    /// preset.
    pub fn preset(name: &str) -> Self {
        match name {
            "peach" => Theme::from_triple(
                Color::Rgb(0xFF, 0xF5, 0xE1),
                Color::Rgb(0x5D, 0x40, 0x37),
                Color::Rgb(0xD7, 0xCC, 0xC8),
            ),
            "matrix" => Theme::from_triple(
                Color::Rgb(0x00, 0x00, 0x00),
                Color::Rgb(0x00, 0xFF, 0x41),
                Color::Rgb(0x00, 0x33, 0x00),
            ),
            _ => Theme::default(),
        }
    }

    /// Build the render theme for a persisted preference. Custom colors
    /// use the text color for borders, like the original presets do for
    /// their accent.
    pub fn resolve(pref: &ThemePreference) -> Self {
        match pref {
            ThemePreference::Preset(name) => Theme::preset(name),
            ThemePreference::Custom(colors) => {
                let background =
                    parse_hex_color(&colors.background).unwrap_or(Theme::default().background);
                let text = parse_hex_color(&colors.text).unwrap_or(Theme::default().text);
                Theme::from_triple(background, text, text)
            }
        }
    }
}

/// Read the persisted theme preference, falling back to the default
/// preset when slots are missing or unreadable.
pub fn load_preference(store: &impl Store) -> ThemePreference {
    let name: String = store::load_or(store, Slot::Theme, || DEFAULT_PRESET.to_string());
    if name == CUSTOM {
        match store::load_or::<Option<CustomColors>, _, _>(store, Slot::CustomColors, || None) {
            Some(colors) => ThemePreference::Custom(colors),
            None => ThemePreference::Preset(DEFAULT_PRESET.to_string()),
        }
    } else {
        ThemePreference::Preset(name)
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}
