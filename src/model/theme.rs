use serde::{Deserialize, Serialize};

/// Names of the built-in theme presets, in display order
pub const PRESET_NAMES: [&str; 3] = ["nord", "peach", "matrix"];

/// The literal stored in the theme slot when custom colors are active
pub const CUSTOM: &str = "custom";

/// Default preset applied when nothing is persisted
pub const DEFAULT_PRESET: &str = "nord";

/// True for colors like `#2E3440`
pub fn valid_hex(color: &str) -> bool {
    color
        .strip_prefix('#')
        .is_some_and(|hex| hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()))
}

/// User-picked color pair, persisted in its own slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomColors {
    /// Background hex color like `#2E3440`
    pub background: String,
    /// Foreground hex color
    pub text: String,
}

/// The persisted theme preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemePreference {
    Preset(String),
    Custom(CustomColors),
}

impl ThemePreference {
    /// The string stored in the theme slot
    pub fn slot_value(&self) -> &str {
        match self {
            ThemePreference::Preset(name) => name,
            ThemePreference::Custom(_) => CUSTOM,
        }
    }

    pub fn is_preset(&self, name: &str) -> bool {
        matches!(self, ThemePreference::Preset(n) if n == name)
    }
}
