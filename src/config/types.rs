// Configuration type definitions

use std::collections::HashMap;

use crossterm::event::KeyCode;
use serde::Deserialize;

/// Corner (or centre) of the frame the default renderer anchors the toast to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    Center,
}

/// Colours applied when a toast's `class_name` matches
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClassStyle {
    /// Border colour, any ratatui colour name or `#rrggbb`
    pub border: Option<String>,
    /// Text colour
    pub text: Option<String>,
}

/// Default renderer configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToastStyleConfig {
    pub position: ToastPosition,
    pub width: u16,
    pub margin: u16,
    pub show_hint: bool,
    pub classes: HashMap<String, ClassStyle>,
}

impl Default for ToastStyleConfig {
    fn default() -> Self {
        ToastStyleConfig {
            position: ToastPosition::TopRight,
            width: 40,
            margin: 1,
            show_hint: true,
            classes: HashMap::new(),
        }
    }
}

/// Key bindings section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeysConfig {
    /// Key that dismisses the visible toast
    pub close: String,
}

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            close: "esc".to_string(),
        }
    }
}

impl KeysConfig {
    /// Parsed close key, `None` when the configured name is unknown
    pub fn close_key(&self) -> Option<KeyCode> {
        parse_key_code(&self.close)
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastStyleConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}

/// Parse a key name such as `esc`, `enter`, `f2` or a single character
pub fn parse_key_code(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_lowercase();
    match lower.as_str() {
        "esc" | "escape" => Some(KeyCode::Esc),
        "enter" | "return" => Some(KeyCode::Enter),
        "backspace" => Some(KeyCode::Backspace),
        "delete" | "del" => Some(KeyCode::Delete),
        "tab" => Some(KeyCode::Tab),
        "space" => Some(KeyCode::Char(' ')),
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }

            let mut chars = name.trim().chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(KeyCode::Char(c)),
                _ => None,
            }
        }
    }
}
