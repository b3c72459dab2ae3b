use std::fmt;

use serde::{Deserialize, Deserializer};

use super::close::{CloseEvent, CloseHandler};
use super::timeout::Timeout;
use super::toast_state::ToastState;

/// Configuration object for the top-level `set` call
///
/// Only present fields are applied. Built fluently in code, or deserialized
/// from JSON/TOML where `timeout` may be a number or a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub caption: Option<String>,
    pub timeout: Option<Timeout>,
    #[serde(alias = "className")]
    pub class_name: Option<String>,
    #[serde(skip)]
    pub on_close: Option<CloseHandler>,
}

impl ToastConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: impl fmt::Display) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn title(mut self, title: impl fmt::Display) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn subtitle(mut self, subtitle: impl fmt::Display) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn caption(mut self, caption: impl fmt::Display) -> Self {
        self.caption = Some(caption.to_string());
        self
    }

    pub fn timeout(mut self, timeout: impl fmt::Display) -> Self {
        self.timeout = Some(Timeout::from_value(timeout));
        self
    }

    pub fn class_name(mut self, class_name: impl fmt::Display) -> Self {
        self.class_name = Some(class_name.to_string());
        self
    }

    pub fn on_close(mut self, handler: impl Fn(&CloseEvent) + 'static) -> Self {
        self.on_close = Some(CloseHandler::new(handler));
        self
    }

    /// Parse a JSON object such as `{"kind": "info", "title": "Saved", "timeout": 3000}`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Copy every field into a freshly reset state
    pub(crate) fn apply_to(self, state: &mut ToastState) {
        let ToastConfig {
            kind,
            title,
            subtitle,
            caption,
            timeout,
            class_name,
            on_close,
        } = self;

        state.kind = kind;
        state.title = title;
        state.subtitle = subtitle;
        state.caption = caption;
        state.timeout = timeout;
        state.class_name = class_name;
        state.on_close = on_close;
    }
}

/// Raw timeout as written in a config object
#[derive(Deserialize)]
#[serde(untagged)]
enum TimeoutInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Timeout {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match TimeoutInput::deserialize(deserializer)? {
            TimeoutInput::Integer(ms) => Timeout::Millis(ms),
            TimeoutInput::Float(ms) => Timeout::from_value(ms),
            TimeoutInput::Text(text) => Timeout::parse(&text),
        })
    }
}

/// Positional arguments of the `error`/`info`/`success`/`warning` shortcuts
///
/// Two arguments are `(title, caption)`, three are `(title, subtitle, caption)`.
/// Any other count sets only the kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortcutArgs {
    KindOnly,
    TitleCaption {
        title: String,
        caption: String,
    },
    TitleSubtitleCaption {
        title: String,
        subtitle: String,
        caption: String,
    },
}

impl From<()> for ShortcutArgs {
    fn from(_: ()) -> Self {
        ShortcutArgs::KindOnly
    }
}

impl<A: fmt::Display> From<(A,)> for ShortcutArgs {
    fn from(_: (A,)) -> Self {
        ShortcutArgs::KindOnly
    }
}

impl<A: fmt::Display, B: fmt::Display> From<(A, B)> for ShortcutArgs {
    fn from((title, caption): (A, B)) -> Self {
        ShortcutArgs::TitleCaption {
            title: title.to_string(),
            caption: caption.to_string(),
        }
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> From<(A, B, C)> for ShortcutArgs {
    fn from((title, subtitle, caption): (A, B, C)) -> Self {
        ShortcutArgs::TitleSubtitleCaption {
            title: title.to_string(),
            subtitle: subtitle.to_string(),
            caption: caption.to_string(),
        }
    }
}

impl<A, B, C, D> From<(A, B, C, D)> for ShortcutArgs {
    fn from(_: (A, B, C, D)) -> Self {
        ShortcutArgs::KindOnly
    }
}

#[cfg(test)]
#[path = "toast_config_tests.rs"]
mod toast_config_tests;
