use std::fmt;

use ratatui::style::Color;

use super::close::CloseHandler;
use super::timeout::Timeout;
use super::toast_config::{ShortcutArgs, ToastConfig};

/// Conventional toast kinds
///
/// The `kind` field of a toast is free text; this classification is only used
/// for styling and the shortcut mutators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
    Success,
    Warning,
    /// Any tag outside the conventional set
    Other,
}

impl ToastKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "error" => ToastKind::Error,
            "info" => ToastKind::Info,
            "success" => ToastKind::Success,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Other,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Success => "success",
            ToastKind::Warning => "warning",
            ToastKind::Other => "other",
        }
    }

    /// Border and accent colour for this kind
    pub fn color(&self) -> Color {
        match self {
            ToastKind::Error => Color::Red,
            ToastKind::Info => Color::Cyan,
            ToastKind::Success => Color::Green,
            ToastKind::Warning => Color::Yellow,
            ToastKind::Other => Color::Gray,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastKind::Error => "✗",
            ToastKind::Info => "ℹ",
            ToastKind::Success => "✓",
            ToastKind::Warning => "⚠",
            ToastKind::Other => "•",
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// One mutation of the toast state
///
/// Every action hides the toast before applying itself. Only `Show` and
/// `Configure(Some(_))` leave it visible.
#[derive(Debug, Clone, PartialEq)]
pub enum ToastAction {
    Kind(Option<String>),
    Title(Option<String>),
    Subtitle(Option<String>),
    Caption(Option<String>),
    ClassName(Option<String>),
    Timeout(Option<Timeout>),
    OnClose(Option<CloseHandler>),
    /// `error`/`info`/`success`/`warning` with positional arguments
    Shortcut {
        kind: ToastKind,
        args: ShortcutArgs,
    },
    Show,
    Reset,
    /// Reset, then apply the config and show. `None` only resets.
    Configure(Option<ToastConfig>),
}

/// The single toast owned by a provider
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub active: bool,
    pub kind: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub caption: Option<String>,
    pub timeout: Option<Timeout>,
    pub on_close: Option<CloseHandler>,
    pub class_name: Option<String>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when every field is absent
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.title.is_none()
            && self.subtitle.is_none()
            && self.caption.is_none()
            && self.timeout.is_none()
            && self.on_close.is_none()
            && self.class_name.is_none()
    }

    /// Classified kind, `None` when no kind is set
    pub fn toast_kind(&self) -> Option<ToastKind> {
        self.kind.as_deref().map(ToastKind::from_tag)
    }

    /// Apply one action
    pub fn apply(&mut self, action: ToastAction) {
        self.active = false;

        match action {
            ToastAction::Kind(value) => self.kind = value,
            ToastAction::Title(value) => self.title = value,
            ToastAction::Subtitle(value) => self.subtitle = value,
            ToastAction::Caption(value) => self.caption = value,
            ToastAction::ClassName(value) => self.class_name = value,
            ToastAction::Timeout(value) => self.timeout = value,
            ToastAction::OnClose(handler) => self.on_close = handler,
            ToastAction::Shortcut { kind, args } => {
                self.kind = Some(kind.tag().to_string());
                match args {
                    ShortcutArgs::KindOnly => {}
                    ShortcutArgs::TitleCaption { title, caption } => {
                        self.title = Some(title);
                        self.caption = Some(caption);
                    }
                    ShortcutArgs::TitleSubtitleCaption {
                        title,
                        subtitle,
                        caption,
                    } => {
                        self.title = Some(title);
                        self.subtitle = Some(subtitle);
                        self.caption = Some(caption);
                    }
                }
            }
            ToastAction::Show => self.active = true,
            ToastAction::Reset | ToastAction::Configure(None) => *self = Self::default(),
            ToastAction::Configure(Some(config)) => {
                *self = Self::default();
                config.apply_to(self);
                self.active = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "toast_state_tests.rs"]
mod toast_state_tests;
