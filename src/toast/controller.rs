use std::fmt;
use std::rc::Weak;

use super::close::{CloseEvent, CloseHandler};
use super::field_value::FieldValue;
use super::timeout::Timeout;
use super::toast_config::{ShortcutArgs, ToastConfig};
use super::toast_state::{ToastAction, ToastKind, ToastState};
use super::toast_store::ToastStore;

/// Fluent mutation API over the provider's toast
///
/// Every mutator returns the controller for chaining and hides the toast
/// before applying its change, so a manual chain must end with `show()` to be
/// visible:
///
/// ```ignore
/// toast.kind("info").title("Saved").caption("3 files").show();
/// toast.set(ToastConfig::new().kind("warning").title("Beware").timeout(3000));
/// toast.error(("Upload failed", "retrying in 5s"));
/// ```
///
/// A controller from a default context, or one that outlived its provider,
/// ignores every call.
#[derive(Clone, Default)]
pub struct ToastController {
    store: Weak<ToastStore>,
}

impl ToastController {
    pub(crate) fn new(store: Weak<ToastStore>) -> Self {
        Self { store }
    }

    fn dispatch(&self, action: ToastAction) -> &Self {
        if let Some(store) = self.store.upgrade() {
            store.update(action);
        }
        self
    }

    /// Reset, then apply `config` and show it. `None` only resets.
    pub fn set(&self, config: impl Into<Option<ToastConfig>>) -> &Self {
        self.dispatch(ToastAction::Configure(config.into()))
    }

    pub fn show(&self) -> &Self {
        self.dispatch(ToastAction::Show)
    }

    /// Hide the toast and clear every field
    pub fn reset(&self) -> &Self {
        self.dispatch(ToastAction::Reset)
    }

    /// Set the kind: `error`, `info`, `success`, `warning`, or any other tag
    pub fn kind(&self, value: impl FieldValue) -> &Self {
        self.dispatch(ToastAction::Kind(value.into_field_value()))
    }

    pub fn title(&self, value: impl FieldValue) -> &Self {
        self.dispatch(ToastAction::Title(value.into_field_value()))
    }

    pub fn subtitle(&self, value: impl FieldValue) -> &Self {
        self.dispatch(ToastAction::Subtitle(value.into_field_value()))
    }

    /// Set the caption (body) of the toast
    pub fn caption(&self, value: impl FieldValue) -> &Self {
        self.dispatch(ToastAction::Caption(value.into_field_value()))
    }

    pub fn class_name(&self, value: impl FieldValue) -> &Self {
        self.dispatch(ToastAction::ClassName(value.into_field_value()))
    }

    /// Set the auto-dismiss delay in milliseconds
    ///
    /// The value is parsed by its leading integer; input without one is
    /// stored as `Timeout::NotANumber` and never auto-dismisses.
    pub fn timeout(&self, value: impl FieldValue) -> &Self {
        let timeout = value.into_field_value().map(|text| Timeout::parse(&text));
        self.dispatch(ToastAction::Timeout(timeout))
    }

    pub fn on_close(&self, handler: impl Fn(&CloseEvent) + 'static) -> &Self {
        self.on_close_handler(Some(CloseHandler::new(handler)))
    }

    pub fn on_close_handler(&self, handler: Option<CloseHandler>) -> &Self {
        self.dispatch(ToastAction::OnClose(handler))
    }

    /// `kind("error")` plus `(title, caption)` or `(title, subtitle, caption)`
    pub fn error(&self, args: impl Into<ShortcutArgs>) -> &Self {
        self.shortcut(ToastKind::Error, args.into())
    }

    pub fn info(&self, args: impl Into<ShortcutArgs>) -> &Self {
        self.shortcut(ToastKind::Info, args.into())
    }

    pub fn success(&self, args: impl Into<ShortcutArgs>) -> &Self {
        self.shortcut(ToastKind::Success, args.into())
    }

    pub fn warning(&self, args: impl Into<ShortcutArgs>) -> &Self {
        self.shortcut(ToastKind::Warning, args.into())
    }

    fn shortcut(&self, kind: ToastKind, args: ShortcutArgs) -> &Self {
        self.dispatch(ToastAction::Shortcut { kind, args })
    }

    /// Whether the toast is being displayed
    pub fn active(&self) -> bool {
        self.store.upgrade().is_some_and(|store| store.is_active())
    }

    /// Copy of the current state; default when detached
    pub fn snapshot(&self) -> ToastState {
        self.store
            .upgrade()
            .map(|store| store.snapshot())
            .unwrap_or_default()
    }

    /// Whether a provider backs this controller
    pub fn is_connected(&self) -> bool {
        self.store.strong_count() > 0
    }
}

impl fmt::Debug for ToastController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastController")
            .field("connected", &self.is_connected())
            .field("active", &self.active())
            .finish()
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod controller_tests;
