use crate::toast::{CloseAction, Timeout, ToastKind, ToastState};

/// Snapshot handed to the render function while the toast is active
#[derive(Debug, Clone)]
pub struct ToastProps {
    pub kind: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub caption: Option<String>,
    pub timeout: Option<Timeout>,
    pub class_name: Option<String>,
    /// Runs the user's `on_close` handler, then resets the toast
    pub on_close_button_click: CloseAction,
}

impl ToastProps {
    pub(crate) fn from_state(state: &ToastState, on_close_button_click: CloseAction) -> Self {
        Self {
            kind: state.kind.clone(),
            title: state.title.clone(),
            subtitle: state.subtitle.clone(),
            caption: state.caption.clone(),
            timeout: state.timeout,
            class_name: state.class_name.clone(),
            on_close_button_click,
        }
    }

    pub fn toast_kind(&self) -> Option<ToastKind> {
        self.kind.as_deref().map(ToastKind::from_tag)
    }
}
