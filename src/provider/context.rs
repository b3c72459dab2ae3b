use std::fmt;
use std::rc::{Rc, Weak};

use crate::toast::toast_store::ToastStore;
use crate::toast::{ToastController, ToastState};

/// Handle through which wrapped UI code reaches the toast controller
///
/// `ToastContext::default()` stands for "no provider": its controller accepts
/// every call and does nothing.
#[derive(Clone, Default)]
pub struct ToastContext {
    store: Weak<ToastStore>,
}

impl ToastContext {
    pub(crate) fn new(store: &Rc<ToastStore>) -> Self {
        Self {
            store: Rc::downgrade(store),
        }
    }

    /// The controller of the enclosing provider
    pub fn toast(&self) -> ToastController {
        ToastController::new(self.store.clone())
    }

    /// Whether a live provider backs this context
    pub fn is_provided(&self) -> bool {
        self.store.strong_count() > 0
    }

    pub fn snapshot(&self) -> ToastState {
        self.store
            .upgrade()
            .map(|store| store.snapshot())
            .unwrap_or_default()
    }
}

impl fmt::Debug for ToastContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastContext")
            .field("provided", &self.is_provided())
            .finish()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod context_tests;
