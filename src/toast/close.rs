//! Dismissal: the events that close a toast, user callbacks, and the close
//! action handed to render functions.

use std::fmt;
use std::rc::{Rc, Weak};

use crossterm::event::Event;

use super::toast_store::ToastStore;

/// What caused a toast to close
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloseEvent {
    /// A terminal event, usually the close key
    Input(Event),
    /// The auto-dismiss timer fired
    TimedOut,
    /// Application code invoked the close action directly
    Programmatic,
}

/// User callback run when the toast is dismissed
#[derive(Clone)]
pub struct CloseHandler(Rc<dyn Fn(&CloseEvent)>);

impl CloseHandler {
    pub fn new(handler: impl Fn(&CloseEvent) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, event: &CloseEvent) {
        (self.0)(event)
    }
}

impl fmt::Debug for CloseHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CloseHandler(..)")
    }
}

impl PartialEq for CloseHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Close path given to render functions as `on_close_button_click`
///
/// Invoking it runs the user's `on_close` handler with the event, then resets
/// the toast. Invoking it again on a closed toast is a no-op reset.
#[derive(Clone, Default)]
pub struct CloseAction {
    store: Weak<ToastStore>,
}

impl CloseAction {
    pub(crate) fn new(store: Weak<ToastStore>) -> Self {
        Self { store }
    }

    pub fn invoke(&self, event: CloseEvent) {
        if let Some(store) = self.store.upgrade() {
            store.close(event);
        }
    }
}

impl fmt::Debug for CloseAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CloseAction")
            .field("connected", &(self.store.strong_count() > 0))
            .finish()
    }
}
