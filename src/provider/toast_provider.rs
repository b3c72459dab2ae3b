use std::fmt;
use std::rc::Rc;

use crossterm::event::{Event, KeyCode, KeyEventKind};
use ratatui::{Frame, layout::Rect};

use super::context::ToastContext;
use super::toast_props::ToastProps;
use crate::error::ToastError;
use crate::toast::toast_store::ToastStore;
use crate::toast::{CloseAction, CloseEvent, SubscriptionId, ToastController, ToastState};

/// Render function drawing the toast from its props
pub type ComponentFn = Box<dyn Fn(&mut Frame, Rect, &ToastProps)>;

/// The wrapped UI, drawn underneath the toast
pub type ChildrenFn = Box<dyn Fn(&mut Frame, Rect, &ToastContext)>;

/// Owner of one toast
///
/// Dropping the provider cancels any pending auto-dismiss and turns every
/// controller handed out through its context into a no-op.
pub struct ToastProvider {
    store: Rc<ToastStore>,
    component: ComponentFn,
    children: ChildrenFn,
    close_key: KeyCode,
}

impl ToastProvider {
    pub fn builder() -> ToastProviderBuilder {
        ToastProviderBuilder::new()
    }

    pub fn context(&self) -> ToastContext {
        ToastContext::new(&self.store)
    }

    /// Shorthand for `context().toast()`
    pub fn toast(&self) -> ToastController {
        ToastController::new(Rc::downgrade(&self.store))
    }

    pub fn is_active(&self) -> bool {
        self.store.is_active()
    }

    /// Props for the render function, `None` while hidden
    pub fn props(&self) -> Option<ToastProps> {
        let state = self.store.snapshot();
        state.active.then(|| {
            ToastProps::from_state(&state, CloseAction::new(Rc::downgrade(&self.store)))
        })
    }

    /// Draw the children, then the toast if it is active
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        (self.children)(frame, area, &self.context());

        if let Some(props) = self.props() {
            (self.component)(frame, area, &props);
        }
    }

    /// Route a terminal event. Returns true if it dismissed the toast.
    pub fn handle_event(&self, event: &Event) -> bool {
        if !self.store.is_active() {
            return false;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press && key.code == self.close_key => {
                self.store.close(CloseEvent::Input(event.clone()));
                true
            }
            _ => false,
        }
    }

    /// Process auto-dismiss expiry. Call once per UI loop iteration.
    ///
    /// Returns true if the toast was closed by its timer.
    pub fn tick(&self) -> bool {
        self.store.tick()
    }

    /// Whether an auto-dismiss timer is live
    pub fn is_timer_pending(&self) -> bool {
        self.store.is_timer_pending()
    }

    /// Observe every state change. Listeners receive the new state.
    pub fn subscribe(&self, listener: impl Fn(&ToastState) + 'static) -> SubscriptionId {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    /// Incremented on every state change; redraw when it moves
    pub fn revision(&self) -> u64 {
        self.store.revision()
    }

    pub fn close_key(&self) -> KeyCode {
        self.close_key
    }
}

impl fmt::Debug for ToastProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastProvider")
            .field("state", &self.store.snapshot())
            .field("close_key", &self.close_key)
            .field("revision", &self.store.revision())
            .finish_non_exhaustive()
    }
}

/// Builder validating the provider's required inputs
pub struct ToastProviderBuilder {
    component: Option<ComponentFn>,
    children: Option<ChildrenFn>,
    close_key: KeyCode,
}

impl ToastProviderBuilder {
    pub fn new() -> Self {
        Self {
            component: None,
            children: None,
            close_key: KeyCode::Esc,
        }
    }

    /// Render function for the active toast (required)
    pub fn component(
        mut self,
        component: impl Fn(&mut Frame, Rect, &ToastProps) + 'static,
    ) -> Self {
        self.component = Some(Box::new(component));
        self
    }

    /// The wrapped UI (required)
    pub fn children(
        mut self,
        children: impl Fn(&mut Frame, Rect, &ToastContext) + 'static,
    ) -> Self {
        self.children = Some(Box::new(children));
        self
    }

    /// Key that dismisses the toast, `Esc` by default
    pub fn close_key(mut self, close_key: KeyCode) -> Self {
        self.close_key = close_key;
        self
    }

    pub fn build(self) -> Result<ToastProvider, ToastError> {
        let component = self.component.ok_or(ToastError::MissingComponent)?;
        let children = self.children.ok_or(ToastError::MissingChildren)?;

        Ok(ToastProvider {
            store: Rc::new(ToastStore::new()),
            component,
            children,
            close_key: self.close_key,
        })
    }
}

impl Default for ToastProviderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "toast_provider_tests.rs"]
mod toast_provider_tests;
