//! Shared toast store
//!
//! The provider owns the store through an `Rc`; controllers, contexts and
//! close actions hold `Weak` handles so they turn into no-ops once the
//! provider is gone. All mutation goes through `update`, which applies the
//! action, syncs the timer, bumps the revision and notifies observers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::close::CloseEvent;
use super::dismiss_timer::DismissTimer;
use super::toast_state::{ToastAction, ToastState};

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&ToastState)>;

pub(crate) struct ToastStore {
    state: RefCell<ToastState>,
    timer: RefCell<DismissTimer>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
    revision: Cell<u64>,
}

impl ToastStore {
    pub(crate) fn new() -> Self {
        Self {
            state: RefCell::new(ToastState::new()),
            timer: RefCell::new(DismissTimer::new()),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
            revision: Cell::new(0),
        }
    }

    pub(crate) fn update(&self, action: ToastAction) {
        let snapshot = {
            let mut state = self.state.borrow_mut();
            state.apply(action);
            self.timer.borrow_mut().sync(&state);
            state.clone()
        };

        let revision = self.revision.get().wrapping_add(1);
        self.revision.set(revision);
        self.notify(&snapshot, revision);
    }

    /// Close path: user handler first, then reset
    pub(crate) fn close(&self, event: CloseEvent) {
        let handler = self.state.borrow().on_close.clone();
        if let Some(handler) = handler {
            handler.call(&event);
        }
        self.update(ToastAction::Reset);
    }

    /// Run the close path if the live timer expired
    pub(crate) fn tick(&self) -> bool {
        let expired = self.timer.borrow_mut().take_expired();
        if expired {
            self.close(CloseEvent::TimedOut);
        }
        expired
    }

    pub(crate) fn snapshot(&self) -> ToastState {
        self.state.borrow().clone()
    }

    pub(crate) fn is_active(&self) -> bool {
        self.state.borrow().active
    }

    pub(crate) fn is_timer_pending(&self) -> bool {
        self.timer.borrow().is_pending()
    }

    pub(crate) fn revision(&self) -> u64 {
        self.revision.get()
    }

    pub(crate) fn subscribe(&self, listener: impl Fn(&ToastState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    pub(crate) fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Stops early when a listener updated the toast itself: the nested
    /// update has already told everyone about the newer state.
    fn notify(&self, snapshot: &ToastState, revision: u64) {
        // Clone the list so listeners may subscribe or mutate the toast
        let listeners: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(snapshot);
            if self.revision.get() != revision {
                break;
            }
        }
    }
}
