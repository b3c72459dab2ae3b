//! Toast notification core
//!
//! Holds the single toast's state, the fluent controller that mutates it and
//! the auto-dismiss timer. Rendering and input routing live in `provider`.

mod close;
mod controller;
mod dismiss_timer;
mod field_value;
mod timeout;
mod toast_config;
mod toast_state;
pub(crate) mod toast_store;

pub use close::{CloseAction, CloseEvent, CloseHandler};
pub use controller::ToastController;
pub use field_value::FieldValue;
pub use timeout::Timeout;
pub use toast_config::{ShortcutArgs, ToastConfig};
pub use toast_state::{ToastAction, ToastKind, ToastState};
pub use toast_store::SubscriptionId;
