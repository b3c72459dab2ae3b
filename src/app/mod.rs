//! Demo application
//!
//! A small terminal app wrapped in a `ToastProvider`: keys trigger the
//! controller's shortcuts, top-level call and manual chains, and an event log
//! records observer notifications and close handlers.

mod app_events;
mod app_render;
mod app_state;
mod event_log;

pub use app_state::{App, AppOptions};
pub use event_log::EventLog;
