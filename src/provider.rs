//! Toast provider
//!
//! Owns the toast store, hands controllers to the wrapped UI through
//! [`ToastContext`], routes the close key and timer expiry to the close path,
//! and invokes the caller's render function while the toast is active.

mod context;
mod toast_props;
mod toast_provider;
pub mod toast_render;

pub use context::ToastContext;
pub use toast_props::ToastProps;
pub use toast_provider::{ChildrenFn, ComponentFn, ToastProvider, ToastProviderBuilder};
pub use toast_render::{ToastTheme, render_toast};
