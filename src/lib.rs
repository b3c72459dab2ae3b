//! Single-toast notification provider for ratatui applications
//!
//! A [`ToastProvider`] wraps the rest of the UI. Code inside it obtains a
//! [`ToastController`] through the [`ToastContext`] and configures the toast
//! fluently:
//!
//! ```no_run
//! # use toast_provider::{ToastProvider, ToastTheme, render_toast};
//! let theme = ToastTheme::default();
//! let provider = ToastProvider::builder()
//!     .component(move |frame, area, props| render_toast(frame, area, props, &theme))
//!     .children(|_frame, _area, context| {
//!         let _toast = context.toast();
//!     })
//!     .build()?;
//!
//! provider.toast().success(("Saved", "All changes were written.")).timeout(3000).show();
//! # Ok::<(), toast_provider::ToastError>(())
//! ```

pub mod app;
pub mod config;
pub mod error;
pub mod provider;
pub mod toast;
pub mod widgets;


pub use error::ToastError;
pub use provider::{ToastContext, ToastProps, ToastProvider, ToastTheme, render_toast};
pub use toast::{
    CloseAction, CloseEvent, CloseHandler, Timeout, ToastConfig, ToastController, ToastKind,
    ToastState,
};
