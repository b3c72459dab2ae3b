use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::KeyCode;

use super::event_log::EventLog;
use crate::config::Config;
use crate::error::ToastError;
use crate::provider::{ToastProvider, ToastTheme, render_toast};
use crate::toast::{CloseEvent, CloseHandler, ToastConfig, ToastController};

/// Startup options coming from the command line and config loading
#[derive(Debug, Clone, Default)]
pub struct AppOptions {
    /// Toast shown immediately through the top-level call
    pub initial_toast: Option<ToastConfig>,
    /// Auto-dismiss delay applied to the shortcut toasts
    pub default_timeout_ms: Option<u64>,
    /// Problem found while loading the config file
    pub config_warning: Option<String>,
}

/// Application state
pub struct App {
    pub provider: ToastProvider,
    pub event_log: Rc<RefCell<EventLog>>,
    pub default_timeout_ms: Option<u64>,
    /// Config used by the top-level call key
    pub template: ToastConfig,
    should_quit: bool,
    drawn_revision: Option<u64>,
}

impl App {
    pub fn new(config: &Config, options: AppOptions) -> Result<Self, ToastError> {
        let event_log = Rc::new(RefCell::new(EventLog::new()));
        let theme = ToastTheme::from_config(config);
        let close_key = config.keys.close_key().unwrap_or(KeyCode::Esc);

        let body_log = Rc::clone(&event_log);
        let provider = ToastProvider::builder()
            .component(move |frame, area, props| render_toast(frame, area, props, &theme))
            .children(move |frame, area, context| {
                super::app_render::render_body(frame, area, context, &body_log.borrow());
            })
            .close_key(close_key)
            .build()?;

        let observer_log = Rc::clone(&event_log);
        provider.subscribe(move |state| {
            let message = if state.active {
                format!(
                    "shown: {} {}",
                    state.kind.as_deref().unwrap_or("-"),
                    state.title.as_deref().unwrap_or("")
                )
            } else {
                "hidden".to_string()
            };
            observer_log.borrow_mut().push(message);
        });

        let template = ToastConfig::new()
            .kind("warning")
            .title("Beware")
            .subtitle("A wild toast")
            .caption("Set through the top-level call; every stale field is cleared first.");

        let app = Self {
            provider,
            event_log,
            default_timeout_ms: options.default_timeout_ms,
            template: options.initial_toast.clone().unwrap_or(template),
            should_quit: false,
            drawn_revision: None,
        };

        if let Some(warning) = options.config_warning {
            app.toast()
                .set(ToastConfig::new().kind("error").title("Config").caption(warning));
        } else if let Some(initial) = options.initial_toast {
            app.toast().set(initial.on_close(app.close_logger("initial")));
        }

        Ok(app)
    }

    /// Controller of the app's provider
    pub fn toast(&self) -> ToastController {
        self.provider.toast()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub(super) fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Run the auto-dismiss check. Returns true if the toast closed.
    pub fn tick(&self) -> bool {
        self.provider.tick()
    }

    /// True once per state change since the last call
    pub fn take_dirty(&mut self) -> bool {
        let revision = self.provider.revision();
        let dirty = self.drawn_revision != Some(revision);
        self.drawn_revision = Some(revision);
        dirty
    }

    /// Close handler that records how the toast named `label` was dismissed
    pub fn close_logger(&self, label: &str) -> impl Fn(&CloseEvent) + 'static {
        let log = Rc::clone(&self.event_log);
        let label = label.to_string();
        move |event| {
            let cause = match event {
                CloseEvent::Input(_) => "key",
                CloseEvent::TimedOut => "timeout",
                CloseEvent::Programmatic => "code",
            };
            log.borrow_mut().push(format!("closed {} by {}", label, cause));
        }
    }

    pub(super) fn close_handler(&self, label: &str) -> CloseHandler {
        CloseHandler::new(self.close_logger(label))
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
