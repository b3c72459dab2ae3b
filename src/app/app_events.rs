use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;

impl App {
    /// Route a terminal event: the provider's close key first, then the demo keys.
    /// Returns true if the event was handled.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        if self.provider.handle_event(event) {
            return true;
        }

        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(*key),
            _ => false,
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('c') {
                self.quit();
                return true;
            }
            return false;
        }

        match key.code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('e') => {
                self.toast()
                    .reset()
                    .error((
                        "Request failed",
                        "HTTP 500",
                        "The server could not handle the request.",
                    ))
                    .on_close_handler(Some(self.close_handler("error")));
                self.show_with_default_timeout();
            }
            KeyCode::Char('i') => {
                self.toast()
                    .reset()
                    .info(("Heads up", "Press Esc to dismiss this toast."))
                    .on_close_handler(Some(self.close_handler("info")));
                self.show_with_default_timeout();
            }
            KeyCode::Char('s') => {
                self.toast()
                    .reset()
                    .success(("Saved", "All changes were written."))
                    .on_close_handler(Some(self.close_handler("success")));
                self.show_with_default_timeout();
            }
            KeyCode::Char('w') => {
                self.toast()
                    .reset()
                    .warning(("Careful", "Disk usage is above 90%."))
                    .on_close_handler(Some(self.close_handler("warning")));
                self.show_with_default_timeout();
            }
            KeyCode::Char('t') => {
                let config = self.template.clone().on_close(self.close_logger("template"));
                self.toast().set(config);
            }
            KeyCode::Char('c') => {
                // Builds a full toast but never calls show, so it stays hidden
                self.toast()
                    .kind("info")
                    .title("Invisible")
                    .caption("Chained without show()");
                self.event_log
                    .borrow_mut()
                    .push("chained without show: toast stays hidden");
            }
            KeyCode::Char('r') => {
                self.toast().reset();
            }
            KeyCode::Char('x') => {
                self.toast().set(None);
            }
            _ => return false,
        }
        true
    }

    fn show_with_default_timeout(&self) {
        let toast = self.toast();
        if let Some(ms) = self.default_timeout_ms {
            toast.timeout(ms);
        }
        toast.show();
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
