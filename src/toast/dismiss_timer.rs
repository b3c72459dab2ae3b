//! Auto-dismiss timer
//!
//! At most one timer is live at a time. A timer is a deadline checked by the
//! UI thread in `take_expired`, so replacing or cancelling it simply forgets
//! the old deadline and a stale timer can never close a newer toast.

use std::time::{Duration, Instant};

use super::timeout::Timeout;
use super::toast_state::ToastState;

#[derive(Debug, Clone, Copy)]
struct LiveTimer {
    generation: u64,
    deadline: Instant,
}

#[derive(Debug)]
pub(crate) struct DismissTimer {
    live: Option<LiveTimer>,
    next_generation: u64,
}

impl DismissTimer {
    pub(crate) fn new() -> Self {
        Self {
            live: None,
            next_generation: 1,
        }
    }

    /// Bring the timer in line with the state after an update
    ///
    /// A visible toast with a numeric timeout gets a fresh timer; anything
    /// else cancels the current one.
    pub(crate) fn sync(&mut self, state: &ToastState) {
        if !state.active {
            self.cancel();
            return;
        }

        match state.timeout {
            Some(timeout) => match timeout.delay() {
                Some(delay) => {
                    self.schedule(delay);
                }
                None => {
                    self.cancel();
                    log::warn!("Toast timeout is {}, auto-dismiss disabled", Timeout::NotANumber);
                }
            },
            None => self.cancel(),
        }
    }

    /// Start a timer for `delay`, replacing any live one
    pub(crate) fn schedule(&mut self, delay: Duration) -> u64 {
        self.cancel();

        let generation = self.next_generation;
        self.next_generation = self.next_generation.wrapping_add(1);

        log::debug!("Scheduled auto-dismiss {} in {:?}", generation, delay);
        self.live = Some(LiveTimer {
            generation,
            deadline: Instant::now() + delay,
        });
        generation
    }

    pub(crate) fn cancel(&mut self) {
        if let Some(live) = self.live.take() {
            log::debug!("Cancelled auto-dismiss {}", live.generation);
        }
    }

    pub(crate) fn is_pending(&self) -> bool {
        self.live.is_some()
    }

    /// Returns true once when the live timer's deadline has passed
    pub(crate) fn take_expired(&mut self) -> bool {
        self.take_expired_at(Instant::now())
    }

    fn take_expired_at(&mut self, now: Instant) -> bool {
        match self.live {
            Some(live) if now >= live.deadline => {
                self.live = None;
                log::debug!("Auto-dismiss {} fired", live.generation);
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "dismiss_timer_tests.rs"]
mod dismiss_timer_tests;
