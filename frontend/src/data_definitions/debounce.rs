//! Timer-based debounce for the search input.

use gloo_timers::callback::Timeout;

/// Schedules a callback after a fixed delay; scheduling again before the
/// timer fires cancels the pending run. One instance per input, owned by a
/// signal, so there is exactly one pending commit at any time.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Timeout>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Debouncer {
            delay_ms,
            pending: None,
        }
    }

    pub fn schedule(&mut self, callback: impl FnOnce() + 'static) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
        self.pending = Some(Timeout::new(self.delay_ms, callback));
    }

    /// Cancels the pending run, if any. Used when the user commits with
    /// Enter before the timer fires.
    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.cancel();
        }
    }
}
