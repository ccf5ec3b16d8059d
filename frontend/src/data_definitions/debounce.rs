//! Debounced actions owned by a component instance.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// Holds at most one pending action. Every new call cancels the pending one
/// and starts the delay over.
pub struct Debouncer {
    delay_ms: u32,
    pending: Option<Task>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self { delay_ms, pending: None }
    }

    /// Must be called from inside the component's runtime (event handlers).
    pub fn call(&mut self, action: impl FnOnce() + 'static) {
        self.cancel();
        let delay_ms = self.delay_ms;
        self.pending = Some(spawn(async move {
            TimeoutFuture::new(delay_ms).await;
            action();
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.pending.take() {
            task.cancel();
        }
    }
}

/// A debouncer scoped to the calling component; its pending task is
/// spawned in that scope and dies with it.
pub fn use_debouncer(delay_ms: u32) -> Signal<Debouncer> {
    use_signal(move || Debouncer::new(delay_ms))
}
