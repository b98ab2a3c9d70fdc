//! Trailing-edge debounce for search inputs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Coalesces rapid inputs: only the last value submitted within the quiet
/// window comes back out.
#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    latest: AtomicU64,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            latest: AtomicU64::new(0),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Waits out the window. Returns `Some(value)` if no newer value was
    /// submitted meanwhile, `None` otherwise.
    pub async fn settle<T>(&self, value: T) -> Option<T> {
        let mine = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.window).await;
        (self.latest.load(Ordering::SeqCst) == mine).then_some(value)
    }
}
