//! Per-slot fetch bookkeeping: which request is the latest, and whether the
//! owning view is still alive.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

/// Identifies one issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket(u64);

/// What happened to a fetch once it completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The result was applied to the view state.
    Applied,
    /// The request failed; the failure was reported and prior state kept.
    Failed,
    /// A newer fetch was issued or the view was disposed; result dropped.
    Discarded,
}

/// Generation counter plus cancellation token for one fetch slot.
///
/// Every new fetch supersedes the previous one. Once disposed, in-flight
/// fetches resolve to nothing.
#[derive(Debug, Default)]
pub struct FetchGate {
    generation: AtomicU64,
    cancel: CancellationToken,
}

impl FetchGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> FetchTicket {
        FetchTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: FetchTicket) -> bool {
        !self.cancel.is_cancelled() && self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Drives `future` unless the gate is disposed first.
    ///
    /// Returns `None` when cancelled mid-flight or when `ticket` was
    /// superseded by the time the future resolved.
    pub async fn guard<F, T>(&self, ticket: FetchTicket, future: F) -> Option<T>
    where
        F: Future<Output = T>,
    {
        let result = tokio::select! {
            _ = self.cancel.cancelled() => return None,
            result = future => result,
        };
        if self.is_current(ticket) {
            Some(result)
        } else {
            tracing::debug!(ticket = ticket.0, "Discarding superseded fetch result");
            None
        }
    }

    pub fn dispose(&self) {
        self.cancel.cancel();
    }

    pub fn is_disposed(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_newer_ticket_supersedes() {
        let gate = FetchGate::new();
        let first = gate.issue();
        let second = gate.issue();
        assert!(!gate.is_current(first));
        assert!(gate.is_current(second));

        assert_eq!(gate.guard(first, async { 1 }).await, None);
        assert_eq!(gate.guard(second, async { 2 }).await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_dispose_cancels_in_flight() {
        let gate = FetchGate::new();
        let ticket = gate.issue();

        let slow = gate.guard(ticket, async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "late"
        });
        let dispose = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            gate.dispose();
        };
        let (result, _) = tokio::join!(slow, dispose);

        assert_eq!(result, None);
        assert!(gate.is_disposed());
        assert!(!gate.is_current(gate.issue()));
    }
}
