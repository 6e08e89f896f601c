//! Unseen-transactions badge.

use tokio::sync::{broadcast, watch};
use tokio_util::sync::CancellationToken;

use remit_entity::event::RealtimeEvent;

/// Counts `NEW_TRANSACTION` events until the operator marks them read.
#[derive(Debug)]
pub struct UnseenCounter {
    count: watch::Sender<u64>,
}

impl UnseenCounter {
    /// A counter at zero.
    pub fn new() -> Self {
        let (count, _) = watch::channel(0);
        Self { count }
    }

    /// Current count.
    pub fn count(&self) -> u64 {
        *self.count.borrow()
    }

    /// Watch the count.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.count.subscribe()
    }

    /// Count `event` if it is a new transaction.
    pub fn record(&self, event: &RealtimeEvent) -> bool {
        if !matches!(event, RealtimeEvent::NewTransaction(_)) {
            return false;
        }
        self.count.send_modify(|n| *n = n.saturating_add(1));
        true
    }

    /// Reset to zero.
    pub fn mark_all_read(&self) {
        self.count.send_if_modified(|n| std::mem::replace(n, 0) != 0);
    }

    /// Consume `events` until cancelled or the bus closes.
    pub async fn run(
        &self,
        mut events: broadcast::Receiver<RealtimeEvent>,
        cancel: CancellationToken,
    ) {
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => break,
                received = events.recv() => match received {
                    Ok(event) => {
                        self.record(&event);
                    }
                    Err(broadcast::error::RecvError::Lagged(skipped)) => {
                        tracing::warn!("Unseen badge lagged, {} events skipped", skipped);
                    }
                    Err(broadcast::error::RecvError::Closed) => break,
                },
            }
        }
    }
}

impl Default for UnseenCounter {
    fn default() -> Self {
        Self::new()
    }
}
