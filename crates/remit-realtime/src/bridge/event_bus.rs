//! In-memory event bus shared by every consumer of the live feed.

use tokio::sync::broadcast;

use remit_entity::event::RealtimeEvent;

/// Broadcast bus carrying decoded events from the single connection to
/// the presenter, the badge, and any other subscriber.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<RealtimeEvent>,
}

impl EventBus {
    /// Create a bus that buffers up to `buffer_size` events per subscriber.
    pub fn new(buffer_size: usize) -> Self {
        let (sender, _) = broadcast::channel(buffer_size.max(1));
        Self { sender }
    }

    /// Publish an event. Returns how many subscribers received it.
    pub fn publish(&self, event: RealtimeEvent) -> usize {
        self.sender.send(event).unwrap_or(0)
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<RealtimeEvent> {
        self.sender.subscribe()
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
