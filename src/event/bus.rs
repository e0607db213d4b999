use tokio::sync::broadcast;
use tracing::debug;

use super::events::MatchEvent;

/// Broadcast channel for match events
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<MatchEvent>,
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(100)
    }
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes to current subscribers; returns how many received it
    pub fn emit(&self, event: MatchEvent) -> usize {
        let user_id = event.user_id().to_string();
        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(user_id = %user_id, receivers = receiver_count, "Match event emitted");
                receiver_count
            }
            Err(_) => {
                debug!(user_id = %user_id, "Match event emitted with no receivers");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<MatchEvent> {
        self.sender.subscribe()
    }
}
