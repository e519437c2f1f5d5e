use tokio::sync::broadcast;
use tracing::debug;

use super::events::GameEvent;

/// Event bus distributing observed responses to subscribers
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<GameEvent>,
}

impl EventBus {
    /// Creates a new event bus buffering up to `capacity` events per subscriber
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Emits an event to all current subscribers, returning how many received it
    pub fn publish(&self, event: GameEvent) -> usize {
        match self.sender.send(event) {
            Ok(receiver_count) => {
                debug!(receivers = receiver_count, "Game event published");
                receiver_count
            }
            Err(_) => {
                debug!("Game event published with no receivers");
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<GameEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
