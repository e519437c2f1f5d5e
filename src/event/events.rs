use serde::{Deserialize, Serialize};

/// A network response observed on the page, as handed over by the event source
///
/// Events are facts about responses the game already sent. The payload is
/// kept as loose JSON until a handler decides the endpoint is relevant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Identifies which request produced the response
    pub endpoint: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl GameEvent {
    pub fn new(endpoint: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            endpoint: endpoint.into(),
            payload,
        }
    }

    pub fn is_for(&self, endpoint: &str) -> bool {
        self.endpoint == endpoint
    }
}
