use serde_json::{json, Value};

use highlow::GameEvent;

pub const ENDPOINT: &str = "highlowData";

// ============================================================================
// Payload Builders
// ============================================================================

/// Card descriptor the way the game encodes it, e.g. `card("hearts", "8")`
pub fn card(suit: &str, name_short: &str) -> Value {
    json!({
        "classCode": format!("{suit}-{name_short}"),
        "nameShort": name_short,
    })
}

/// Builds high-low responses one field at a time
pub struct EventBuilder {
    endpoint: String,
    status: Option<String>,
    round: serde_json::Map<String, Value>,
    deck_shuffled: Option<Value>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: ENDPOINT.to_string(),
            status: None,
            round: serde_json::Map::new(),
            deck_shuffled: None,
        }
    }

    pub fn game_started(suit: &str, name_short: &str) -> Self {
        Self::new()
            .status("gameStarted")
            .result("Correct")
            .dealer(suit, name_short)
    }

    pub fn failed_start(suit: &str, name_short: &str) -> Self {
        Self::new()
            .status("gameStarted")
            .result("Incorrect")
            .dealer(suit, name_short)
    }

    pub fn make_choice(suit: &str, name_short: &str) -> Self {
        Self::new().status("makeChoice").player(suit, name_short)
    }

    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn result(mut self, result: &str) -> Self {
        self.round.insert("result".into(), json!(result));
        self
    }

    pub fn dealer(mut self, suit: &str, name_short: &str) -> Self {
        self.round
            .insert("dealerCardInfo".into(), card(suit, name_short));
        self
    }

    pub fn player(mut self, suit: &str, name_short: &str) -> Self {
        self.round
            .insert("playerCardInfo".into(), card(suit, name_short));
        self
    }

    pub fn shuffled(mut self) -> Self {
        self.deck_shuffled = Some(json!(true));
        self
    }

    pub fn build(self) -> GameEvent {
        let mut payload = serde_json::Map::new();
        if let Some(status) = self.status {
            payload.insert("status".into(), json!(status));
        }
        if !self.round.is_empty() {
            payload.insert("currentGame".into(), json!([Value::Object(self.round)]));
        }
        if let Some(flag) = self.deck_shuffled {
            payload.insert("DB".into(), json!({ "deckShuffled": flag }));
        }
        GameEvent::new(self.endpoint, Value::Object(payload))
    }
}
