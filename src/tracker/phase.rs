use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the current round is in its lifecycle, as far as the observed
/// responses tell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    Idle,
    RoundStarted,
    AwaitingChoice,
    Settled,
}

impl GamePhase {
    /// No round in progress. A settled round rests here until the next one opens.
    pub fn is_idle(&self) -> bool {
        matches!(self, GamePhase::Idle | GamePhase::Settled)
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Idle => "idle",
            GamePhase::RoundStarted => "round_started",
            GamePhase::AwaitingChoice => "awaiting_choice",
            GamePhase::Settled => "settled",
        };
        write!(f, "{name}")
    }
}
