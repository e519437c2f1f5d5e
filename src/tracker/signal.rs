use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use strum_macros::EnumString;

use crate::cards::{decode, Card, CardDescriptor};

use super::TrackerError;

/// Status tags the high-low game puts on its responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum Status {
    /// A dealer card was turned over
    GameStarted,
    /// The player's card is revealed and a choice is due
    MakeChoice,
    /// A fresh game was opened
    StartGame,
    /// The player cashed out
    MoneyTaken,
}

/// Raw response body of the game endpoint.
///
/// Top-level fields are read leniently: a field of an unexpected shape
/// (`null`, `[]` standing in for an empty object) reads as absent. The
/// round is only decoded for the statuses that reveal a card.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighLowPayload {
    #[serde(default, deserialize_with = "lenient")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub current_game: Option<Vec<Value>>,
    #[serde(rename = "DB", default, deserialize_with = "lenient")]
    pub db: Option<DeckState>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundDescriptor {
    pub result: Option<String>,
    pub dealer_card_info: Option<CardDescriptor>,
    pub player_card_info: Option<CardDescriptor>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckState {
    #[serde(default, deserialize_with = "lenient")]
    pub deck_shuffled: Option<Flag>,
}

/// Loosely typed boolean. The game has sent booleans, numbers and strings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Flag {
    pub fn is_set(&self) -> bool {
        match self {
            Flag::Bool(value) => *value,
            Flag::Number(value) => *value != 0.0,
            Flag::Text(value) => !matches!(value.trim(), "" | "0" | "false"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Opening {
    /// The round began and the dealer's card is face up
    Revealed { dealer: Card },
    /// The round never validly began; nothing was dealt to track
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    NewGame,
    MoneyTaken,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseSignal {
    RoundStarted(Opening),
    PlayerChose { player: Option<Card> },
    RoundSettled(Settlement),
    Irrelevant,
}

/// A response reduced to what the tracker acts on. A single response can
/// carry both a phase signal and a reshuffle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedEvent {
    pub signal: PhaseSignal,
    pub reshuffled: bool,
}

const FAILED_OPENING: &str = "Incorrect";

impl HighLowPayload {
    pub fn from_json(payload: &Value) -> Result<Self, TrackerError> {
        Ok(Self::deserialize(payload)?)
    }

    /// The first round descriptor, decoded on demand
    pub fn round(&self) -> Result<Option<RoundDescriptor>, TrackerError> {
        self.current_game
            .as_ref()
            .and_then(|rounds| rounds.first())
            .map(RoundDescriptor::deserialize)
            .transpose()
            .map_err(TrackerError::from)
    }

    pub fn status(&self) -> Option<Status> {
        self.status.as_deref().and_then(|tag| tag.parse().ok())
    }

    pub fn reshuffled(&self) -> bool {
        self.db
            .as_ref()
            .and_then(|db| db.deck_shuffled.as_ref())
            .is_some_and(Flag::is_set)
    }

    /// Decodes every card the response reveals. Fails on the first malformed one.
    pub fn classify(&self) -> Result<ClassifiedEvent, TrackerError> {
        let signal = match self.status() {
            Some(Status::GameStarted) => {
                let round = self
                    .round()?
                    .ok_or(TrackerError::MissingCard("currentGame", "gameStarted"))?;
                if round.result.as_deref() == Some(FAILED_OPENING) {
                    PhaseSignal::RoundStarted(Opening::Failed)
                } else {
                    let dealer = round
                        .dealer_card_info
                        .as_ref()
                        .ok_or(TrackerError::MissingCard("dealerCardInfo", "gameStarted"))?;
                    PhaseSignal::RoundStarted(Opening::Revealed {
                        dealer: decode(dealer)?,
                    })
                }
            }
            Some(Status::MakeChoice) => {
                let player = self
                    .round()?
                    .and_then(|round| round.player_card_info)
                    .map(|card| decode(&card))
                    .transpose()?;
                PhaseSignal::PlayerChose { player }
            }
            Some(Status::StartGame) => PhaseSignal::RoundSettled(Settlement::NewGame),
            Some(Status::MoneyTaken) => PhaseSignal::RoundSettled(Settlement::MoneyTaken),
            None => PhaseSignal::Irrelevant,
        };

        Ok(ClassifiedEvent {
            signal,
            reshuffled: self.reshuffled(),
        })
    }
}
