use thiserror::Error;

use crate::cards::CardError;
use crate::deck::DeckError;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Invalid card: {0}")]
    InvalidCard(#[from] CardError),

    #[error("Missing {0} in {1} event")]
    MissingCard(&'static str, &'static str),

    #[error("Deck out of sync: {0}")]
    Desynchronized(#[from] DeckError),
}
