use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::basic::{Card, Rank, Suit};

/// A malformed card descriptor. The card it describes cannot be tracked.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Invalid card value ({0})")]
    InvalidRank(String),
    #[error("Invalid card suit ({0})")]
    InvalidSuit(String),
}

/// Card descriptor as it appears in the game's responses.
///
/// `class_code` carries the suit before the first `-` (e.g. `hearts-8`) and
/// `name_short` is either a decimal rank or one of `J`, `Q`, `K`, `A`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardDescriptor {
    pub class_code: String,
    pub name_short: String,
}

impl CardDescriptor {
    pub fn new(class_code: impl Into<String>, name_short: impl Into<String>) -> Self {
        Self {
            class_code: class_code.into(),
            name_short: name_short.into(),
        }
    }
}

pub fn decode(descriptor: &CardDescriptor) -> Result<Card, CardError> {
    let suit_token = descriptor
        .class_code
        .split('-')
        .next()
        .unwrap_or_default();
    let suit = Suit::try_from(suit_token).map_err(CardError::InvalidSuit)?;
    let rank = decode_rank(&descriptor.name_short)?;

    Ok(Card::new(rank, suit))
}

fn decode_rank(token: &str) -> Result<Rank, CardError> {
    let rank = match token.trim() {
        "J" => Rank::Jack,
        "Q" => Rank::Queen,
        "K" => Rank::King,
        "A" => Rank::Ace,
        numeric => numeric
            .parse::<u8>()
            .ok()
            .and_then(|value| Rank::try_from(value).ok())
            .ok_or_else(|| CardError::InvalidRank(token.to_string()))?,
    };

    Ok(rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("hearts-2", "2", Rank::Two, Suit::Hearts)]
    #[case("diamonds-10", "10", Rank::Ten, Suit::Diamonds)]
    #[case("clubs-J", "J", Rank::Jack, Suit::Clubs)]
    #[case("spades-Q", "Q", Rank::Queen, Suit::Spades)]
    #[case("hearts-K", "K", Rank::King, Suit::Hearts)]
    #[case("spades-A", "A", Rank::Ace, Suit::Spades)]
    #[case("clubs", "7", Rank::Seven, Suit::Clubs)]
    fn test_decode_valid(
        #[case] class_code: &str,
        #[case] name_short: &str,
        #[case] rank: Rank,
        #[case] suit: Suit,
    ) {
        let card = decode(&CardDescriptor::new(class_code, name_short)).unwrap();
        assert_eq!(card, Card::new(rank, suit));
    }

    #[rstest]
    #[case("X")]
    #[case("")]
    #[case("1")]
    #[case("15")]
    #[case("-3")]
    #[case("j")]
    fn test_decode_invalid_rank(#[case] name_short: &str) {
        let result = decode(&CardDescriptor::new("hearts-x", name_short));
        assert!(matches!(result, Err(CardError::InvalidRank(_))));
    }

    #[test]
    fn test_decode_invalid_suit() {
        let result = decode(&CardDescriptor::new("stars-8", "8"));
        assert_eq!(result, Err(CardError::InvalidSuit("stars".to_string())));
    }

    #[test]
    fn test_descriptor_deserializes_from_camel_case() {
        let descriptor: CardDescriptor =
            serde_json::from_value(serde_json::json!({ "classCode": "hearts-8", "nameShort": "8" }))
                .unwrap();
        assert_eq!(descriptor, CardDescriptor::new("hearts-8", "8"));
    }

    #[test]
    fn test_invalid_rank_message() {
        let err = decode(&CardDescriptor::new("hearts-Z", "Z")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid card value (Z)");
    }
}
