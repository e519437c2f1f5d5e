use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use strum::IntoEnumIterator;

use crate::actuation::Choice;
use crate::advisor::Recommendation;
use crate::cards::{Rank, Suit};
use crate::tracker::{GamePhase, PhaseTracker};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuitRemaining {
    pub suit: Suit,
    pub symbol: char,
    /// Ascending
    pub ranks: Vec<Rank>,
    pub count: usize,
}

/// Everything a presentation layer needs to redraw, detached from the live deck
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckSnapshot {
    pub suits: Vec<SuitRemaining>,
    pub total: usize,
    pub phase: GamePhase,
    pub recommendation: Option<Recommendation>,
    pub choice: Option<Choice>,
    /// Events lost since the deck was last reset; the deck may be stale when non-zero
    pub missed_events: u64,
    pub captured_at: DateTime<Utc>,
}

impl DeckSnapshot {
    pub fn capture(tracker: &PhaseTracker, choice: Option<Choice>) -> Self {
        let deck = tracker.deck();
        let suits = Suit::iter()
            .map(|suit| {
                let ranks: Vec<Rank> = deck.ranks(suit).collect();
                SuitRemaining {
                    suit,
                    symbol: suit.symbol(),
                    count: ranks.len(),
                    ranks,
                }
            })
            .collect();

        Self {
            suits,
            total: deck.size(),
            phase: tracker.phase(),
            recommendation: tracker.recommendation(),
            choice,
            missed_events: tracker.missed_events(),
            captured_at: Utc::now(),
        }
    }

    pub fn suit(&self, suit: Suit) -> Option<&SuitRemaining> {
        self.suits.iter().find(|remaining| remaining.suit == suit)
    }

    pub fn header(&self) -> String {
        match &self.recommendation {
            Some(recommendation) => format!("Remaining Cards - {recommendation}"),
            None => "Remaining Cards".to_string(),
        }
    }
}

impl fmt::Display for DeckSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header())?;
        for remaining in &self.suits {
            let ranks: Vec<String> = remaining.ranks.iter().map(Rank::to_string).collect();
            writeln!(
                f,
                "{} {:<8} {:>2} cards: {}",
                remaining.symbol,
                remaining.suit.name(),
                remaining.count,
                ranks.join(" ")
            )?;
        }
        write!(f, "Total: {} cards remaining", self.total)
    }
}
