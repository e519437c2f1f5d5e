use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;

use strum::IntoEnumIterator;
use thiserror::Error;

use crate::cards::{Card, Rank, Suit};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The card was already dealt, or never reset back in. Signals that
    /// observation upstream lost or reordered events.
    #[error("Card {0} is not in the deck")]
    CardNotPresent(Card),
}

/// The cards not yet known to be dealt, grouped by suit.
///
/// Every suit holds a subset of the 13 canonical ranks. A removed card only
/// comes back through [`Deck::reset`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    suits: HashMap<Suit, BTreeSet<Rank>>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a full 52-card deck
    pub fn new() -> Self {
        let suits = Suit::iter()
            .map(|suit| (suit, Rank::iter().collect()))
            .collect();
        Self { suits }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn remove(&mut self, card: Card) -> Result<(), DeckError> {
        let removed = self
            .suits
            .get_mut(&card.suit)
            .is_some_and(|ranks| ranks.remove(&card.rank));

        if removed {
            Ok(())
        } else {
            Err(DeckError::CardNotPresent(card))
        }
    }

    pub fn contains(&self, card: Card) -> bool {
        self.suits
            .get(&card.suit)
            .is_some_and(|ranks| ranks.contains(&card.rank))
    }

    /// Counts remaining cards grouped by `classify(rank)`. Read-only.
    pub fn distribution<K, F>(&self, classify: F) -> HashMap<K, usize>
    where
        K: Eq + Hash,
        F: Fn(Rank) -> K,
    {
        let mut counts = HashMap::new();
        for rank in self.suits.values().flatten() {
            *counts.entry(classify(*rank)).or_insert(0) += 1;
        }
        counts
    }

    /// Remaining ranks of one suit in ascending order
    pub fn ranks(&self, suit: Suit) -> impl Iterator<Item = Rank> + '_ {
        self.suits.get(&suit).into_iter().flatten().copied()
    }

    pub fn size(&self) -> usize {
        self.suits.values().map(BTreeSet::len).sum()
    }

    pub fn is_full(&self) -> bool {
        self.size() == Card::all_cards().len()
    }
}
