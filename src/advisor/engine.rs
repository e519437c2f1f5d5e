use std::cmp::Ordering;

use crate::cards::Rank;
use crate::deck::Deck;

use super::{confidence_threshold, Confidence, Recommendation, Verdict};

/// Compares the remaining cards against `reference`.
///
/// Ties between the higher and lower counts stay [`Verdict::Indifferent`];
/// breaking them is up to whoever acts on the recommendation.
pub fn recommend(deck: &Deck, reference: Rank) -> Recommendation {
    let counts = deck.distribution(|rank| rank.cmp(&reference));
    let count = |ordering| counts.get(&ordering).copied().unwrap_or_default();

    let higher_count = count(Ordering::Greater);
    let lower_count = count(Ordering::Less);
    let equal_count = count(Ordering::Equal);

    let (verdict, confidence) = match higher_count.cmp(&lower_count) {
        Ordering::Greater => (Verdict::Higher, confidence(higher_count, lower_count)),
        Ordering::Less => (Verdict::Lower, confidence(lower_count, higher_count)),
        Ordering::Equal => (Verdict::Indifferent, Confidence::Low),
    };

    Recommendation {
        reference,
        higher_count,
        lower_count,
        equal_count,
        verdict,
        confidence,
    }
}

/// Tier for the ratio `winning / losing`. A zero losing count is always High.
fn confidence(winning: usize, losing: usize) -> Confidence {
    let (winning, losing) = (winning as f64, losing as f64);

    if winning > losing * confidence_threshold::HIGH {
        Confidence::High
    } else if winning > losing * confidence_threshold::MEDIUM {
        Confidence::Medium
    } else {
        Confidence::Low
    }
}
