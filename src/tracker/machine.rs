use tracing::{debug, info, warn};

use crate::advisor::{recommend, Recommendation};
use crate::cards::{Card, Rank};
use crate::config::ResetPolicy;
use crate::deck::Deck;

use super::{ClassifiedEvent, GamePhase, Opening, PhaseSignal, TrackerError};

/// What applying one event did to the tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub phase: GamePhase,
    pub deck_changed: bool,
    /// The deck fell out of sync with the observed cards and was reset
    pub resynced: bool,
}

/// Sequences deck mutations from classified game events.
///
/// Owns the [`Deck`] outright; everything else only sees it through
/// [`PhaseTracker::deck`] or a recommendation derived from it.
#[derive(Debug, Clone)]
pub struct PhaseTracker {
    deck: Deck,
    phase: GamePhase,
    reference: Option<Rank>,
    reset_policy: ResetPolicy,
    /// Events lost upstream since the last full reset
    missed_events: u64,
}

impl Default for PhaseTracker {
    fn default() -> Self {
        Self::new(ResetPolicy::default())
    }
}

impl PhaseTracker {
    pub fn new(reset_policy: ResetPolicy) -> Self {
        Self {
            deck: Deck::new(),
            phase: GamePhase::Idle,
            reference: None,
            reset_policy,
            missed_events: 0,
        }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The most recently revealed dealer rank of the round in progress
    pub fn reference(&self) -> Option<Rank> {
        self.reference
    }

    /// Non-zero means the deck may still hold cards that were dealt unseen.
    /// Only a full reset trusts the deck again.
    pub fn missed_events(&self) -> u64 {
        self.missed_events
    }

    pub fn mark_missed(&mut self, missed: u64) {
        self.missed_events = self.missed_events.saturating_add(missed);
    }

    pub fn recommendation(&self) -> Option<Recommendation> {
        self.reference.map(|reference| recommend(&self.deck, reference))
    }

    /// Full deck, no round in progress
    pub fn reset(&mut self) {
        self.deck.reset();
        self.missed_events = 0;
        self.clear_round();
    }

    pub fn clear_round(&mut self) {
        self.phase = GamePhase::Idle;
        self.reference = None;
    }

    /// Applies one event. The phase action always runs before a reshuffle
    /// carried by the same event.
    pub fn apply(&mut self, event: ClassifiedEvent) -> Transition {
        let mut deck_changed = false;
        let mut resynced = false;

        if let Err(err) = self.apply_signal(event.signal, &mut deck_changed) {
            warn!(
                error = %err,
                signal = ?event.signal,
                "Deck out of sync with observed cards - resetting"
            );
            self.reset();
            deck_changed = true;
            resynced = true;
        }

        if event.reshuffled {
            info!(phase = %self.phase, "Deck reshuffled - resetting");
            self.reset();
            deck_changed = true;
        }

        Transition {
            phase: self.phase,
            deck_changed,
            resynced,
        }
    }

    fn apply_signal(
        &mut self,
        signal: PhaseSignal,
        deck_changed: &mut bool,
    ) -> Result<(), TrackerError> {
        match signal {
            PhaseSignal::RoundStarted(Opening::Revealed { dealer }) => {
                self.phase = GamePhase::RoundStarted;
                self.reference = Some(dealer.rank);
                self.deal(dealer, deck_changed)?;
            }
            PhaseSignal::RoundStarted(Opening::Failed) => {
                debug!("Round failed to open - discarding round");
                self.clear_round();
            }
            PhaseSignal::PlayerChose { player } => {
                let from = self.phase;
                if let Some(card) = player {
                    self.deal(card, deck_changed)?;
                }

                if from.is_idle() || from == GamePhase::RoundStarted {
                    self.phase = GamePhase::AwaitingChoice;
                } else {
                    warn!(phase = %from, "Unexpected player choice - returning to idle");
                    self.clear_round();
                }
            }
            PhaseSignal::RoundSettled(settlement) => {
                debug!(?settlement, "Round settled");
                self.clear_round();
                self.phase = GamePhase::Settled;

                if self.reset_policy == ResetPolicy::NewGame {
                    self.deck.reset();
                    self.missed_events = 0;
                    *deck_changed = true;
                }
            }
            PhaseSignal::Irrelevant => {}
        }

        Ok(())
    }

    fn deal(&mut self, card: Card, deck_changed: &mut bool) -> Result<(), TrackerError> {
        self.deck.remove(card)?;
        *deck_changed = true;
        debug!(card = %card, remaining = self.deck.size(), "Card dealt");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::Verdict;
    use crate::cards::Suit;
    use crate::tracker::Settlement;
    use rstest::rstest;

    fn event(signal: PhaseSignal) -> ClassifiedEvent {
        ClassifiedEvent {
            signal,
            reshuffled: false,
        }
    }

    fn dealer(rank: Rank, suit: Suit) -> ClassifiedEvent {
        event(PhaseSignal::RoundStarted(Opening::Revealed {
            dealer: Card::new(rank, suit),
        }))
    }

    fn player(rank: Rank, suit: Suit) -> ClassifiedEvent {
        event(PhaseSignal::PlayerChose {
            player: Some(Card::new(rank, suit)),
        })
    }

    #[test]
    fn round_start_removes_dealer_card_and_recommends() {
        let mut tracker = PhaseTracker::default();

        let transition = tracker.apply(dealer(Rank::Two, Suit::Hearts));

        assert_eq!(transition.phase, GamePhase::RoundStarted);
        assert!(transition.deck_changed);
        assert!(!transition.resynced);
        assert_eq!(tracker.deck().size(), 51);

        let recommendation = tracker.recommendation().unwrap();
        assert_eq!(recommendation.verdict, Verdict::Higher);
        assert_eq!(recommendation.higher_count, 48);
    }

    #[test]
    fn failed_opening_keeps_deck() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Five, Suit::Clubs));

        let transition = tracker.apply(event(PhaseSignal::RoundStarted(Opening::Failed)));

        assert_eq!(transition.phase, GamePhase::Idle);
        assert!(!transition.deck_changed);
        assert_eq!(tracker.deck().size(), 51);
        assert_eq!(tracker.reference(), None);
    }

    #[test]
    fn player_choice_after_round_start_awaits_choice() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Nine, Suit::Diamonds));

        let transition = tracker.apply(player(Rank::Jack, Suit::Spades));

        assert_eq!(transition.phase, GamePhase::AwaitingChoice);
        assert_eq!(tracker.deck().size(), 50);
        assert_eq!(tracker.reference(), Some(Rank::Nine));
    }

    #[test]
    fn player_choice_while_awaiting_falls_back_to_idle() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Nine, Suit::Diamonds));
        tracker.apply(player(Rank::Jack, Suit::Spades));

        let transition = tracker.apply(player(Rank::Four, Suit::Hearts));

        assert_eq!(transition.phase, GamePhase::Idle);
        assert_eq!(tracker.deck().size(), 49);
        assert_eq!(tracker.reference(), None);
    }

    #[test]
    fn duplicate_card_forces_resync() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Queen, Suit::Hearts));
        tracker.apply(player(Rank::Three, Suit::Clubs));

        let transition = tracker.apply(dealer(Rank::Queen, Suit::Hearts));

        assert!(transition.resynced);
        assert!(transition.deck_changed);
        assert_eq!(transition.phase, GamePhase::Idle);
        assert!(tracker.deck().is_full());
        assert_eq!(tracker.recommendation(), None);
    }

    #[test]
    fn reshuffle_runs_after_phase_action() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Six, Suit::Spades));

        let mut combined = dealer(Rank::Seven, Suit::Hearts);
        combined.reshuffled = true;
        let transition = tracker.apply(combined);

        assert_eq!(transition.phase, GamePhase::Idle);
        assert!(transition.deck_changed);
        assert!(tracker.deck().is_full());
    }

    #[test]
    fn settlement_keeps_deck_by_default() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Ten, Suit::Clubs));

        let transition = tracker.apply(event(PhaseSignal::RoundSettled(Settlement::MoneyTaken)));

        assert_eq!(transition.phase, GamePhase::Settled);
        assert!(!transition.deck_changed);
        assert_eq!(tracker.deck().size(), 51);
        assert_eq!(tracker.recommendation(), None);
    }

    #[rstest]
    #[case(Settlement::NewGame)]
    #[case(Settlement::MoneyTaken)]
    fn new_game_policy_resets_on_settlement(#[case] settlement: Settlement) {
        let mut tracker = PhaseTracker::new(ResetPolicy::NewGame);
        tracker.apply(dealer(Rank::Ten, Suit::Clubs));

        let transition = tracker.apply(event(PhaseSignal::RoundSettled(settlement)));

        assert_eq!(transition.phase, GamePhase::Settled);
        assert!(transition.deck_changed);
        assert!(tracker.deck().is_full());
    }

    #[test]
    fn missed_events_persist_until_reset() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Ten, Suit::Clubs));

        tracker.mark_missed(3);
        tracker.apply(player(Rank::Four, Suit::Hearts));
        tracker.apply(event(PhaseSignal::RoundSettled(Settlement::MoneyTaken)));
        assert_eq!(tracker.missed_events(), 3);

        tracker.apply(ClassifiedEvent {
            signal: PhaseSignal::Irrelevant,
            reshuffled: true,
        });
        assert_eq!(tracker.missed_events(), 0);
    }

    #[test]
    fn irrelevant_signal_is_noop() {
        let mut tracker = PhaseTracker::default();
        tracker.apply(dealer(Rank::Ten, Suit::Clubs));

        let transition = tracker.apply(event(PhaseSignal::Irrelevant));

        assert_eq!(transition.phase, GamePhase::RoundStarted);
        assert!(!transition.deck_changed);
        assert_eq!(tracker.reference(), Some(Rank::Ten));
    }
}
