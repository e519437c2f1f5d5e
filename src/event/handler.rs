use super::events::GameEvent;
use crate::tracker::{GamePhase, TrackerError};

/// What a handler did with one event
#[derive(Debug)]
pub enum EventOutcome {
    /// Not for this handler, or the handler is inactive
    Ignored,
    /// Classified and applied; carries the resulting phase
    Applied(GamePhase),
    /// The deck had drifted from the observed cards and was reset
    Resynced,
    /// The event could not be decoded and was dropped without effect
    Dropped(TrackerError),
}

/// Trait for features driven by the event stream
///
/// The subscription calls these hooks one at a time, in event arrival order.
/// Handlers never fail outward: whatever goes wrong with an event is
/// reported through its [`EventOutcome`].
pub trait FeatureHandler: Send + 'static {
    /// Called before the first event; must not trust state from a previous activation
    fn on_activate(&mut self);

    fn on_event(&mut self, event: &GameEvent) -> EventOutcome;

    /// Called when the subscription fell behind and `missed` events were lost
    fn on_lagged(&mut self, _missed: u64) {}

    /// Called after the last event; no state may change afterwards
    fn on_deactivate(&mut self);

    /// Get a human-readable name for this handler (for logging/debugging)
    fn handler_name(&self) -> &'static str;
}
