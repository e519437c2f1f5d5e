use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::actuation::choose;
use crate::config::HelperConfig;
use crate::event::{EventOutcome, FeatureHandler, GameEvent};
use crate::presentation::{DeckSnapshot, PresentationSink};
use crate::tracker::{HighLowPayload, PhaseTracker, TrackerError};

/// The high-low helper feature: tracks the undealt deck from observed game
/// responses and pushes a fresh snapshot to the sink after every change.
pub struct HighLowHelper {
    config: HelperConfig,
    tracker: PhaseTracker,
    sink: Arc<dyn PresentationSink>,
    rng: StdRng,
    active: bool,
}

impl HighLowHelper {
    pub fn new(config: HelperConfig, sink: Arc<dyn PresentationSink>) -> Self {
        Self {
            tracker: PhaseTracker::new(config.reset_policy),
            config,
            sink,
            rng: StdRng::from_os_rng(),
            active: false,
        }
    }

    /// Replaces the coin used to break ties when `auto_choose` is on
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn tracker(&self) -> &PhaseTracker {
        &self.tracker
    }

    fn process(&mut self, event: &GameEvent) -> Result<EventOutcome, TrackerError> {
        let classified = HighLowPayload::from_json(&event.payload)?.classify()?;
        let transition = self.tracker.apply(classified);

        if transition.deck_changed {
            self.emit();
        }

        Ok(if transition.resynced {
            EventOutcome::Resynced
        } else {
            EventOutcome::Applied(transition.phase)
        })
    }

    /// The single emission point
    fn emit(&mut self) {
        let choice = match self.tracker.recommendation() {
            Some(recommendation) if self.config.auto_choose => {
                Some(choose(&recommendation, &mut self.rng))
            }
            _ => None,
        };

        let snapshot = DeckSnapshot::capture(&self.tracker, choice);
        debug!(
            sink = self.sink.sink_name(),
            remaining = snapshot.total,
            "Emitting deck snapshot"
        );
        self.sink.update(&snapshot);
    }
}

impl FeatureHandler for HighLowHelper {
    fn on_activate(&mut self) {
        info!(endpoint = %self.config.endpoint, "Activating high-low helper");
        self.tracker.reset();
        self.active = true;
        self.emit();
    }

    fn on_event(&mut self, event: &GameEvent) -> EventOutcome {
        if !self.active || !event.is_for(&self.config.endpoint) {
            return EventOutcome::Ignored;
        }

        match self.process(event) {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(
                    error = %err,
                    endpoint = %event.endpoint,
                    phase = %self.tracker.phase(),
                    "Dropping game event"
                );
                EventOutcome::Dropped(err)
            }
        }
    }

    fn on_lagged(&mut self, missed: u64) {
        if !self.active {
            return;
        }

        self.tracker.mark_missed(missed);
        warn!(
            missed,
            total_missed = self.tracker.missed_events(),
            "Events lost - deck may be stale until the next reshuffle"
        );
        self.emit();
    }

    fn on_deactivate(&mut self) {
        info!("Deactivating high-low helper");
        self.active = false;
        self.tracker.clear_round();
    }

    fn handler_name(&self) -> &'static str {
        "HighLowHelper"
    }
}
