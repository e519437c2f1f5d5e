// Library crate for the high-low deck tracker
// This file exposes the public API for integration tests and the binary

pub mod actuation;
pub mod advisor;
pub mod cards;
pub mod config;
pub mod deck;
pub mod event;
pub mod helper;
pub mod presentation;
pub mod tracker;

// Re-export commonly used types for easier access in tests
pub use advisor::{recommend, Confidence, Recommendation, Verdict};
pub use cards::{Card, CardDescriptor, CardError, Rank, Suit};
pub use config::{HelperConfig, ResetPolicy};
pub use deck::{Deck, DeckError};
pub use event::{EventBus, EventOutcome, EventSubscription, FeatureHandler, GameEvent};
pub use helper::HighLowHelper;
pub use presentation::{DeckSnapshot, PresentationSink};
pub use tracker::{GamePhase, PhaseTracker, TrackerError};
