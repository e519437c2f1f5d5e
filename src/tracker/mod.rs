// Game phase tracking
//
// Turns raw game responses into phase signals and keeps the deck model in
// step with every card the responses reveal.

pub use errors::TrackerError;
pub use machine::{PhaseTracker, Transition};
pub use phase::GamePhase;
pub use signal::{ClassifiedEvent, HighLowPayload, Opening, PhaseSignal, Settlement, Status};

mod errors;
mod machine;
mod phase;
mod signal;
