pub mod sinks;
pub mod snapshot;

pub use sinks::{JsonLinesSink, TracingSink};
pub use snapshot::{DeckSnapshot, SuitRemaining};

/// Receives every emitted deck snapshot for display.
///
/// Sinks only ever see snapshots, never the live deck, and report nothing
/// back to the tracker.
pub trait PresentationSink: Send + Sync {
    fn update(&self, snapshot: &DeckSnapshot);

    /// Get a human-readable name for this sink (for logging/debugging)
    fn sink_name(&self) -> &'static str;
}
