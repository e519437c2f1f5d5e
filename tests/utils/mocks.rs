use std::sync::{Arc, Mutex};

use highlow::{DeckSnapshot, PresentationSink};

// ============================================================================
// Mock Infrastructure
// ============================================================================

#[derive(Clone, Default)]
pub struct RecordingSink {
    snapshots: Arc<Mutex<Vec<DeckSnapshot>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<DeckSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }

    pub fn count(&self) -> usize {
        self.snapshots.lock().unwrap().len()
    }

    pub fn last(&self) -> Option<DeckSnapshot> {
        self.snapshots.lock().unwrap().last().cloned()
    }
}

impl PresentationSink for RecordingSink {
    fn update(&self, snapshot: &DeckSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot.clone());
    }

    fn sink_name(&self) -> &'static str {
        "RecordingSink"
    }
}
