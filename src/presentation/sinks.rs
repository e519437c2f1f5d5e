use std::io::Write;
use std::sync::Mutex;
use tracing::{error, info};

use super::{DeckSnapshot, PresentationSink};

/// Logs the snapshot header and remaining total
pub struct TracingSink;

impl PresentationSink for TracingSink {
    fn update(&self, snapshot: &DeckSnapshot) {
        info!(
            phase = %snapshot.phase,
            remaining = snapshot.total,
            choice = ?snapshot.choice,
            missed_events = snapshot.missed_events,
            "{}",
            snapshot.header()
        );
    }

    fn sink_name(&self) -> &'static str {
        "TracingSink"
    }
}

/// Writes each snapshot as one line of JSON
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write_snapshot(&self, snapshot: &DeckSnapshot) -> std::io::Result<()> {
        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        serde_json::to_writer(&mut *writer, snapshot)?;
        writeln!(writer)?;
        writer.flush()
    }
}

impl<W: Write + Send> PresentationSink for JsonLinesSink<W> {
    fn update(&self, snapshot: &DeckSnapshot) {
        if let Err(err) = self.write_snapshot(snapshot) {
            error!(error = %err, "Failed to write deck snapshot");
        }
    }

    fn sink_name(&self) -> &'static str {
        "JsonLinesSink"
    }
}
