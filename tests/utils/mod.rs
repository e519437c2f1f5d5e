pub mod mocks;
pub mod payloads;
pub mod setup;

// Re-export main utilities for use by test files
#[allow(unused_imports)]
pub use mocks::RecordingSink;
#[allow(unused_imports)]
pub use payloads::{card, EventBuilder, ENDPOINT};
#[allow(unused_imports)]
pub use setup::{TestSetup, TestSetupBuilder};
