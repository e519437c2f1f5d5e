// Event-driven plumbing
//
// Observed game responses arrive on the bus and are fed, one at a time and
// in arrival order, to the feature subscribed to them.

// Public API - what other modules can use
pub use bus::EventBus;
pub use events::GameEvent;
pub use handler::{EventOutcome, FeatureHandler};
pub use subscription::{EventSubscription, SubscriptionHandle};

// Internal modules
mod bus;
mod events;
mod handler;
mod subscription;
