use tokio::sync::{broadcast, oneshot};
use tokio::task::{JoinError, JoinHandle};
use tracing::{debug, info, warn};

use super::{bus::EventBus, events::GameEvent, handler::FeatureHandler};

/// Feeds events from the bus to a feature handler, one at a time
pub struct EventSubscription<H: FeatureHandler> {
    handler: H,
    receiver: broadcast::Receiver<GameEvent>,
}

impl<H: FeatureHandler> EventSubscription<H> {
    /// Subscribes immediately, so events published before `start` are kept
    pub fn new(handler: H, event_bus: &EventBus) -> Self {
        Self {
            handler,
            receiver: event_bus.subscribe(),
        }
    }

    /// Start the subscription - activates the handler and spawns a background
    /// task routing events to it until stopped or the bus closes
    pub fn start(self) -> SubscriptionHandle<H> {
        let Self {
            mut handler,
            mut receiver,
        } = self;
        let (shutdown, mut stop) = oneshot::channel::<()>();
        let handler_name = handler.handler_name();

        info!(handler = handler_name, "Starting event subscription");

        let task = tokio::spawn(async move {
            handler.on_activate();

            loop {
                tokio::select! {
                    biased;
                    _ = &mut stop => break,
                    received = receiver.recv() => match received {
                        Ok(event) => {
                            let outcome = handler.on_event(&event);
                            debug!(
                                handler = handler_name,
                                endpoint = %event.endpoint,
                                outcome = ?outcome,
                                "Handled game event"
                            );
                        }
                        Err(broadcast::error::RecvError::Lagged(missed)) => {
                            warn!(
                                handler = handler_name,
                                missed,
                                "Subscriber lagged - events were lost"
                            );
                            handler.on_lagged(missed);
                        }
                        Err(broadcast::error::RecvError::Closed) => {
                            warn!(
                                handler = handler_name,
                                "Event subscription ended - no more events"
                            );
                            break;
                        }
                    },
                }
            }

            handler.on_deactivate();
            info!(handler = handler_name, "Event subscription stopped");
            handler
        });

        SubscriptionHandle { shutdown, task }
    }
}

/// Handle to a running subscription
pub struct SubscriptionHandle<H> {
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<H>,
}

impl<H> SubscriptionHandle<H> {
    /// Deactivates the handler and hands it back. Events still buffered in the
    /// channel are discarded.
    pub async fn stop(self) -> Result<H, JoinError> {
        // The task may already have ended because the bus closed
        let _ = self.shutdown.send(());
        self.task.await
    }

    /// Waits for the subscription to end on its own, i.e. for the bus to close
    pub async fn finished(self) -> Result<H, JoinError> {
        let Self { shutdown, task } = self;
        let handler = task.await;
        drop(shutdown);
        handler
    }
}
