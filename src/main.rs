use highlow::{
    presentation::JsonLinesSink, EventBus, EventSubscription, GameEvent, HelperConfig,
    HighLowHelper,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize tracing; stdout is reserved for snapshots
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "highlow=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match HelperConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "Invalid configuration");
            std::process::exit(2);
        }
    };

    info!(
        endpoint = %config.endpoint,
        reset_policy = config.reset_policy.as_ref(),
        auto_choose = config.auto_choose,
        "Starting high-low deck tracker"
    );

    let event_bus = EventBus::new(config.channel_capacity);
    let sink = Arc::new(JsonLinesSink::new(std::io::stdout()));
    let helper = HighLowHelper::new(config, sink);
    let subscription = EventSubscription::new(helper, &event_bus).start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        match lines.next_line().await {
            Ok(Some(line)) if line.trim().is_empty() => continue,
            Ok(Some(line)) => match serde_json::from_str::<GameEvent>(&line) {
                Ok(event) => {
                    event_bus.publish(event);
                    // Let the subscription drain before the buffer can overflow
                    tokio::task::yield_now().await;
                }
                Err(err) => warn!(error = %err, "Skipping unparseable event line"),
            },
            Ok(None) => break,
            Err(err) => {
                error!(error = %err, "Failed to read stdin");
                break;
            }
        }
    }

    // Closing the bus lets the subscription finish what is buffered, then deactivate
    drop(event_bus);
    if let Err(err) = subscription.finished().await {
        error!(error = %err, "Subscription task failed");
    }
    info!("High-low deck tracker stopped");
}
