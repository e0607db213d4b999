use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use super::{bus::EventBus, handler::EventHandler};

/// Routes every event on the bus to one handler on a background task
pub struct Subscription {
    handler: Arc<dyn EventHandler>,
    event_bus: EventBus,
}

impl Subscription {
    pub fn new(handler: Arc<dyn EventHandler>, event_bus: EventBus) -> Self {
        Self { handler, event_bus }
    }

    /// Subscribes immediately, then spawns the routing task
    pub fn start(self) -> JoinHandle<()> {
        let handler_name = self.handler.name();
        let mut receiver = self.event_bus.subscribe();

        info!(handler = handler_name, "Starting event subscription");

        tokio::spawn(async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => {
                        if let Err(e) = self.handler.handle(&event).await {
                            error!(
                                handler = handler_name,
                                user_id = %event.user_id(),
                                retryable = e.is_retryable(),
                                error = %e,
                                "Event handler failed"
                            );
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(handler = handler_name, skipped, "Subscription lagged, events dropped");
                    }
                    Err(RecvError::Closed) => break,
                }
            }

            warn!(handler = handler_name, "Event subscription ended - no more events");
        })
    }
}
