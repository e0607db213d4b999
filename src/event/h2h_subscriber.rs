use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use super::{EventError, EventHandler, MatchEvent};
use crate::h2h::H2HService;
use crate::stats::StatsError;

/// Recomputes a user's head-to-head records after each import
pub struct H2HSyncSubscriber {
    h2h_service: Arc<H2HService>,
}

impl H2HSyncSubscriber {
    pub fn new(h2h_service: Arc<H2HService>) -> Self {
        Self { h2h_service }
    }
}

#[async_trait]
impl EventHandler for H2HSyncSubscriber {
    async fn handle(&self, event: &MatchEvent) -> Result<(), EventError> {
        match event {
            MatchEvent::MatchesImported { user_id, matches } => {
                let summary = self
                    .h2h_service
                    .compute_for_user(user_id, matches)
                    .await
                    .map_err(|err| match err {
                        StatsError::Validation(msg) => EventError::NonRetryable(msg),
                        other => EventError::Retryable(other.to_string()),
                    })?;

                debug!(user_id = %user_id, ?summary, "Import-triggered H2H sync finished");
                Ok(())
            }
        }
    }

    fn name(&self) -> &'static str {
        "H2HSyncSubscriber"
    }
}
