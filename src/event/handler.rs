use async_trait::async_trait;
use thiserror::Error;

use super::events::MatchEvent;

/// Errors that can occur when handling events
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Retryable error: {0}")]
    Retryable(String),

    #[error("Non-retryable error: {0}")]
    NonRetryable(String),
}

impl EventError {
    /// Whether a later trigger may succeed where this one failed
    pub fn is_retryable(&self) -> bool {
        matches!(self, EventError::Retryable(_))
    }
}

/// Reacts to match events.
///
/// Handlers should be idempotent: handling the same event twice must leave
/// the same state behind.
#[async_trait]
pub trait EventHandler: Send + Sync {
    async fn handle(&self, event: &MatchEvent) -> Result<(), EventError>;

    /// Name used in logs
    fn name(&self) -> &'static str;
}
