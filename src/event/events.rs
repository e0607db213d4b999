use serde::{Deserialize, Serialize};

use crate::matches::MatchRecord;

/// Facts about match data that other components react to
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A user finished importing or syncing; `matches` is their full list
    MatchesImported {
        user_id: String,
        matches: Vec<MatchRecord>,
    },
}

impl MatchEvent {
    pub fn user_id(&self) -> &str {
        match self {
            MatchEvent::MatchesImported { user_id, .. } => user_id,
        }
    }
}
