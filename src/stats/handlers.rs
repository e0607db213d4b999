use axum::Json;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{tier, ComponentScore, LeaderboardEntry, PowerLevelScorer, PowerTier};

#[derive(Debug, Serialize)]
pub struct PowerLevelResponse {
    pub level: u8,
    pub tier: PowerTier,
    pub breakdown: Vec<ComponentScore>,
}

/// POST /power-level
#[instrument(name = "power_level", skip(entry), fields(user_id = %entry.user_id))]
pub async fn power_level(Json(entry): Json<LeaderboardEntry>) -> Json<PowerLevelResponse> {
    let scorer = PowerLevelScorer::default();
    let level = scorer.level(&entry);
    let response = PowerLevelResponse {
        level,
        tier: tier(level),
        breakdown: scorer.breakdown(&entry),
    };

    debug!(level, tier = %response.tier, "Scored leaderboard entry");
    Json(response)
}
