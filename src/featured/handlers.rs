use axum::Json;
use std::collections::HashMap;
use tracing::{info, instrument};

use super::{rank_tiers, select_featured_profiles, FeaturedProfile, RankTier};
use crate::stats::LeaderboardEntry;

/// POST /leaderboard/featured
///
/// Body is the full leaderboard snapshot; the selection changes per call.
#[instrument(name = "featured_profiles", skip(entries), fields(entry_count = entries.len()))]
pub async fn featured_profiles(
    Json(entries): Json<Vec<LeaderboardEntry>>,
) -> Json<Vec<FeaturedProfile>> {
    let featured = select_featured_profiles(&entries);
    info!(featured = featured.len(), "Featured profiles selected");
    Json(featured)
}

/// POST /leaderboard/rank-tiers
#[instrument(name = "rank_tiers", skip(entries), fields(entry_count = entries.len()))]
pub async fn leaderboard_rank_tiers(
    Json(entries): Json<Vec<LeaderboardEntry>>,
) -> Json<HashMap<String, RankTier>> {
    Json(rank_tiers(&entries))
}
