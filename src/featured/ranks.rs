use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum_macros::Display;

use crate::stats::{LeaderboardEntry, PowerLevelScorer};

/// Leaderboard placement badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum RankTier {
    #[strum(to_string = "Champion")]
    Champion,
    #[strum(to_string = "Podium")]
    Podium,
    #[strum(to_string = "Top 10")]
    TopTen,
    #[strum(to_string = "Top 25")]
    TopTwentyFive,
}

/// Badge for a 1-based leaderboard position
pub fn rank_tier_for(rank: usize) -> Option<RankTier> {
    match rank {
        1 => Some(RankTier::Champion),
        2..=3 => Some(RankTier::Podium),
        4..=10 => Some(RankTier::TopTen),
        11..=25 => Some(RankTier::TopTwentyFive),
        _ => None,
    }
}

/// Badges for every ranked public entry, keyed by user id.
///
/// Entries are ranked by power level, then total matches, then user id.
/// Unranked entries are absent from the map.
pub fn rank_tiers(entries: &[LeaderboardEntry]) -> HashMap<String, RankTier> {
    let scorer = PowerLevelScorer::default();
    let mut ranked: Vec<(u8, &LeaderboardEntry)> = entries
        .iter()
        .filter(|entry| entry.is_listable())
        .map(|entry| (scorer.level(entry), entry))
        .collect();

    ranked.sort_by(|(level_a, a), (level_b, b)| {
        level_b
            .cmp(level_a)
            .then_with(|| b.total_matches.cmp(&a.total_matches))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });

    let mut tiers = HashMap::new();
    for (index, (_, entry)) in ranked.iter().enumerate() {
        let Some(tier) = rank_tier_for(index + 1) else {
            break;
        };
        tiers.entry(entry.user_id.clone()).or_insert(tier);
    }
    tiers
}
