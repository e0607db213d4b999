use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a player's live streak
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StreakType {
    Win,
    Loss,
    Draw,
}

/// Per-user rollup from the leaderboard snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub handle: Option<String>,
    pub total_matches: u32,
    pub total_byes: u32,
    /// Percentage in `[0, 100]`
    pub win_rate: f64,
    pub event_wins: u32,
    pub total_top8s: u32,
    pub events_played: u32,
    pub longest_win_streak: u32,
    pub current_streak_type: Option<StreakType>,
    pub current_streak_count: u32,
    pub unique_heroes: u32,
    /// Matches played on the most-played hero
    pub top_hero_matches: u32,
    pub rated_matches: u32,
    pub rated_win_rate: f64,
    pub earnings: f64,
    pub weekly_matches: u32,
    pub created_at: Option<DateTime<Utc>>,
    pub is_public: bool,
}

impl LeaderboardEntry {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            ..Self::default()
        }
    }

    /// Matches including byes; the sample size for win-rate confidence
    pub fn matches_with_byes(&self) -> u32 {
        self.total_matches.saturating_add(self.total_byes)
    }

    /// Length of the live win streak, zero while on a loss or draw streak
    pub fn live_win_streak(&self) -> u32 {
        match self.current_streak_type {
            Some(StreakType::Win) => self.current_streak_count,
            _ => 0,
        }
    }

    /// Trimmed handle, if the entry has a usable one
    pub fn display_handle(&self) -> Option<&str> {
        self.handle
            .as_deref()
            .map(str::trim)
            .filter(|h| !h.is_empty())
    }

    /// Whether the entry may be shown outside its owner's own views
    pub fn is_listable(&self) -> bool {
        self.is_public && self.display_handle().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_streak_ignores_losing_streaks() {
        let mut entry = LeaderboardEntry::new("u1");
        entry.current_streak_count = 4;

        entry.current_streak_type = Some(StreakType::Loss);
        assert_eq!(entry.live_win_streak(), 0);

        entry.current_streak_type = Some(StreakType::Win);
        assert_eq!(entry.live_win_streak(), 4);
    }

    #[test]
    fn listable_requires_public_and_handle() {
        let mut entry = LeaderboardEntry::new("u1");
        entry.is_public = true;
        assert!(!entry.is_listable());

        entry.handle = Some("   ".into());
        assert!(!entry.is_listable());

        entry.handle = Some("ash".into());
        assert!(entry.is_listable());

        entry.is_public = false;
        assert!(!entry.is_listable());
    }

    #[test]
    fn deserializes_partial_snapshot_rows() {
        let entry: LeaderboardEntry = serde_json::from_str(
            r#"{"userId":"u9","handle":"mira","totalMatches":42,"totalTop8s":3,"currentStreakType":"win","isPublic":true}"#,
        )
        .unwrap();

        assert_eq!(entry.total_matches, 42);
        assert_eq!(entry.total_top8s, 3);
        assert_eq!(entry.current_streak_type, Some(StreakType::Win));
        assert_eq!(entry.earnings, 0.0);
        assert!(entry.created_at.is_none());
    }
}
