use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::{Display, EnumIter};

use crate::stats::LeaderboardEntry;

/// Candidates kept from the top of each pool
pub const POOL_CUTOFF: usize = 3;

const HOT_STREAK_MIN: u32 = 3;
const WIN_RATE_KING_MIN_MATCHES: u32 = 100;
const RISING_STAR_MIN_MATCHES: u32 = 20;

/// Why a profile was featured; each reason is one candidate pool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
pub enum FeaturedReason {
    #[strum(to_string = "Weekly Grinder")]
    WeeklyGrinder,
    #[strum(to_string = "Hot Streak")]
    HotStreak,
    #[strum(to_string = "Win Rate King")]
    WinRateKing,
    #[strum(to_string = "Event Warrior")]
    EventWarrior,
    #[strum(to_string = "Most Active")]
    MostActive,
    #[strum(to_string = "Rising Star")]
    RisingStar,
}

impl FeaturedReason {
    pub fn qualifies(&self, entry: &LeaderboardEntry) -> bool {
        match self {
            FeaturedReason::WeeklyGrinder => entry.weekly_matches > 0,
            FeaturedReason::HotStreak => entry.live_win_streak() >= HOT_STREAK_MIN,
            FeaturedReason::WinRateKing => entry.total_matches >= WIN_RATE_KING_MIN_MATCHES,
            FeaturedReason::EventWarrior => entry.events_played > 0,
            FeaturedReason::MostActive => true,
            FeaturedReason::RisingStar => {
                entry.total_matches >= RISING_STAR_MIN_MATCHES && entry.created_at.is_some()
            }
        }
    }

    /// Orders entries best-first by the pool's defining metric
    pub fn compare(&self, a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
        match self {
            FeaturedReason::WeeklyGrinder => b.weekly_matches.cmp(&a.weekly_matches),
            FeaturedReason::HotStreak => b.live_win_streak().cmp(&a.live_win_streak()),
            FeaturedReason::WinRateKing => b.win_rate.total_cmp(&a.win_rate),
            FeaturedReason::EventWarrior => b.events_played.cmp(&a.events_played),
            FeaturedReason::MostActive => b.total_matches.cmp(&a.total_matches),
            FeaturedReason::RisingStar => b.created_at.cmp(&a.created_at),
        }
    }

    pub fn format_stat(&self, entry: &LeaderboardEntry) -> String {
        match self {
            FeaturedReason::WeeklyGrinder => format!("{} matches this week", entry.weekly_matches),
            FeaturedReason::HotStreak => format!("{} win streak", entry.live_win_streak()),
            FeaturedReason::WinRateKing => format!("{:.1}% win rate", entry.win_rate),
            FeaturedReason::EventWarrior => format!("{} events played", entry.events_played),
            FeaturedReason::MostActive => format!("{} matches played", entry.total_matches),
            FeaturedReason::RisingStar => {
                format!("{} matches since joining", entry.total_matches)
            }
        }
    }

    /// Top of this pool among `entries`, at most [`POOL_CUTOFF`] long
    pub fn candidates<'a>(&self, entries: &[&'a LeaderboardEntry]) -> Vec<&'a LeaderboardEntry> {
        let mut pool: Vec<&LeaderboardEntry> = entries
            .iter()
            .copied()
            .filter(|entry| self.qualifies(entry))
            .collect();
        pool.sort_by(|a, b| self.compare(a, b).then_with(|| a.user_id.cmp(&b.user_id)));
        pool.truncate(POOL_CUTOFF);
        pool
    }
}
