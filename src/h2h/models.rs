use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matches::{MatchRecord, MatchResult};

/// Head-to-head record between two accounts.
///
/// `p1` sorts before `p2`, so each unordered pair has exactly one record,
/// stored under [`H2HRecord::key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct H2HRecord {
    pub p1: String,
    pub p2: String,
    pub p1_wins: u32,
    pub p2_wins: u32,
    pub draws: u32,
    pub total: u32,
    pub updated_at: DateTime<Utc>,
}

impl H2HRecord {
    /// Storage key for the unordered pair `{a, b}`
    pub fn key(a: &str, b: &str) -> String {
        if a <= b {
            format!("{a}_{b}")
        } else {
            format!("{b}_{a}")
        }
    }

    /// Builds the canonical record from `user_id`'s own tally against `opponent_id`
    pub fn from_perspective(
        user_id: &str,
        opponent_id: &str,
        tally: &Tally,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let (p1, p2, p1_wins, p2_wins) = if user_id <= opponent_id {
            (user_id, opponent_id, tally.wins, tally.losses)
        } else {
            (opponent_id, user_id, tally.losses, tally.wins)
        };

        Self {
            p1: p1.to_string(),
            p2: p2.to_string(),
            p1_wins,
            p2_wins,
            draws: tally.draws,
            total: tally.total(),
            updated_at,
        }
    }

    pub fn storage_key(&self) -> String {
        Self::key(&self.p1, &self.p2)
    }

    pub fn involves(&self, user_id: &str) -> bool {
        self.p1 == user_id || self.p2 == user_id
    }

    /// Wins credited to `user_id`, or `None` if they are not in this pair
    pub fn wins_for(&self, user_id: &str) -> Option<u32> {
        if self.p1 == user_id {
            Some(self.p1_wins)
        } else if self.p2 == user_id {
            Some(self.p2_wins)
        } else {
            None
        }
    }

    pub fn losses_for(&self, user_id: &str) -> Option<u32> {
        if self.p1 == user_id {
            Some(self.p2_wins)
        } else if self.p2 == user_id {
            Some(self.p1_wins)
        } else {
            None
        }
    }
}

/// Win/loss/draw counts from one player's point of view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
}

impl Tally {
    pub fn record(&mut self, result: MatchResult) {
        match result {
            MatchResult::Win => self.wins += 1,
            MatchResult::Loss => self.losses += 1,
            MatchResult::Draw => self.draws += 1,
        }
    }

    pub fn total(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

impl<'a> FromIterator<&'a MatchRecord> for Tally {
    fn from_iter<I: IntoIterator<Item = &'a MatchRecord>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for record in iter {
            tally.record(record.result);
        }
        tally
    }
}

/// What one aggregation run did
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct H2HSyncSummary {
    /// Distinct opponent identifiers in the match list
    pub opponents_seen: usize,
    /// Identifiers with no known account, including failed lookups
    pub unresolved: usize,
    /// Identifiers that resolved to the acting user
    pub self_pairs: usize,
    pub pairs_written: usize,
    /// Pairs left out because the batch cap was reached
    pub dropped_pairs: usize,
}
