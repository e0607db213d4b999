use matchstats::{LeaderboardEntry, MatchRecord, MatchResult};

// ============================================================================
// Match lists
// ============================================================================

/// Builds one user's match list against a set of opponents
pub struct MatchListBuilder {
    matches: Vec<MatchRecord>,
    day: u32,
}

#[allow(dead_code)]
impl MatchListBuilder {
    pub fn new() -> Self {
        Self {
            matches: Vec::new(),
            day: 0,
        }
    }

    fn next_date(&mut self) -> String {
        let date = format!("2024-01-{:02}", self.day % 28 + 1);
        self.day += 1;
        date
    }

    pub fn result(mut self, opponent_gem: &str, result: MatchResult, times: usize) -> Self {
        for _ in 0..times {
            let date = self.next_date();
            self.matches.push(
                MatchRecord::new(date, "Dori", "Kano", result)
                    .with_opponent(opponent_gem)
                    .with_notes("Armory | Round 1"),
            );
        }
        self
    }

    pub fn wins(self, opponent_gem: &str, times: usize) -> Self {
        self.result(opponent_gem, MatchResult::Win, times)
    }

    pub fn losses(self, opponent_gem: &str, times: usize) -> Self {
        self.result(opponent_gem, MatchResult::Loss, times)
    }

    pub fn draws(self, opponent_gem: &str, times: usize) -> Self {
        self.result(opponent_gem, MatchResult::Draw, times)
    }

    /// A match against an opponent with no registered identifier
    pub fn unlinked(mut self, result: MatchResult) -> Self {
        let date = self.next_date();
        self.matches
            .push(MatchRecord::new(date, "Dori", "Kano", result));
        self
    }

    pub fn build(self) -> Vec<MatchRecord> {
        self.matches
    }
}

/// The opponent's copy of a match list: same games, heroes and results flipped
#[allow(dead_code)]
pub fn mirror(matches: &[MatchRecord], my_gem: &str) -> Vec<MatchRecord> {
    matches
        .iter()
        .map(|record| {
            let flipped = match record.result {
                MatchResult::Win => MatchResult::Loss,
                MatchResult::Loss => MatchResult::Win,
                MatchResult::Draw => MatchResult::Draw,
            };
            let mut mirrored = MatchRecord::new(
                record.date.clone(),
                record.opponent_hero.clone(),
                record.hero_played.clone(),
                flipped,
            )
            .with_opponent(my_gem);
            mirrored.notes = record.notes.clone();
            mirrored
        })
        .collect()
}

// ============================================================================
// Leaderboard entries
// ============================================================================

pub struct EntryBuilder {
    entry: LeaderboardEntry,
}

#[allow(dead_code)]
impl EntryBuilder {
    pub fn public(user_id: &str) -> Self {
        let mut entry = LeaderboardEntry::new(user_id);
        entry.handle = Some(format!("{user_id}-handle"));
        entry.is_public = true;
        Self { entry }
    }

    pub fn private(user_id: &str) -> Self {
        let mut builder = Self::public(user_id);
        builder.entry.is_public = false;
        builder
    }

    pub fn without_handle(mut self) -> Self {
        self.entry.handle = None;
        self
    }

    pub fn matches(mut self, total: u32, win_rate: f64) -> Self {
        self.entry.total_matches = total;
        self.entry.win_rate = win_rate;
        self
    }

    pub fn weekly(mut self, weekly: u32) -> Self {
        self.entry.weekly_matches = weekly;
        self
    }

    pub fn events(mut self, played: u32, wins: u32, top8s: u32) -> Self {
        self.entry.events_played = played;
        self.entry.event_wins = wins;
        self.entry.total_top8s = top8s;
        self
    }

    pub fn build(self) -> LeaderboardEntry {
        self.entry
    }
}
