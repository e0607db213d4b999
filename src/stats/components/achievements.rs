use super::super::{saturating_ratio, LeaderboardEntry, PowerComponent};
use super::caps;

pub struct EventSuccessComponent;

impl PowerComponent for EventSuccessComponent {
    fn name(&self) -> &'static str {
        "event_success"
    }

    fn cap(&self) -> f64 {
        caps::EVENT_SUCCESS
    }

    fn score(&self, entry: &LeaderboardEntry) -> f64 {
        saturating_ratio(f64::from(entry.event_wins), 10.0) * 10.0
            + saturating_ratio(f64::from(entry.total_top8s), 8.0) * 6.0
            + saturating_ratio(f64::from(entry.events_played), 20.0) * 4.0
    }
}

pub struct StreakComponent;

impl PowerComponent for StreakComponent {
    fn name(&self) -> &'static str {
        "streak"
    }

    fn cap(&self) -> f64 {
        caps::STREAK
    }

    fn score(&self, entry: &LeaderboardEntry) -> f64 {
        saturating_ratio(f64::from(entry.longest_win_streak), 15.0) * 7.0
            + saturating_ratio(f64::from(entry.live_win_streak()), 10.0) * 3.0
    }
}

pub struct HeroMasteryComponent;

impl PowerComponent for HeroMasteryComponent {
    fn name(&self) -> &'static str {
        "hero_mastery"
    }

    fn cap(&self) -> f64 {
        caps::HERO_MASTERY
    }

    fn score(&self, entry: &LeaderboardEntry) -> f64 {
        saturating_ratio(f64::from(entry.unique_heroes), 8.0) * 5.0
            + saturating_ratio(f64::from(entry.top_hero_matches), 100.0) * 5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StreakType;

    #[test]
    fn event_terms_saturate_independently() {
        let entry = LeaderboardEntry {
            event_wins: 25,
            total_top8s: 4,
            events_played: 0,
            ..LeaderboardEntry::default()
        };
        assert!((EventSuccessComponent.score(&entry) - 13.0).abs() < 1e-9);
    }

    #[test]
    fn losing_streak_adds_nothing_live() {
        let mut entry = LeaderboardEntry {
            longest_win_streak: 15,
            current_streak_type: Some(StreakType::Loss),
            current_streak_count: 12,
            ..LeaderboardEntry::default()
        };
        assert!((StreakComponent.score(&entry) - 7.0).abs() < 1e-9);

        entry.current_streak_type = Some(StreakType::Win);
        assert!((StreakComponent.score(&entry) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn mastery_rewards_breadth_and_depth() {
        let entry = LeaderboardEntry {
            unique_heroes: 4,
            top_hero_matches: 100,
            ..LeaderboardEntry::default()
        };
        assert!((HeroMasteryComponent.score(&entry) - 7.5).abs() < 1e-9);
    }
}
