use serde::{Deserialize, Serialize};
use std::sync::Arc;
use strum_macros::{Display, EnumIter};

use super::{
    components::{
        EarningsComponent, EventSuccessComponent, HeroMasteryComponent, RatedPerformanceComponent,
        StreakComponent, VolumeComponent, WinRateComponent,
    },
    LeaderboardEntry, PowerComponent, MAX_POWER_LEVEL,
};

/// Named bracket for a power level, lowest first
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum PowerTier {
    Bronze,
    Silver,
    Gold,
    Diamond,
    Grandmaster,
}

impl PowerTier {
    /// Lowest level that falls into this tier
    pub fn threshold(&self) -> u8 {
        match self {
            PowerTier::Bronze => 0,
            PowerTier::Silver => 35,
            PowerTier::Gold => 50,
            PowerTier::Diamond => 65,
            PowerTier::Grandmaster => 80,
        }
    }
}

pub fn tier(level: u8) -> PowerTier {
    match level {
        80.. => PowerTier::Grandmaster,
        65.. => PowerTier::Diamond,
        50.. => PowerTier::Gold,
        35.. => PowerTier::Silver,
        _ => PowerTier::Bronze,
    }
}

/// Power level of an entry using the built-in components
pub fn power_level(entry: &LeaderboardEntry) -> u8 {
    PowerLevelScorer::default().level(entry)
}

/// A component's contribution after clipping
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComponentScore {
    pub name: &'static str,
    pub cap: f64,
    pub score: f64,
}

/// Additive composite over independently capped components
pub struct PowerLevelScorer {
    components: Vec<Arc<dyn PowerComponent>>,
}

impl Default for PowerLevelScorer {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl PowerLevelScorer {
    pub fn builder() -> PowerLevelScorerBuilder {
        PowerLevelScorerBuilder::new()
    }

    pub fn level(&self, entry: &LeaderboardEntry) -> u8 {
        let total: f64 = self.breakdown(entry).iter().map(|c| c.score).sum();
        total.round().clamp(0.0, f64::from(MAX_POWER_LEVEL)) as u8
    }

    pub fn tier(&self, entry: &LeaderboardEntry) -> PowerTier {
        tier(self.level(entry))
    }

    pub fn breakdown(&self, entry: &LeaderboardEntry) -> Vec<ComponentScore> {
        self.components
            .iter()
            .map(|component| {
                let cap = component.cap();
                let raw = component.score(entry);
                let score = if raw.is_finite() { raw.clamp(0.0, cap) } else { 0.0 };
                ComponentScore {
                    name: component.name(),
                    cap,
                    score,
                }
            })
            .collect()
    }
}

pub struct PowerLevelScorerBuilder {
    components: Vec<Arc<dyn PowerComponent>>,
}

impl PowerLevelScorerBuilder {
    fn new() -> Self {
        Self {
            components: vec![
                Arc::new(WinRateComponent),
                Arc::new(VolumeComponent),
                Arc::new(EventSuccessComponent),
                Arc::new(StreakComponent),
                Arc::new(HeroMasteryComponent),
                Arc::new(RatedPerformanceComponent),
                Arc::new(EarningsComponent),
            ],
        }
    }

    /// Starts from no components at all
    pub fn empty() -> Self {
        Self {
            components: Vec::new(),
        }
    }

    pub fn with_component(mut self, component: Arc<dyn PowerComponent>) -> Self {
        self.components.push(component);
        self
    }

    pub fn build(self) -> PowerLevelScorer {
        PowerLevelScorer {
            components: self.components,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::StreakType;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    fn decorated_entry() -> LeaderboardEntry {
        LeaderboardEntry {
            user_id: "veteran".into(),
            total_matches: 100,
            total_byes: 0,
            win_rate: 75.0,
            event_wins: 10,
            total_top8s: 8,
            events_played: 20,
            longest_win_streak: 15,
            current_streak_type: Some(StreakType::Win),
            current_streak_count: 10,
            unique_heroes: 8,
            top_hero_matches: 100,
            rated_matches: 10,
            rated_win_rate: 80.0,
            earnings: 10_000.0,
            ..LeaderboardEntry::default()
        }
    }

    fn maxed_entry() -> LeaderboardEntry {
        LeaderboardEntry {
            total_matches: 500,
            win_rate: 100.0,
            rated_win_rate: 100.0,
            ..decorated_entry()
        }
    }

    struct Overflowing;

    impl PowerComponent for Overflowing {
        fn name(&self) -> &'static str {
            "overflowing"
        }

        fn cap(&self) -> f64 {
            5.0
        }

        fn score(&self, _entry: &LeaderboardEntry) -> f64 {
            1_000.0
        }
    }

    #[test]
    fn empty_entry_scores_zero() {
        let entry = LeaderboardEntry::default();
        assert_eq!(power_level(&entry), 0);
        assert_eq!(tier(power_level(&entry)), PowerTier::Bronze);
    }

    #[test]
    fn decorated_veteran_is_grandmaster() {
        // 22.5 + 11.14 + 20 + 10 + 10 + 8 + 5
        let entry = decorated_entry();
        assert_eq!(power_level(&entry), 87);
        assert_eq!(tier(power_level(&entry)), PowerTier::Grandmaster);
    }

    #[test]
    fn maximum_is_ninety_nine() {
        let scorer = PowerLevelScorer::default();
        let total_caps: f64 = scorer
            .breakdown(&maxed_entry())
            .iter()
            .map(|c| c.cap)
            .sum();

        assert_eq!(total_caps, 100.0);
        assert_eq!(scorer.level(&maxed_entry()), MAX_POWER_LEVEL);
    }

    #[test]
    fn breakdown_never_exceeds_caps() {
        let scorer = PowerLevelScorer::builder()
            .with_component(Arc::new(Overflowing))
            .build();

        let breakdown = scorer.breakdown(&maxed_entry());
        assert!(breakdown.iter().all(|c| c.score <= c.cap && c.score >= 0.0));
        assert_eq!(scorer.level(&maxed_entry()), MAX_POWER_LEVEL);
    }

    #[test]
    fn custom_scorer_uses_only_its_components() {
        let scorer = PowerLevelScorerBuilder::empty()
            .with_component(Arc::new(Overflowing))
            .build();
        assert_eq!(scorer.level(&LeaderboardEntry::default()), 5);
    }

    #[test]
    fn nonsense_inputs_stay_in_bounds() {
        let entry = LeaderboardEntry {
            total_matches: u32::MAX,
            total_byes: u32::MAX,
            win_rate: f64::NAN,
            rated_matches: 50,
            rated_win_rate: f64::INFINITY,
            earnings: -1.0,
            ..LeaderboardEntry::default()
        };
        assert!(power_level(&entry) <= MAX_POWER_LEVEL);
    }

    #[test]
    fn win_rate_is_monotonic() {
        let mut previous = 0;
        for win_rate in 0..=100 {
            let entry = LeaderboardEntry {
                win_rate: f64::from(win_rate),
                ..decorated_entry()
            };
            let level = power_level(&entry);
            assert!(level >= previous, "level dropped at win rate {win_rate}");
            previous = level;
        }
    }

    #[test]
    fn scoring_is_stable() {
        let entry = decorated_entry();
        assert_eq!(power_level(&entry), power_level(&entry.clone()));
    }

    #[rstest]
    #[case(0, PowerTier::Bronze)]
    #[case(34, PowerTier::Bronze)]
    #[case(35, PowerTier::Silver)]
    #[case(49, PowerTier::Silver)]
    #[case(50, PowerTier::Gold)]
    #[case(64, PowerTier::Gold)]
    #[case(65, PowerTier::Diamond)]
    #[case(79, PowerTier::Diamond)]
    #[case(80, PowerTier::Grandmaster)]
    #[case(99, PowerTier::Grandmaster)]
    fn tier_thresholds(#[case] level: u8, #[case] expected: PowerTier) {
        assert_eq!(tier(level), expected);
        assert!(level >= expected.threshold());
    }

    #[test]
    fn tiers_ascend_with_thresholds() {
        let thresholds: Vec<u8> = PowerTier::iter().map(|t| t.threshold()).collect();
        assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
        for t in PowerTier::iter() {
            assert_eq!(tier(t.threshold()), t);
        }
    }

    #[test]
    fn tier_names_render() {
        assert_eq!(tier(80).to_string(), "Grandmaster");
        assert_ne!(tier(79).to_string(), "Grandmaster");
    }
}
