use super::super::{saturating_ratio, LeaderboardEntry, PowerComponent};
use super::caps;

/// Matches (byes included) needed before win rate counts at full weight
const WIN_RATE_CONFIDENCE_MATCHES: f64 = 20.0;
/// Rated matches needed before rated win rate counts at all
const MIN_RATED_MATCHES: u32 = 5;

pub struct WinRateComponent;

impl PowerComponent for WinRateComponent {
    fn name(&self) -> &'static str {
        "win_rate"
    }

    fn cap(&self) -> f64 {
        caps::WIN_RATE
    }

    fn score(&self, entry: &LeaderboardEntry) -> f64 {
        let confidence = saturating_ratio(
            f64::from(entry.matches_with_byes()),
            WIN_RATE_CONFIDENCE_MATCHES,
        );
        saturating_ratio(entry.win_rate, 100.0) * caps::WIN_RATE * confidence
    }
}

pub struct RatedPerformanceComponent;

impl PowerComponent for RatedPerformanceComponent {
    fn name(&self) -> &'static str {
        "rated"
    }

    fn cap(&self) -> f64 {
        caps::RATED
    }

    fn score(&self, entry: &LeaderboardEntry) -> f64 {
        if entry.rated_matches < MIN_RATED_MATCHES {
            return 0.0;
        }
        saturating_ratio(entry.rated_win_rate, 100.0) * caps::RATED
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(total_matches: u32, total_byes: u32, win_rate: f64) -> LeaderboardEntry {
        LeaderboardEntry {
            total_matches,
            total_byes,
            win_rate,
            ..LeaderboardEntry::default()
        }
    }

    #[test]
    fn full_weight_at_twenty_matches() {
        let score = WinRateComponent.score(&entry(20, 0, 50.0));
        assert!((score - 15.0).abs() < 1e-9);
    }

    #[test]
    fn small_samples_are_scaled_down() {
        let score = WinRateComponent.score(&entry(5, 0, 100.0));
        assert!((score - 7.5).abs() < 1e-9);
    }

    #[test]
    fn byes_count_toward_confidence() {
        let with_byes = WinRateComponent.score(&entry(10, 10, 60.0));
        let without = WinRateComponent.score(&entry(20, 0, 60.0));
        assert!((with_byes - without).abs() < 1e-9);
    }

    #[test]
    fn rated_needs_five_matches() {
        let mut e = LeaderboardEntry {
            rated_matches: 4,
            rated_win_rate: 90.0,
            ..LeaderboardEntry::default()
        };
        assert_eq!(RatedPerformanceComponent.score(&e), 0.0);

        e.rated_matches = 5;
        assert!((RatedPerformanceComponent.score(&e) - 9.0).abs() < 1e-9);
    }
}
