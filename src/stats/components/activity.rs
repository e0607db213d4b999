use super::super::{log_saturation, LeaderboardEntry, PowerComponent};
use super::caps;

/// Match count where volume saturates
const VOLUME_CEILING: f64 = 500.0;
/// Earnings where the earnings term saturates
const EARNINGS_CEILING: f64 = 10_000.0;

pub struct VolumeComponent;

impl PowerComponent for VolumeComponent {
    fn name(&self) -> &'static str {
        "volume"
    }

    fn cap(&self) -> f64 {
        caps::VOLUME
    }

    fn score(&self, entry: &LeaderboardEntry) -> f64 {
        log_saturation(f64::from(entry.matches_with_byes()), VOLUME_CEILING) * caps::VOLUME
    }
}

pub struct EarningsComponent;

impl PowerComponent for EarningsComponent {
    fn name(&self) -> &'static str {
        "earnings"
    }

    fn cap(&self) -> f64 {
        caps::EARNINGS
    }

    fn score(&self, entry: &LeaderboardEntry) -> f64 {
        log_saturation(entry.earnings, EARNINGS_CEILING) * caps::EARNINGS
    }
}
