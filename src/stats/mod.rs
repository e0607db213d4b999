pub mod components;
pub mod handlers;
pub mod power_level;

mod errors;
pub mod models;

pub use errors::StatsError;
pub use models::*;
pub use power_level::{power_level, tier, ComponentScore, PowerLevelScorer, PowerTier};

/// Highest level the scorer hands out; 100 is never awarded.
pub const MAX_POWER_LEVEL: u8 = 99;

/// One weighted sub-score of the power level.
///
/// Implementations return a raw score; the scorer clips it into
/// `[0, cap]` before summing.
pub trait PowerComponent: Send + Sync {
    fn name(&self) -> &'static str;

    fn cap(&self) -> f64;

    fn score(&self, entry: &LeaderboardEntry) -> f64;
}

/// Fraction of `target` reached by `value`, saturating at 1.
pub(crate) fn saturating_ratio(value: f64, target: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 || target <= 0.0 {
        return 0.0;
    }
    (value / target).min(1.0)
}

/// `ln(value + 1) / ln(ceiling + 1)`, saturating at 1.
pub(crate) fn log_saturation(value: f64, ceiling: f64) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    ((value + 1.0).ln() / (ceiling + 1.0).ln()).min(1.0)
}
