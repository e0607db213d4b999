mod achievements;
mod activity;
mod performance;

pub use achievements::{EventSuccessComponent, HeroMasteryComponent, StreakComponent};
pub use activity::{EarningsComponent, VolumeComponent};
pub use performance::{RatedPerformanceComponent, WinRateComponent};

/// Caps of the built-in components. They sum to 100; the scorer clips the
/// total to [`crate::stats::MAX_POWER_LEVEL`].
pub mod caps {
    pub const WIN_RATE: f64 = 30.0;
    pub const VOLUME: f64 = 15.0;
    pub const EVENT_SUCCESS: f64 = 20.0;
    pub const STREAK: f64 = 10.0;
    pub const HERO_MASTERY: f64 = 10.0;
    pub const RATED: f64 = 10.0;
    pub const EARNINGS: f64 = 5.0;
}
