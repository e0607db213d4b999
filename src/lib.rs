// Library crate for the match-history stats engine
// This file exposes the public API for the binary and integration tests

pub mod config;
pub mod event;
pub mod featured;
pub mod h2h;
pub mod matches;
pub mod routes;
pub mod shared;
pub mod stats;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use event::{EventBus, H2HSyncSubscriber, MatchEvent, Subscription};
pub use featured::{rank_tiers, select_featured_profiles, FeaturedProfile, FeaturedReason, RankTier};
pub use h2h::{
    AccountResolver, H2HRecord, H2HRepository, H2HService, H2HSyncSummary, InMemoryAccountResolver,
    InMemoryH2HRepository,
};
pub use matches::{fingerprint, MatchRecord, MatchResult};
pub use routes::build_router;
pub use shared::{AppError, AppState};
pub use stats::{power_level, tier, LeaderboardEntry, PowerTier, StatsError};
