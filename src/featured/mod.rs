pub mod handlers;
pub mod pools;
pub mod ranks;
pub mod selection;

pub use pools::FeaturedReason;
pub use ranks::{rank_tier_for, rank_tiers, RankTier};
pub use selection::{
    select_featured_profiles, select_featured_profiles_with, FeaturedProfile, MAX_FEATURED,
};
