use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use serde::Serialize;
use std::collections::HashSet;
use strum::IntoEnumIterator;

use super::FeaturedReason;
use crate::stats::LeaderboardEntry;

pub const MAX_FEATURED: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeaturedProfile {
    pub entry: LeaderboardEntry,
    pub reason: FeaturedReason,
    pub stat: String,
}

/// Picks up to [`MAX_FEATURED`] distinct public profiles, one per pool, with
/// pools visited in random order. Results vary between calls.
pub fn select_featured_profiles(entries: &[LeaderboardEntry]) -> Vec<FeaturedProfile> {
    select_featured_profiles_with(entries, &mut rand::rng())
}

pub fn select_featured_profiles_with<R: Rng + ?Sized>(
    entries: &[LeaderboardEntry],
    rng: &mut R,
) -> Vec<FeaturedProfile> {
    let listable: Vec<&LeaderboardEntry> = entries.iter().filter(|e| e.is_listable()).collect();

    let mut reasons: Vec<FeaturedReason> = FeaturedReason::iter().collect();
    reasons.shuffle(rng);

    let mut featured = Vec::with_capacity(MAX_FEATURED);
    let mut taken: HashSet<&str> = HashSet::new();

    for reason in reasons {
        if featured.len() >= MAX_FEATURED {
            break;
        }

        let remaining: Vec<&LeaderboardEntry> = reason
            .candidates(&listable)
            .into_iter()
            .filter(|entry| !taken.contains(entry.user_id.as_str()))
            .collect();

        if let Some(&entry) = remaining.choose(rng) {
            taken.insert(entry.user_id.as_str());
            featured.push(FeaturedProfile {
                entry: entry.clone(),
                reason,
                stat: reason.format_stat(entry),
            });
        }
    }

    featured
}
