//! Participant-independent match identity.
//!
//! Both players of a physical match import their own copy of it, with the
//! hero fields swapped. The fingerprint orders the heroes before hashing so
//! either copy yields the same 16 hex character identifier.

use super::models::MatchRecord;

const FINGERPRINT_VERSION: &str = "v1";
const SEPARATOR: &str = "|";
const UNKNOWN_HERO: &str = "unknown";

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;
const SECONDARY_SEED: u32 = 0x9747_b28c;
const SECONDARY_PRIME: u32 = 0x5bd1_e995;

/// Deterministic identity of a match, the same for both participants
pub fn fingerprint(record: &MatchRecord) -> String {
    let canonical = canonical_form(record);
    format!(
        "{:08x}{:08x}",
        rolling_hash(&canonical, FNV_OFFSET_BASIS, FNV_PRIME),
        rolling_hash(&canonical, SECONDARY_SEED, SECONDARY_PRIME)
    )
}

fn canonical_form(record: &MatchRecord) -> String {
    let mut heroes = [
        normalize_hero(&record.hero_played),
        normalize_hero(&record.opponent_hero),
    ];
    // UTF-16 code unit order, as browser clients sort
    heroes.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));

    let event = record.event_details();

    [
        FINGERPRINT_VERSION,
        record.date.as_str(),
        &heroes.join(SEPARATOR),
        &event.event_name,
        &event.round,
    ]
    .join(SEPARATOR)
}

fn normalize_hero(hero: &str) -> String {
    let normalized = hero.trim().to_lowercase();
    if normalized.is_empty() {
        UNKNOWN_HERO.to_string()
    } else {
        normalized
    }
}

/// 32-bit multiplicative hash over UTF-16 code units, so identifiers stay
/// compatible with ones generated by browser clients.
fn rolling_hash(input: &str, seed: u32, prime: u32) -> u32 {
    input
        .encode_utf16()
        .fold(seed, |hash, unit| (hash ^ u32::from(unit)).wrapping_mul(prime))
}
