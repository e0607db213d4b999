pub mod fingerprint;
pub mod handlers;
pub mod models;

pub use fingerprint::fingerprint;
pub use models::{EventDetails, MatchRecord, MatchResult};
