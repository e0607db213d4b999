use axum::Json;
use serde::Serialize;
use tracing::{debug, instrument};

use super::{fingerprint, MatchRecord};

#[derive(Debug, Serialize)]
pub struct FingerprintResponse {
    pub fingerprint: String,
}

/// POST /fingerprint
///
/// Returns the participant-independent identity of a match, e.g. for
/// keying comment threads.
#[instrument(name = "fingerprint_match", skip(record))]
pub async fn fingerprint_match(Json(record): Json<MatchRecord>) -> Json<FingerprintResponse> {
    let fingerprint = fingerprint(&record);
    debug!(date = %record.date, fingerprint = %fingerprint, "Fingerprinted match");
    Json(FingerprintResponse { fingerprint })
}
