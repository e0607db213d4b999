use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::{info, instrument};

use super::service::validate_user_id;
use super::{H2HRecord, H2HSyncSummary};
use crate::event::MatchEvent;
use crate::matches::MatchRecord;
use crate::shared::{AppError, AppState};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportAccepted {
    pub user_id: String,
    pub match_count: usize,
}

/// GET /h2h/:a/:b
///
/// Same record regardless of argument order
#[instrument(name = "get_h2h", skip(state))]
pub async fn get_h2h(
    State(state): State<AppState>,
    Path((a, b)): Path<(String, String)>,
) -> Result<Json<H2HRecord>, AppError> {
    state
        .h2h_service
        .get_h2h(&a, &b)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("No head-to-head record for {a} and {b}")))
}

/// POST /users/:user_id/h2h
///
/// Recomputes the user's records from the posted match list and waits for
/// the commit.
#[instrument(name = "recompute_h2h", skip(state, matches), fields(match_count = matches.len()))]
pub async fn recompute_h2h(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(matches): Json<Vec<MatchRecord>>,
) -> Result<Json<H2HSyncSummary>, AppError> {
    let summary = state
        .h2h_service
        .compute_for_user(&user_id, &matches)
        .await?;
    Ok(Json(summary))
}

/// POST /users/:user_id/imports
///
/// Accepts an imported match list and hands aggregation to the background
/// subscriber; responds before any H2H work happens.
#[instrument(name = "import_matches", skip(state, matches), fields(match_count = matches.len()))]
pub async fn import_matches(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Json(matches): Json<Vec<MatchRecord>>,
) -> Result<(StatusCode, Json<ImportAccepted>), AppError> {
    validate_user_id(&user_id)?;

    let accepted = ImportAccepted {
        user_id: user_id.clone(),
        match_count: matches.len(),
    };
    let receivers = state
        .event_bus
        .emit(MatchEvent::MatchesImported { user_id, matches });

    info!(
        user_id = %accepted.user_id,
        receivers,
        "Match import accepted"
    );

    Ok((StatusCode::ACCEPTED, Json(accepted)))
}
