use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::{featured, h2h, matches, shared::AppState, stats};

/// HTTP surface for the stats engine
pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/fingerprint", post(matches::handlers::fingerprint_match))
        .route("/h2h/:a/:b", get(h2h::handlers::get_h2h))
        .route("/users/:user_id/h2h", post(h2h::handlers::recompute_h2h))
        .route("/users/:user_id/imports", post(h2h::handlers::import_matches))
        .route("/power-level", post(stats::handlers::power_level))
        .route(
            "/leaderboard/featured",
            post(featured::handlers::featured_profiles),
        )
        .route(
            "/leaderboard/rank-tiers",
            post(featured::handlers::leaderboard_rank_tiers),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
