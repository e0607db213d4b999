use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::event::EventBus;
use crate::h2h::H2HService;
use crate::stats::StatsError;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub h2h_service: Arc<H2HService>,
    pub event_bus: EventBus,
}

impl AppState {
    pub fn new(h2h_service: Arc<H2HService>, event_bus: EventBus) -> Self {
        Self {
            h2h_service,
            event_bus,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

impl From<StatsError> for AppError {
    fn from(err: StatsError) -> Self {
        match err {
            StatsError::Repository(msg) | StatsError::Resolver(msg) => AppError::DatabaseError(msg),
            StatsError::Validation(msg) => AppError::BadRequest(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::DatabaseError(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Database error: {}", msg),
            ),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
