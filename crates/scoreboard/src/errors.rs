use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the reporting layer.
///
/// Every report endpoint runs exactly one fixed query, so the only failure
/// mode is query execution: connection loss, driver errors, SQL errors.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::Database(e) => error!("Database error: {e}"),
        }

        // One uniform error shape regardless of the underlying cause.
        let body = Json(json!({
            "error": "Internal server error",
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
