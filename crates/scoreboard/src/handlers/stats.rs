//! Health check and dataset statistics handlers.

use axum::{Extension, http::StatusCode, response::Json};

use crate::{database::Database, errors::AppError, models::Stats};

/// Health check endpoint. Liveness only, does not touch the database.
#[utoipa::path(
    get,
    path = "/health",
    tag = "stats",
    responses(
        (status = 200, description = "Health check passed")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get dataset-wide row counts (players, games, genres, scores).
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    responses(
        (status = 200, description = "Dataset statistics", body = Stats),
        (status = 500, description = "Query execution failed")
    )
)]
pub async fn get_stats(Extension(db): Extension<Database>) -> Result<Json<Stats>, AppError> {
    let stats = db.get_stats().await?;
    Ok(Json(stats))
}
