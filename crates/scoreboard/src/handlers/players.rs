//! Player segmentation handlers.

use axum::{Extension, response::Json};

use crate::{
    database::Database,
    errors::AppError,
    models::{InactivePlayer, RecentPlayer},
};

/// Get players that never recorded a score.
#[utoipa::path(
    get,
    path = "/inactive-players",
    tag = "players",
    responses(
        (status = 200, description = "Players with zero score rows", body = Vec<InactivePlayer>),
        (status = 500, description = "Query execution failed")
    )
)]
pub async fn get_inactive_players(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<InactivePlayer>>, AppError> {
    let rows = db.get_inactive_players().await?;
    Ok(Json(rows))
}

/// Get players created within the last 30 days.
#[utoipa::path(
    get,
    path = "/recent-players",
    tag = "players",
    responses(
        (status = 200, description = "Players created in the reporting window", body = Vec<RecentPlayer>),
        (status = 500, description = "Query execution failed")
    )
)]
pub async fn get_recent_players(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<RecentPlayer>>, AppError> {
    let rows = db.get_recent_players().await?;
    Ok(Json(rows))
}
