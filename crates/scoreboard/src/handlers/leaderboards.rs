//! Aggregate leaderboard handlers.

use axum::{Extension, response::Json};

use crate::{
    database::Database,
    errors::AppError,
    models::{FavoriteGame, TopPlayer},
};

/// Get the three players with the highest summed score.
#[utoipa::path(
    get,
    path = "/top-players",
    tag = "leaderboards",
    responses(
        (status = 200, description = "Top players by total score, descending", body = Vec<TopPlayer>),
        (status = 500, description = "Query execution failed")
    )
)]
pub async fn get_top_players(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<TopPlayer>>, AppError> {
    let rows = db.get_top_players().await?;
    Ok(Json(rows))
}

/// Get each player's most-played game.
#[utoipa::path(
    get,
    path = "/favorite-games",
    tag = "leaderboards",
    responses(
        (status = 200, description = "One row per player with their highest play count", body = Vec<FavoriteGame>),
        (status = 500, description = "Query execution failed")
    )
)]
pub async fn get_favorite_games(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<FavoriteGame>>, AppError> {
    let rows = db.get_favorite_games().await?;
    Ok(Json(rows))
}
