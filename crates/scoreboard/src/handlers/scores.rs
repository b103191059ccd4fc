//! Score listing handlers.

use axum::{Extension, response::Json};

use crate::{database::Database, errors::AppError, models::PlayerScore};

/// Get every recorded score with its player name and game title.
#[utoipa::path(
    get,
    path = "/players-scores",
    tag = "scores",
    responses(
        (status = 200, description = "All scores joined to players and games", body = Vec<PlayerScore>),
        (status = 500, description = "Query execution failed")
    )
)]
pub async fn get_player_scores(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<PlayerScore>>, AppError> {
    let rows = db.get_player_scores().await?;
    Ok(Json(rows))
}
