//! Genre popularity handlers.

use axum::{Extension, response::Json};

use crate::{database::Database, errors::AppError, models::GenrePlays};

/// Get genres ordered by how often their games were played.
#[utoipa::path(
    get,
    path = "/popular-genres",
    tag = "genres",
    responses(
        (status = 200, description = "Genres with play counts, most played first", body = Vec<GenrePlays>),
        (status = 500, description = "Query execution failed")
    )
)]
pub async fn get_popular_genres(
    Extension(db): Extension<Database>,
) -> Result<Json<Vec<GenrePlays>>, AppError> {
    let rows = db.get_popular_genres().await?;
    Ok(Json(rows))
}
