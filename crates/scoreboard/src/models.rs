use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

/// One recorded score joined to its player and game.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PlayerScore {
    pub player_name: String,
    pub game_title: String,
    pub score: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct TopPlayer {
    pub player_name: String,
    pub total_score: i64,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct InactivePlayer {
    pub player_name: String,
}

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct GenrePlays {
    pub genre_name: String,
    pub times_played: i64,
}

/// Player created within the reporting window. Keeps the bare `name` key
/// exposed by the original dataset rather than `player_name`.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RecentPlayer {
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A player's most-played game. At most one row per player; ties between
/// equally played games resolve to whichever row the ranking numbered first.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct FavoriteGame {
    pub player_name: String,
    pub game_title: String,
    pub play_count: i64,
}

/// Dataset-wide row counts.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Stats {
    pub player_count: i64,
    pub game_count: i64,
    pub genre_count: i64,
    pub score_count: i64,
}
