//! HTTP request handlers for the scoreboard reporting API.
//!
//! This module re-exports handlers from focused submodules organized by domain.

pub mod genres;
pub mod leaderboards;
pub mod players;
pub mod scores;
pub mod stats;

// Re-export handlers from submodules (including utoipa __path types for OpenAPI)
pub use genres::{__path_get_popular_genres, get_popular_genres};
pub use leaderboards::{
    __path_get_favorite_games, __path_get_top_players, get_favorite_games, get_top_players,
};
pub use players::{
    __path_get_inactive_players, __path_get_recent_players, get_inactive_players,
    get_recent_players,
};
pub use scores::{__path_get_player_scores, get_player_scores};
pub use stats::{__path_get_stats, __path_health_check, get_stats, health_check};
