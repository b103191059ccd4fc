//! Configuration for seeding operations.

use serde::{Deserialize, Serialize};

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of genres to generate.
    pub genre_count: usize,
    /// Number of games to generate.
    pub game_count: usize,
    /// Number of players to generate.
    pub player_count: usize,
    /// Fraction of players left without any score rows.
    pub inactive_fraction: f64,
    /// Fraction of players created within the last 30 days.
    pub recent_fraction: f64,
    /// Minimum scores recorded per active player.
    pub min_scores_per_player: usize,
    /// Maximum scores recorded per active player.
    pub max_scores_per_player: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            genre_count: 8,
            game_count: 40,
            player_count: 200,
            inactive_fraction: 0.15,
            recent_fraction: 0.25,
            min_scores_per_player: 1,
            max_scores_per_player: 25,
        }
    }
}
