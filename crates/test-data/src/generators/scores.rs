//! Score history generation.

use rand::Rng;
use rand_distr::{Distribution, LogNormal};

/// Generated score row. Indices refer to the seeding run's player and game
/// lists, not database ids.
#[derive(Debug, Clone)]
pub struct GeneratedScore {
    pub player_index: usize,
    pub game_index: usize,
    pub score: i64,
}

/// Generates per-player score histories. Play counts are uniform within the
/// configured range; score magnitudes follow a log-normal distribution.
pub struct ScoreGenerator {
    min_per_player: usize,
    max_per_player: usize,
    magnitude: LogNormal<f64>,
}

impl ScoreGenerator {
    pub fn new(min_per_player: usize, max_per_player: usize) -> Self {
        Self {
            min_per_player,
            max_per_player,
            magnitude: LogNormal::new(8.0, 1.4).expect("valid distribution parameters"),
        }
    }

    /// Generates the score rows for one active player.
    pub fn generate_for_player(
        &self,
        player_index: usize,
        game_count: usize,
        rng: &mut impl Rng,
    ) -> Vec<GeneratedScore> {
        let plays = rng.gen_range(self.min_per_player..=self.max_per_player);
        (0..plays)
            .map(|_| GeneratedScore {
                player_index,
                game_index: rng.gen_range(0..game_count),
                score: (self.magnitude.sample(rng) as i64).clamp(1, 5_000_000),
            })
            .collect()
    }
}
