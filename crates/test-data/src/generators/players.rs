//! Player generation.

use fake::{Fake, faker::name::en::Name};
use rand::Rng;
use time::{Duration, OffsetDateTime};

/// Generated player data ready for database insertion.
#[derive(Debug, Clone)]
pub struct GeneratedPlayer {
    pub name: String,
    pub created_at: OffsetDateTime,
}

/// Generates players with account ages on both sides of the 30-day
/// recency window.
pub struct PlayerGenerator {
    recent_fraction: f64,
}

impl PlayerGenerator {
    /// `recent_fraction` is the probability that a generated account is
    /// younger than 30 days.
    pub fn new(recent_fraction: f64) -> Self {
        Self { recent_fraction }
    }

    pub fn generate(&self, rng: &mut impl Rng) -> GeneratedPlayer {
        let age_days: i64 = if rng.gen_bool(self.recent_fraction) {
            rng.gen_range(0..30)
        } else {
            rng.gen_range(31..365)
        };

        GeneratedPlayer {
            name: Name().fake_with_rng::<String, _>(rng),
            created_at: OffsetDateTime::now_utc() - Duration::days(age_days),
        }
    }
}
