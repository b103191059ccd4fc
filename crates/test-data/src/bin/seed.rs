//! Default seed script - populates a development database.
//!
//! Reads the same DB_* environment variables as the server. Run with:
//! ```
//! cargo run -p test-data --bin seed
//! ```

use scoreboard::config::DatabaseConfig;
use sqlx::postgres::PgPoolOptions;
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let db_config = DatabaseConfig::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&db_config.url())
        .await?;

    tracing::info!("Connected to database");

    let mut rng = rand::thread_rng();
    let seeder = Seeder::new(pool);
    seeder.bootstrap_schema().await?;
    let summary = seeder.seed(&SeedConfig::default(), &mut rng).await?;

    // Summary output
    tracing::info!("Seed completed!");
    tracing::info!("  Genres: {}", summary.genres);
    tracing::info!("  Games: {}", summary.games);
    tracing::info!(
        "  Players: {} ({} inactive)",
        summary.players,
        summary.inactive_players
    );
    tracing::info!("  Scores: {}", summary.scores);

    Ok(())
}
