//! Database seeding utilities.

use rand::Rng;
use sqlx::PgPool;
use thiserror::Error;
use tracing::info;

use crate::config::SeedConfig;
use crate::generators::{GameGenerator, PlayerGenerator, ScoreGenerator};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Counts of rows inserted by a seeding run.
#[derive(Debug, Default)]
pub struct SeedSummary {
    pub genres: usize,
    pub games: usize,
    pub players: usize,
    pub inactive_players: usize,
    pub scores: usize,
}

/// Database seeder for inserting generated test data.
pub struct Seeder {
    pool: PgPool,
}

impl Seeder {
    /// Creates a new seeder with the given database pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the consumed schema shape if it does not exist yet. The
    /// serving crate never creates or mutates this schema; development
    /// databases start empty.
    pub async fn bootstrap_schema(&self) -> Result<(), SeedError> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS genres (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS players (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS games (
                id BIGSERIAL PRIMARY KEY,
                title TEXT NOT NULL,
                genre_id BIGINT NOT NULL REFERENCES genres(id)
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS scores (
                id BIGSERIAL PRIMARY KEY,
                player_id BIGINT NOT NULL REFERENCES players(id),
                game_id BIGINT NOT NULL REFERENCES games(id),
                score BIGINT NOT NULL
            )
            "#,
        ];

        for statement in statements {
            sqlx::query(statement).execute(&self.pool).await?;
        }

        Ok(())
    }

    /// Generates and inserts a full dataset.
    pub async fn seed(
        &self,
        config: &SeedConfig,
        rng: &mut impl Rng,
    ) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        let game_gen = GameGenerator::new(config.genre_count);
        let player_gen = PlayerGenerator::new(config.recent_fraction);
        let score_gen = ScoreGenerator::new(
            config.min_scores_per_player,
            config.max_scores_per_player,
        );

        info!("Seeding {} genres...", config.genre_count);
        let mut genre_ids: Vec<i64> = Vec::with_capacity(config.genre_count);
        for name in game_gen.genres() {
            let id = sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
                .bind(&name)
                .fetch_one(&self.pool)
                .await?;
            genre_ids.push(id);
        }
        summary.genres = genre_ids.len();

        info!("Seeding {} games...", config.game_count);
        let mut game_ids: Vec<i64> = Vec::with_capacity(config.game_count);
        for _ in 0..config.game_count {
            let game = game_gen.generate(rng);
            let id = sqlx::query_scalar(
                "INSERT INTO games (title, genre_id) VALUES ($1, $2) RETURNING id",
            )
            .bind(&game.title)
            .bind(genre_ids[game.genre_index])
            .fetch_one(&self.pool)
            .await?;
            game_ids.push(id);
        }
        summary.games = game_ids.len();

        info!("Seeding {} players...", config.player_count);
        let mut player_ids: Vec<i64> = Vec::with_capacity(config.player_count);
        for _ in 0..config.player_count {
            let player = player_gen.generate(rng);
            let id = sqlx::query_scalar(
                "INSERT INTO players (name, created_at) VALUES ($1, $2) RETURNING id",
            )
            .bind(&player.name)
            .bind(player.created_at)
            .fetch_one(&self.pool)
            .await?;
            player_ids.push(id);
        }
        summary.players = player_ids.len();

        info!("Seeding score histories...");
        for player_index in 0..player_ids.len() {
            // Score generation needs at least one game to point at.
            if game_ids.is_empty() {
                break;
            }
            if rng.gen_bool(config.inactive_fraction) {
                summary.inactive_players += 1;
                continue;
            }
            for score in score_gen.generate_for_player(player_index, game_ids.len(), rng) {
                sqlx::query("INSERT INTO scores (player_id, game_id, score) VALUES ($1, $2, $3)")
                    .bind(player_ids[score.player_index])
                    .bind(game_ids[score.game_index])
                    .bind(score.score)
                    .execute(&self.pool)
                    .await?;
                summary.scores += 1;
            }
        }

        info!(
            "Seeded {} scores across {} active players",
            summary.scores,
            summary.players - summary.inactive_players
        );

        Ok(summary)
    }
}
