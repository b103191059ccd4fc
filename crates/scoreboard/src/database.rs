use sqlx::PgPool;

use crate::errors::AppError;
use crate::models::{
    FavoriteGame, GenrePlays, InactivePlayer, PlayerScore, RecentPlayer, Stats, TopPlayer,
};

/// Handle over the report database. One method per fixed report query;
/// every method borrows a pooled connection for exactly one statement.
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_player_scores(&self) -> Result<Vec<PlayerScore>, AppError> {
        let rows: Vec<PlayerScore> = sqlx::query_as(
            r#"
            SELECT
                players.name AS player_name,
                games.title AS game_title,
                scores.score::BIGINT AS score
            FROM scores
            INNER JOIN players ON scores.player_id = players.id
            INNER JOIN games ON scores.game_id = games.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_top_players(&self) -> Result<Vec<TopPlayer>, AppError> {
        let rows: Vec<TopPlayer> = sqlx::query_as(
            r#"
            SELECT
                players.name AS player_name,
                SUM(scores.score)::BIGINT AS total_score
            FROM scores
            JOIN players ON scores.player_id = players.id
            GROUP BY players.name
            ORDER BY total_score DESC
            LIMIT 3
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_inactive_players(&self) -> Result<Vec<InactivePlayer>, AppError> {
        let rows: Vec<InactivePlayer> = sqlx::query_as(
            r#"
            SELECT
                players.name AS player_name
            FROM players
            LEFT JOIN scores ON players.id = scores.player_id
            WHERE scores.id IS NULL
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_popular_genres(&self) -> Result<Vec<GenrePlays>, AppError> {
        let rows: Vec<GenrePlays> = sqlx::query_as(
            r#"
            SELECT
                genres.name AS genre_name,
                COUNT(scores.id) AS times_played
            FROM scores
            JOIN games ON scores.game_id = games.id
            JOIN genres ON games.genre_id = genres.id
            GROUP BY genres.name
            ORDER BY times_played DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// "Recent" is measured against the database clock at query time.
    pub async fn get_recent_players(&self) -> Result<Vec<RecentPlayer>, AppError> {
        let rows: Vec<RecentPlayer> = sqlx::query_as(
            r#"
            SELECT name, created_at
            FROM players
            WHERE created_at >= NOW() - INTERVAL '30 days'
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Per-player play counts grouped by game, ranked within each player
    /// partition, keeping only the top-ranked game. Equal play counts leave
    /// the winner to the row order the engine feeds the ranking.
    pub async fn get_favorite_games(&self) -> Result<Vec<FavoriteGame>, AppError> {
        let rows: Vec<FavoriteGame> = sqlx::query_as(
            r#"
            SELECT player_name, game_title, play_count
            FROM (
                SELECT
                    players.name AS player_name,
                    games.title AS game_title,
                    COUNT(scores.id) AS play_count,
                    ROW_NUMBER() OVER (
                        PARTITION BY players.id
                        ORDER BY COUNT(scores.id) DESC
                    ) AS rank
                FROM scores
                JOIN players ON scores.player_id = players.id
                JOIN games ON scores.game_id = games.id
                GROUP BY players.id, players.name, games.title
            ) AS ranked
            WHERE rank = 1
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn get_stats(&self) -> Result<Stats, AppError> {
        let stats: Stats = sqlx::query_as(
            r#"
            SELECT
                (SELECT COUNT(*) FROM players) AS player_count,
                (SELECT COUNT(*) FROM games) AS game_count,
                (SELECT COUNT(*) FROM genres) AS genre_count,
                (SELECT COUNT(*) FROM scores) AS score_count
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(stats)
    }
}
