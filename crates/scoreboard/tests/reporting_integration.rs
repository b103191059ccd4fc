//! Integration tests for the report queries.
//!
//! These tests verify end-to-end query behavior: join shapes, aggregate
//! ordering, the inactive-player null filter, the 30-day recency window,
//! and the per-player favorite-game ranking.
//!
//! To run them you need a PostgreSQL database and the DATABASE_URL
//! environment variable set. Run with:
//! `DATABASE_URL=postgres://... cargo test -p scoreboard --test reporting_integration`
//!
//! Note: the tests create uniquely named rows and clean them up afterwards,
//! so they can safely run against a development database. Assertions are
//! written to hold even when other rows already exist.

use scoreboard::database::Database;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::env;
use uuid::Uuid;

/// Get database pool, skipping tests if DATABASE_URL is not set.
async fn get_test_pool() -> Option<PgPool> {
    let database_url = match env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping test: DATABASE_URL not set");
            return None;
        }
    };

    match PgPoolOptions::new()
        .max_connections(1)
        .connect(&database_url)
        .await
    {
        Ok(pool) => Some(pool),
        Err(e) => {
            eprintln!("Skipping test: Failed to connect to database: {e}");
            None
        }
    }
}

/// Creates the consumed schema shape if the development database is empty.
async fn bootstrap_schema(pool: &PgPool) {
    let statements = [
        "CREATE TABLE IF NOT EXISTS genres (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL
        )",
        "CREATE TABLE IF NOT EXISTS players (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )",
        "CREATE TABLE IF NOT EXISTS games (
            id BIGSERIAL PRIMARY KEY,
            title TEXT NOT NULL,
            genre_id BIGINT NOT NULL REFERENCES genres(id)
        )",
        "CREATE TABLE IF NOT EXISTS scores (
            id BIGSERIAL PRIMARY KEY,
            player_id BIGINT NOT NULL REFERENCES players(id),
            game_id BIGINT NOT NULL REFERENCES games(id),
            score BIGINT NOT NULL
        )",
    ];
    for statement in statements {
        sqlx::query(statement)
            .execute(pool)
            .await
            .expect("Failed to bootstrap schema");
    }
}

async fn create_genre(pool: &PgPool, name: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO genres (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("Failed to create genre")
}

async fn create_game(pool: &PgPool, title: &str, genre_id: i64) -> i64 {
    sqlx::query_scalar("INSERT INTO games (title, genre_id) VALUES ($1, $2) RETURNING id")
        .bind(title)
        .bind(genre_id)
        .fetch_one(pool)
        .await
        .expect("Failed to create game")
}

async fn create_player(pool: &PgPool, name: &str, days_ago: i32) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO players (name, created_at)
         VALUES ($1, NOW() - make_interval(days => $2))
         RETURNING id",
    )
    .bind(name)
    .bind(days_ago)
    .fetch_one(pool)
    .await
    .expect("Failed to create player")
}

async fn record_score(pool: &PgPool, player_id: i64, game_id: i64, score: i64) {
    sqlx::query("INSERT INTO scores (player_id, game_id, score) VALUES ($1, $2, $3)")
        .bind(player_id)
        .bind(game_id)
        .bind(score)
        .execute(pool)
        .await
        .expect("Failed to record score");
}

/// Cleanup helper to remove fixture rows in foreign-key order.
async fn cleanup(pool: &PgPool, players: &[i64], games: &[i64], genres: &[i64]) {
    for player_id in players {
        let _ = sqlx::query("DELETE FROM scores WHERE player_id = $1")
            .bind(player_id)
            .execute(pool)
            .await;
        let _ = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(player_id)
            .execute(pool)
            .await;
    }
    for game_id in games {
        let _ = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(game_id)
            .execute(pool)
            .await;
    }
    for genre_id in genres {
        let _ = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(genre_id)
            .execute(pool)
            .await;
    }
}

fn unique(label: &str) -> String {
    format!("{label} {}", Uuid::new_v4())
}

#[tokio::test]
async fn player_scores_joins_names_and_titles() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    bootstrap_schema(&pool).await;
    let db = Database::new(pool.clone());

    let genre = create_genre(&pool, &unique("Arcade")).await;
    let title = unique("Star Chaser");
    let game = create_game(&pool, &title, genre).await;
    let name = unique("Ada");
    let player = create_player(&pool, &name, 0).await;
    record_score(&pool, player, game, 4242).await;

    let rows = db.get_player_scores().await.expect("query failed");
    assert!(
        rows.iter()
            .any(|r| r.player_name == name && r.game_title == title && r.score == 4242),
        "fixture score row missing from /players-scores result"
    );

    cleanup(&pool, &[player], &[game], &[genre]).await;
}

#[tokio::test]
async fn top_players_is_bounded_and_sorted() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    bootstrap_schema(&pool).await;
    let db = Database::new(pool.clone());

    let genre = create_genre(&pool, &unique("Arcade")).await;
    let game = create_game(&pool, &unique("Star Chaser"), genre).await;
    let mut players = Vec::new();
    for (i, total) in [100, 250, 75, 300].into_iter().enumerate() {
        let player = create_player(&pool, &unique(&format!("Player {i}")), 0).await;
        record_score(&pool, player, game, total).await;
        players.push(player);
    }

    let rows = db.get_top_players().await.expect("query failed");
    assert!(rows.len() <= 3, "top players must be limited to 3 rows");
    for pair in rows.windows(2) {
        assert!(
            pair[0].total_score >= pair[1].total_score,
            "total_score must be non-increasing"
        );
    }

    cleanup(&pool, &players, &[game], &[genre]).await;
}

#[tokio::test]
async fn inactive_players_lists_only_scoreless_players() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    bootstrap_schema(&pool).await;
    let db = Database::new(pool.clone());

    let genre = create_genre(&pool, &unique("Arcade")).await;
    let game = create_game(&pool, &unique("Star Chaser"), genre).await;
    let idle_name = unique("Idle Ida");
    let idle = create_player(&pool, &idle_name, 0).await;
    let active_name = unique("Active Al");
    let active = create_player(&pool, &active_name, 0).await;
    record_score(&pool, active, game, 10).await;

    let rows = db.get_inactive_players().await.expect("query failed");
    assert!(
        rows.iter().any(|r| r.player_name == idle_name),
        "scoreless player missing from /inactive-players"
    );
    assert!(
        !rows.iter().any(|r| r.player_name == active_name),
        "player with a score must not appear in /inactive-players"
    );

    cleanup(&pool, &[idle, active], &[game], &[genre]).await;
}

#[tokio::test]
async fn popular_genres_counts_plays_in_descending_order() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    bootstrap_schema(&pool).await;
    let db = Database::new(pool.clone());

    let genre_name = unique("Puzzle");
    let genre = create_genre(&pool, &genre_name).await;
    let game = create_game(&pool, &unique("Block Drop"), genre).await;
    let player = create_player(&pool, &unique("Ada"), 0).await;
    record_score(&pool, player, game, 5).await;
    record_score(&pool, player, game, 9).await;

    let rows = db.get_popular_genres().await.expect("query failed");
    let ours = rows
        .iter()
        .find(|r| r.genre_name == genre_name)
        .expect("fixture genre missing from /popular-genres");
    assert!(ours.times_played >= 2);
    for pair in rows.windows(2) {
        assert!(
            pair[0].times_played >= pair[1].times_played,
            "times_played must be non-increasing"
        );
    }

    cleanup(&pool, &[player], &[game], &[genre]).await;
}

#[tokio::test]
async fn recent_players_respects_thirty_day_window() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    bootstrap_schema(&pool).await;
    let db = Database::new(pool.clone());

    let recent_name = unique("Recent Rhea");
    let recent = create_player(&pool, &recent_name, 29).await;
    let old_name = unique("Old Omar");
    let old = create_player(&pool, &old_name, 31).await;

    let rows = db.get_recent_players().await.expect("query failed");
    assert!(
        rows.iter().any(|r| r.name == recent_name),
        "player created 29 days ago must be included"
    );
    assert!(
        !rows.iter().any(|r| r.name == old_name),
        "player created 31 days ago must be excluded"
    );

    cleanup(&pool, &[recent, old], &[], &[]).await;
}

#[tokio::test]
async fn favorite_games_picks_highest_play_count_per_player() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    bootstrap_schema(&pool).await;
    let db = Database::new(pool.clone());

    let genre = create_genre(&pool, &unique("Arcade")).await;
    let favorite_title = unique("Star Chaser");
    let favorite = create_game(&pool, &favorite_title, genre).await;
    let other = create_game(&pool, &unique("Block Drop"), genre).await;
    let name = unique("Ada");
    let player = create_player(&pool, &name, 0).await;
    for score in [10, 20, 30] {
        record_score(&pool, player, favorite, score).await;
    }
    record_score(&pool, player, other, 99).await;

    let rows = db.get_favorite_games().await.expect("query failed");
    let ours: Vec<_> = rows.iter().filter(|r| r.player_name == name).collect();
    assert_eq!(ours.len(), 1, "exactly one favorite row per player");
    assert_eq!(ours[0].game_title, favorite_title);
    assert_eq!(ours[0].play_count, 3);

    cleanup(&pool, &[player], &[favorite, other], &[genre]).await;
}

#[tokio::test]
async fn reports_are_idempotent_for_unchanged_data() {
    let Some(pool) = get_test_pool().await else {
        return;
    };
    bootstrap_schema(&pool).await;
    let db = Database::new(pool.clone());

    let genre = create_genre(&pool, &unique("Arcade")).await;
    let game = create_game(&pool, &unique("Star Chaser"), genre).await;
    let player = create_player(&pool, &unique("Ada"), 0).await;
    record_score(&pool, player, game, 77).await;

    let first = db.get_player_scores().await.expect("query failed");
    let second = db.get_player_scores().await.expect("query failed");
    assert_eq!(
        serde_json::to_value(&first).unwrap(),
        serde_json::to_value(&second).unwrap(),
        "read-only report must return identical rows for unchanged data"
    );

    cleanup(&pool, &[player], &[game], &[genre]).await;
}
