pub mod config;
pub mod database;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod request_id;

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::get,
};
use sqlx::PgPool;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    set_header::SetResponseHeaderLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    database::Database,
    handlers::{
        get_favorite_games, get_inactive_players, get_player_scores, get_popular_genres,
        get_recent_players, get_stats, get_top_players, health_check,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_player_scores,
        handlers::get_top_players,
        handlers::get_inactive_players,
        handlers::get_popular_genres,
        handlers::get_recent_players,
        handlers::get_favorite_games,
        handlers::get_stats,
        handlers::health_check,
    ),
    components(schemas(
        models::PlayerScore,
        models::TopPlayer,
        models::InactivePlayer,
        models::GenrePlays,
        models::RecentPlayer,
        models::FavoriteGame,
        models::Stats,
    )),
    tags(
        (name = "scores", description = "Raw score listings"),
        (name = "leaderboards", description = "Aggregate player rankings"),
        (name = "players", description = "Player activity segmentation"),
        (name = "genres", description = "Genre popularity"),
        (name = "stats", description = "Operational endpoints"),
    )
)]
pub struct ApiDoc;

pub fn create_router(pool: PgPool) -> Router {
    let db = Database::new(pool);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers(Any)
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/health", get(health_check))
        .route("/stats", get(get_stats))
        // Report routes: all GET, all parameterless
        .route("/players-scores", get(get_player_scores))
        .route("/top-players", get(get_top_players))
        .route("/inactive-players", get(get_inactive_players))
        .route("/popular-genres", get(get_popular_genres))
        .route("/recent-players", get(get_recent_players))
        .route("/favorite-games", get(get_favorite_games))
        .layer(Extension(db))
        .layer(middleware::from_fn(request_id::request_id_middleware))
        .layer(cors)
        .layer(CompressionLayer::new())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_XSS_PROTECTION,
            HeaderValue::from_static("1; mode=block"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
}

pub async fn run_server(pool: PgPool, port: u16) -> anyhow::Result<()> {
    let app = create_router(pool);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    tracing::info!("Server running on http://0.0.0.0:{}", port);

    axum::serve(listener, app).await?;

    Ok(())
}
