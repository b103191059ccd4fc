use scoreboard::config::{DatabaseConfig, listen_port};
use scoreboard::run_server;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let db_config = DatabaseConfig::from_env()?;

    tracing::info!(
        "Connecting to database at {}:{}/{}",
        db_config.host,
        db_config.port,
        db_config.database
    );

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(&db_config.url())
        .await?;

    run_server(pool, listen_port()).await
}
