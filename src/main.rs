use connecthub::{app, config::Config, connections::{ConnectionStore, SqliteSlot}, AppState};
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;

    let db_pool = SqlitePoolOptions::new()
        .max_connections(16)
        .connect(&config.database_url)
        .await?;

    let slot = SqliteSlot::open(db_pool).await.map_err(|e| e.0)?;
    let connections = ConnectionStore::open(slot).await;
    info!("loaded {} pending connection requests", connections.requests().len());

    let app = app(AppState::new(connections), config.session_inactivity);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
