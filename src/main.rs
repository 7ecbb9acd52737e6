//! Server binary: reads config from env (and `.env`), opens the store, ensures tables exist,
//! optionally seeds demo data, then serves the API.

use bakery_api::{app_router, connect, ensure_tables, seed_if_empty, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.default_log_directive())),
        )
        .init();

    let pool = connect(&config).await?;
    ensure_tables(&pool).await?;
    if config.seed_demo_data {
        seed_if_empty(&pool).await?;
    }

    let app = app_router(AppState::new(pool.clone()));
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(debug = config.debug, "listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
