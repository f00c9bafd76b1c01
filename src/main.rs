use anyhow::{anyhow, Context};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod app;
mod common;
mod config;
mod docs;
mod infrastructure;
mod middleware;
mod modules;
mod routes;
mod state;
#[cfg(test)]
mod test_support;

use crate::common::security::CredentialStore;
use crate::config::settings::AppConfig;
use crate::infrastructure::db::{pool, schema};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("Starting server...");

    let config = AppConfig::new().context("invalid configuration")?;
    let db = pool::connect_to_db(&config.database_url, config.db_max_connections)
        .await
        .context("failed to open database")?;
    schema::init_schema(&db).await.context("failed to create schema")?;

    let credentials =
        CredentialStore::from_config(&config.admin).map_err(|e| anyhow!("invalid admin credentials: {}", e))?;
    let state = AppState::new(config, db, credentials);
    let addr = state.config.bind_addr();

    let app = app::create_app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
