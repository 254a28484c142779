//! AuraIO onboarding server entry point.
//!
//! Validates the bundled marketing content, opens the lead store, then
//! starts the Axum HTTP server with graceful shutdown.

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use auraio_storage::{LeadStore, MemoryLeadStore};

use auraio_server::config::{ServerConfig, StorageBackendType};
use auraio_server::routes::build_router;
use auraio_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .json()
        .init();

    info!(storage = ?config.storage_backend, "AuraIO starting");

    let state = build_app_state(&config).await?;

    // Bad content is a build defect; refuse to serve it.
    state
        .content
        .validate()
        .context("bundled landing content is invalid")?;

    let app = build_router(Arc::new(state));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind to {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "AuraIO server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("AuraIO server stopped");
    Ok(())
}

/// Open the configured lead store and build the shared application state.
async fn build_app_state(config: &ServerConfig) -> anyhow::Result<AppState> {
    let store: Arc<dyn LeadStore> = match &config.storage_backend {
        StorageBackendType::Memory => {
            info!("using in-memory lead store (leads will not persist)");
            Arc::new(MemoryLeadStore::new())
        }
        #[cfg(feature = "postgres-backend")]
        StorageBackendType::Postgres {
            url,
            max_connections,
        } => {
            info!(url = %"[redacted]", max_connections, "using PostgreSQL lead store");
            Arc::new(
                auraio_storage::PostgresLeadStore::connect(url, *max_connections)
                    .await
                    .context("failed to connect to PostgreSQL lead store")?,
            )
        }
        #[cfg(not(feature = "postgres-backend"))]
        StorageBackendType::Postgres { .. } => {
            anyhow::bail!(
                "PostgreSQL lead store requested but feature 'postgres-backend' is not enabled"
            );
        }
    };

    Ok(AppState::new(store).with_max_body_bytes(config.max_body_bytes))
}

/// Resolve on Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
