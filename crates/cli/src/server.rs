//! # CLI Server
//!
//! Server startup and management for the Vigia CLI.

use std::net::SocketAddr;

use anyhow::anyhow;
use access::AccessPolicy;
use error::Result;
use ::server::{create_app_router, store::cache::RecordCache, AppState};
use tokio::net::TcpListener;
use tracing::info;

use crate::{
    config::{build_database_url, parse_socket_addr, DatabaseConfig},
    ServeArgs,
};

/// Starts the API server
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Serve command arguments
///
/// # Returns
///
/// A `Result` indicating success or failure.
pub async fn serve(config: &DatabaseConfig, args: &ServeArgs) -> Result<()> {
    info!(target: "serve", "Starting API server...");

    // Build database URL from configuration
    let database_url = build_database_url(config);

    // Connect to database; the schema is owned by the external service
    info!(target: "serve", "Connecting to database...");
    let db = sea_orm::Database::connect(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    // Assemble application state
    let policy = AccessPolicy::from_env();
    let cache = RecordCache::new(&args.cache_dir);
    let state = AppState::new(db, policy, cache);

    // Create the Axum router
    let app = create_app_router(state);

    // Parse the bind address
    let address = parse_socket_addr(&args.host, args.port)
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", args.host, args.port, e))?;

    serve_http(&app, &address).await
}

/// Serves the application over HTTP
async fn serve_http(app: &axum::Router, address: &SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", address, e))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    Ok(axum::serve(
        listener,
        app.clone()
            .into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| anyhow!("HTTP server error: {}", e))?)
}

/// Resolves when a shutdown signal is received
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(target: "serve", "Received shutdown signal, stopping server...");
}
