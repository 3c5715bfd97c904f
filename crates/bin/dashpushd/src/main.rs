//! # dashpushd — dashpush daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialize `tracing` logging
//! - Open the file-backed snapshot store
//! - Construct the snapshot service, injecting the store and ingress guard
//! - Build the axum router, injecting application state
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer. No domain logic belongs here.

mod config;

use std::time::Duration;

use dashpush_adapter_http_axum::state::AppState;
use dashpush_adapter_storage_file::FileSnapshotStore;
use dashpush_app::guard::IngressGuard;
use dashpush_app::services::snapshot_service::SnapshotService;
use dashpush_domain::time::{now, to_iso};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    if config.uses_default_secret() {
        tracing::warn!("using the built-in update secret; set UPDATE_SECRET before exposing this server");
    }

    // Storage
    let store = FileSnapshotStore::open(config.storage.path.clone()).await;
    tracing::debug!(path = %store.path().display(), "snapshot store opened");

    // Services
    let snapshot_service = SnapshotService::new(store, IngressGuard::new(&config.auth.secret));

    // HTTP
    let state = AppState::new(snapshot_service, config.view());
    let app = dashpush_adapter_http_axum::router::build(state);

    if config.logging.heartbeat_seconds > 0 {
        tokio::spawn(heartbeat(Duration::from_secs(
            config.logging.heartbeat_seconds,
        )));
    }

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(address = %bind_addr, "dashpushd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("dashpushd stopped");
    Ok(())
}

/// Periodic keep-alive log line.
async fn heartbeat(period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.tick().await;
    loop {
        ticker.tick().await;
        tracing::info!(time = %to_iso(now()), "keep alive");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
    tracing::info!("shutdown signal received");
}
