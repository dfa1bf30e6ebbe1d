//! Restaurant Manager Binary
//!
//! Serves the menu, ordering and order-status pages.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin restaurant-manager
//! ```
//!
//! # Environment Variables
//!
//! - `RESTAURANT_CONFIG`: Config file path (default: config.yaml)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`

use std::sync::Arc;

use anyhow::Context;
use restaurant_manager::config::{Config, config_path, load_config};
use restaurant_manager::infrastructure::http::{AppState, create_router};
use restaurant_manager::infrastructure::persistence::SqliteStore;
use restaurant_manager::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    let path = config_path();
    let config = load_config(Some(&path)).with_context(|| format!("loading {path}"))?;
    init_tracing(&config.observability.logging);

    tracing::info!(
        config_path = %path,
        version = env!("CARGO_PKG_VERSION"),
        "Starting Restaurant Manager"
    );
    log_config(&config);

    let store = Arc::new(
        SqliteStore::open(&config.persistence.db_path)
            .with_context(|| format!("opening database {}", config.persistence.db_path))?,
    );

    let state = AppState::new(
        Arc::clone(&store),
        Arc::clone(&store),
        config.restaurant.site_info(),
    );
    let app = create_router(state);

    let addr = config.server.listen_address();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!(%addr, "HTTP server starting");
    tracing::info!("Pages: /  /menu  /orders/new  /orders/status");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    tracing::info!("Restaurant Manager stopped");
    Ok(())
}

/// Load .env file from current or ancestor directories.
fn load_dotenv() {
    // A missing .env is normal outside development
    let _ = dotenvy::dotenv();
}

fn log_config(config: &Config) {
    tracing::info!(
        restaurant = %config.restaurant.name,
        db_path = %config.persistence.db_path,
        http_port = config.server.http_port,
        log_format = %config.observability.logging.format,
        "Configuration loaded"
    );
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
