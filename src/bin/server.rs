//! # Taskboard Server
//!
//! Thin wrapper binary for running the task service. Loads configuration
//! from the environment (a `.env` file is honored when present), connects to
//! PostgreSQL, and serves the task API until Ctrl+C or SIGTERM.
//!
//! ## Usage
//!
//! ```bash
//! PORT=8080 POSTGRES_HOST=localhost POSTGRES_PORT=5432 \
//! POSTGRES_USER=postgres POSTGRES_PW=postgres POSTGRES_DB=taskboard \
//! cargo run --bin taskboard-server
//! ```

use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use taskboard::web::{self, AppState};
use taskboard::{logging, AppConfig, TaskStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging first
    logging::init_tracing();

    // A missing .env file is fine; real environment variables still apply
    let _ = dotenvy::dotenv();

    let config = AppConfig::from_env()?;

    info!("Starting Taskboard Server...");
    info!("   Version: {}", env!("CARGO_PKG_VERSION"));

    let pool = PgPoolOptions::new()
        .connect_with(config.database.connect_options())
        .await?;

    let state = AppState::new(TaskStore::new(pool));
    let app = web::router(state);

    let listener = TcpListener::bind(config.bind_addr()).await?;

    info!(addr = %config.bind_addr(), "Task API listening");
    info!("   Press Ctrl+C to shutdown gracefully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Taskboard Server shutdown complete");

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C");
        },
        _ = terminate => {
            info!("Received SIGTERM");
        },
    }
}
