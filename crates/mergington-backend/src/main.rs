use std::sync::Arc;

use tokio::signal;

use mergington::errors::Report;
use mergington::log;

use crate::config::ServerConfig;
use crate::services::ActivityServiceInMemory;

mod config;
mod error;
mod handlers;
mod routes;
mod services;

/// State shared by every request handler.
pub struct AppState {
    pub activities: ActivityServiceInMemory,
    pub started_at: chrono::DateTime<chrono::Utc>,
}

impl AppState {
    pub fn new(activities: ActivityServiceInMemory) -> Self {
        Self {
            activities,
            started_at: chrono::Utc::now(),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Report> {
    // Setup logging
    mergington::log::setup()?;

    let config = ServerConfig::from_env()?;

    // Setup the state and routes
    let state = Arc::new(AppState::new(ActivityServiceInMemory::seeded()));
    log::info!(
        activities = state.activities.activity_count(),
        participants = state.activities.participant_count(),
        "Activity catalog seeded"
    );
    let routes = routes::setup_routes(state);

    // Setup the server
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    log::info!("Starting server on http://{}", listener.local_addr()?);
    log::info!("Press Ctrl+C to stop the server");

    // Start the server
    axum::serve(listener, routes)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("Shutting down server");

    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
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

    log::info!("Signal received, starting graceful shutdown");
}
