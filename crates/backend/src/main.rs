// =============================================================================
// StorePulse Backend - API Server Entry Point
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Main Entry Point
// =============================================================================

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use storepulse_backend::config::Config;
use storepulse_backend::store::{MemStorage, Storage};
use storepulse_backend::{create_router, AppState};

// -----------------------------------------------------------------------------
// 2. Main Entry Point
// -----------------------------------------------------------------------------

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Try current directory first, then crates/backend/
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_filename("crates/backend/.env");
    }

    let config = Config::from_env()?;
    let bind_addr = config.bind_address.clone();

    let store = MemStorage::new();
    if config.seed_data {
        store.initialize().await;
    } else {
        tracing::warn!("Seeding disabled, starting with empty collections");
    }
    tracing::info!(backend = store.name(), "Store ready");

    let state = AppState::new(config, Arc::new(store));
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("StorePulse API Server running on http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
