// =============================================================================
// StorePulse Backend - Library Root
// =============================================================================
// Table of Contents:
// 1. Modules
// 2. Application State
// 3. Router Setup
// =============================================================================

pub mod analytics;
pub mod config;
pub mod environmental;
pub mod error;
pub mod params;
pub mod recommendations;
pub mod simulate;
pub mod store;
pub mod trends;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::store::Storage;

// -----------------------------------------------------------------------------
// 2. Application State
// -----------------------------------------------------------------------------

/// Shared application state. Handlers hold no state of their own.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn Storage>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Router Setup
// -----------------------------------------------------------------------------

pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        // Health check
        .route("/health", get(|| async { "OK" }))
        // Environmental data
        .route("/api/environmental", post(environmental::create))
        .route("/api/environmental/current", get(environmental::get_current))
        .route("/api/environmental/history/:hours", get(environmental::get_history))
        .route("/api/environmental/simulate", post(environmental::simulate))
        // Recommendations
        .route(
            "/api/recommendations",
            get(recommendations::list_active).post(recommendations::create_recommendation),
        )
        .route("/api/recommendations/all", get(recommendations::list_all))
        .route(
            "/api/recommendations/:id",
            get(recommendations::get_recommendation)
                .patch(recommendations::update_recommendation)
                .delete(recommendations::delete_recommendation),
        )
        // Demand trends
        .route("/api/trends", post(trends::create_trend))
        .route("/api/trends/:hours", get(trends::get_trends))
        // Users
        .route("/api/users", post(users::signup))
        .route("/api/users/:id", get(users::get_user))
        // Analytics
        .route("/api/analytics/summary", get(analytics::get_summary))
        .route("/api/layout/zones", get(analytics::get_layout_zones))
        // Middleware
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(TraceLayer::new_for_http());

    let router = if state.config.cors_allow_any {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    } else {
        router
    };

    router.with_state(state)
}
