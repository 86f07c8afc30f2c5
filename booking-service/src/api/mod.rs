//! API routes for booking-service

pub mod health;
pub mod time;
pub mod zone;

use axum::Router;
use axum::routing::{get, patch, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let public = Router::new()
        .route("/api/time", get(time::clock))
        .route("/api/time/format", post(time::format))
        .route("/api/zones", get(zone::list_active));

    // No authentication here; deploy behind the admin gateway
    let admin = Router::new()
        .route("/api/admin/zones", get(zone::list_all).post(zone::create))
        .route(
            "/api/admin/zones/{id}",
            patch(zone::update).delete(zone::delete),
        )
        .route("/api/admin/zones/{id}/close", post(zone::close))
        .route("/api/admin/zones/{id}/reopen", post(zone::reopen));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(public)
        .merge(admin)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
