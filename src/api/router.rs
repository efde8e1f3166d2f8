use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth;
use super::dashboard;
use super::health;
use super::state::AppState;
use super::users;

/// Create a minimal router without state (for testing/backward compatibility)
/// Note: /health/ready endpoint is not available without state
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/live", get(health::live_check))
        .layer(TraceLayer::new_for_http())
}

/// Create the full router with application state
pub fn create_router_with_state(state: AppState) -> Router {
    Router::new()
        // Health endpoints (no auth required)
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::ready_check))
        .route("/health/live", get(health::live_check))
        // Authentication endpoints (no auth required for login)
        .nest("/api/auth", auth::create_auth_router())
        // Dashboard reporting endpoints
        .nest("/api/dashboard", dashboard::create_dashboard_router())
        // User management endpoints
        .nest("/api/users", users::create_users_router())
        // Add state and middleware
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
