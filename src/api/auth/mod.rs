//! Authentication API endpoints
//!
//! Provides the login endpoint for JWT-based authentication.

use axum::{extract::State, routing::post, Router};
use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};

/// Create the authentication router
pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub expires_at: String,
}

/// Login with username and password
///
/// POST /api/auth/login
///
/// Returns a JWT token on successful authentication.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    info!(username = %request.username, "Login attempt");

    if !state
        .admin_credentials
        .matches(&request.username, &request.password)
    {
        warn!(username = %request.username, "Login failed");
        return Err(ApiError::unauthorized("Invalid username or password"));
    }

    let token = state
        .jwt_service
        .generate(&request.username)
        .map_err(ApiError::from)?;

    let expires_at = Utc::now() + Duration::hours(state.jwt_service.expires_in_hours() as i64);

    info!(username = %request.username, "Login succeeded");

    Ok(Json(LoginResponse {
        token,
        username: request.username,
        expires_at: expires_at.to_rfc3339(),
    }))
}
