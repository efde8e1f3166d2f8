//! Dashboard API endpoints
//!
//! Read-side reporting over the immunisation roster: aggregate statistics,
//! per-user summaries, and status-filtered summaries.

use axum::{
    extract::{Path, State},
    routing::get,
    Router,
};
use tracing::info;

use crate::api::middleware::RequireAuth;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::UserSummary;
use crate::infrastructure::services::DashboardReport;

/// Create the dashboard router
pub fn create_dashboard_router() -> Router<AppState> {
    Router::new()
        .route("/statistics", get(get_statistics))
        .route("/users", get(get_users))
        .route("/users/status/{status}", get(get_users_by_status))
}

/// GET /api/dashboard/statistics
pub async fn get_statistics(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<DashboardReport>, ApiError> {
    info!("Getting dashboard statistics");

    let report = state
        .dashboard_service
        .statistics()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(report))
}

/// GET /api/dashboard/users
pub async fn get_users(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    info!("Getting immunisation summaries for all users");

    let summaries = state
        .dashboard_service
        .user_summaries()
        .await
        .map_err(ApiError::from)?;

    Ok(Json(summaries))
}

/// GET /api/dashboard/users/status/{status}
pub async fn get_users_by_status(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(status): Path<String>,
) -> Result<Json<Vec<UserSummary>>, ApiError> {
    info!(status = %status, "Getting users by immunisation status");

    let summaries = state
        .dashboard_service
        .users_by_status(&status)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(summaries))
}
