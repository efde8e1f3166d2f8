//! User management API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::middleware::RequireAuth;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json};
use crate::domain::User;
use crate::infrastructure::services::{CreateUserRequest, UpdateUserRequest};

/// Create the user management router
pub fn create_users_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/", post(create_user))
        .route("/{user_id}", get(get_user))
        .route("/{user_id}", put(update_user))
        .route("/{user_id}", delete(delete_user))
}

/// Request to register a new user
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserApiRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    #[serde(default)]
    pub last_immunisation_date: Option<DateTime<Utc>>,
}

/// Request to update a user
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserApiRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub status: Option<String>,
    pub last_immunisation_date: Option<DateTime<Utc>>,
}

/// User response for the management API
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: String,
    pub last_immunisation_date: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id(),
            first_name: user.first_name().to_string(),
            last_name: user.last_name().to_string(),
            email: user.email().to_string(),
            status: user.status().as_str().to_string(),
            last_immunisation_date: user.last_immunisation_date().map(|d| d.to_rfc3339()),
            created_at: user.created_at().to_rfc3339(),
            updated_at: user.updated_at().map(|d| d.to_rfc3339()),
        }
    }
}

/// List users response
#[derive(Debug, Clone, Serialize)]
pub struct ListUsersResponse {
    pub users: Vec<UserResponse>,
    pub total: usize,
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
) -> Result<Json<ListUsersResponse>, ApiError> {
    debug!("Listing all users");

    let users = state.user_service.list().await.map_err(ApiError::from)?;

    let user_responses: Vec<UserResponse> = users.iter().map(UserResponse::from).collect();
    let total = user_responses.len();

    Ok(Json(ListUsersResponse {
        users: user_responses,
        total,
    }))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Json(request): Json<CreateUserApiRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    debug!(email = %request.email, "Creating user");

    let create_request = CreateUserRequest {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        status: request.status,
        last_immunisation_date: request.last_immunisation_date,
    };

    let user = state
        .user_service
        .create(create_request)
        .await
        .map_err(ApiError::from)?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// GET /api/users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(user_id): Path<i32>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = user_id, "Getting user");

    let user = state
        .user_service
        .get(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// PUT /api/users/{user_id}
pub async fn update_user(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(user_id): Path<i32>,
    Json(request): Json<UpdateUserApiRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    debug!(user_id = user_id, "Updating user");

    let update_request = UpdateUserRequest {
        first_name: request.first_name,
        last_name: request.last_name,
        email: request.email,
        status: request.status,
        last_immunisation_date: request.last_immunisation_date,
    };

    let user = state
        .user_service
        .update(user_id, update_request)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(UserResponse::from(&user)))
}

/// DELETE /api/users/{user_id}
pub async fn delete_user(
    State(state): State<AppState>,
    RequireAuth(_claims): RequireAuth,
    Path(user_id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    debug!(user_id = user_id, "Deleting user");

    state
        .user_service
        .delete(user_id)
        .await
        .map_err(ApiError::from)?;

    Ok(StatusCode::NO_CONTENT)
}
