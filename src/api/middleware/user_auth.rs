//! Authentication middleware using JWT tokens

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::infrastructure::auth::JwtClaims;

/// Extractor that requires a valid JWT token
///
/// Extracts the JWT token from:
/// - Authorization header: `Bearer <jwt_token>`
#[derive(Debug, Clone)]
pub struct RequireAuth(pub JwtClaims);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_jwt_token(&parts.headers)?;

        debug!("Validating JWT token");

        let claims = state
            .jwt_service
            .validate(&token)
            .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))?;

        Ok(RequireAuth(claims))
    }
}

/// Extract JWT token from Authorization header
pub fn extract_jwt_token(headers: &axum::http::HeaderMap) -> Result<String, ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Err(missing_token());
    };

    let auth_str = auth_header
        .to_str()
        .map_err(|_| ApiError::bad_request("Invalid Authorization header encoding"))?;

    auth_str
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .ok_or_else(missing_token)
}

fn missing_token() -> ApiError {
    ApiError::unauthorized(
        "Authentication required. Provide JWT token via 'Authorization: Bearer <token>' header",
    )
}
