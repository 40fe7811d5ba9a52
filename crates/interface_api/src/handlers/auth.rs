//! Authentication handlers

use axum::{extract::State, Json};
use tracing::info;
use validator::Validate;

use domain_users::error::AuthError;

use crate::auth::create_token;
use crate::dto::auth::{LoginRequest, LoginResponse, UserResponse};
use crate::error::ApiError;
use crate::AppState;

/// POST /api/v1/auth/login
///
/// Verifies the credential against the identity provider, checks that the
/// user actually holds the role they asked to act as, and issues a session
/// token.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let user = state.auth.verify(&request.email, &request.password).await?;

    if user.role != request.role {
        return Err(AuthError::RoleMismatch {
            expected: request.role,
            actual: user.role,
        }
        .into());
    }

    let token = create_token(&user, &state.config.jwt_secret, state.config.jwt_expiration_secs)
        .map_err(|_| ApiError::Internal("Failed to issue session token".to_string()))?;

    info!(user_id = %user.id, role = %user.role, "User logged in");

    Ok(Json(LoginResponse {
        token,
        user: UserResponse::from(user),
    }))
}
