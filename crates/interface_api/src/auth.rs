//! Session tokens
//!
//! Login produces a JWT carrying the user's identity and role. Middleware
//! validates the token on every protected request and rebuilds the explicit
//! [`SessionContext`] handlers receive; no session state lives outside the
//! token.

use chrono::{Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::UserId;
use domain_users::session::SessionContext;
use domain_users::user::{Role, User};

use crate::error::ApiError;

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject (user ID)
    pub sub: String,
    /// User's email
    pub email: String,
    /// User's display name
    pub name: String,
    /// Portal role
    pub role: Role,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
}

impl From<TokenError> for ApiError {
    fn from(_: TokenError) -> Self {
        ApiError::Unauthorized
    }
}

/// Creates a session token for a verified user
pub fn create_token(
    user: &User,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, TokenError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = TokenClaims {
        sub: user.id.as_uuid().to_string(),
        email: user.email.clone(),
        name: user.name.clone(),
        role: user.role,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| TokenError::InvalidToken)
}

/// Validates a session token
pub fn validate_token(token: &str, secret: &str) -> Result<TokenClaims, TokenError> {
    let token_data = decode::<TokenClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            TokenError::TokenExpired
        } else {
            TokenError::InvalidToken
        }
    })?;

    Ok(token_data.claims)
}

/// Rebuilds the explicit session context from validated token claims
pub fn session_from_claims(claims: &TokenClaims) -> Result<SessionContext, TokenError> {
    let user_id = claims
        .sub
        .parse::<UserId>()
        .map_err(|_| TokenError::InvalidToken)?;
    let issued_at = Utc
        .timestamp_opt(claims.iat, 0)
        .single()
        .ok_or(TokenError::InvalidToken)?;

    Ok(SessionContext {
        user_id,
        email: claims.email.clone(),
        name: claims.name.clone(),
        role: claims.role,
        issued_at,
    })
}
