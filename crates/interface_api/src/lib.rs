//! HTTP API Layer
//!
//! This crate provides the REST API for the reimbursement portal using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Request handlers for auth, claims, stats, and health
//! - **Middleware**: Session validation and request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(claims, auth, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ports::ClaimRepository;
use domain_users::ports::AuthProvider;

use crate::config::ApiConfig;
use crate::handlers::{auth as auth_handlers, claims, health, stats};
use crate::middleware::{request_log_middleware, session_middleware};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub claims: Arc<dyn ClaimRepository>,
    pub auth: Arc<dyn AuthProvider>,
    pub config: ApiConfig,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `claims` - Claim repository
/// * `auth` - Identity provider
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(
    claims: Arc<dyn ClaimRepository>,
    auth: Arc<dyn AuthProvider>,
    config: ApiConfig,
) -> Router {
    let state = AppState {
        claims,
        auth,
        config,
    };

    // Public routes (no session required)
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/v1/auth/login", post(auth_handlers::login));

    // Claim routes
    let claim_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/", post(claims::submit_claim))
        .route("/:id/status", put(claims::review_claim));

    // Statistics routes
    let stats_routes = Router::new()
        .route("/", get(stats::global_stats))
        .route("/mine", get(stats::submitter_stats));

    // Protected API routes
    let api_routes = Router::new()
        .nest("/claims", claim_routes)
        .nest("/stats", stats_routes)
        .layer(axum_middleware::from_fn(request_log_middleware))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            session_middleware,
        ));

    // Combine all routes
    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
