//! Statistics handlers

use axum::{extract::State, Extension, Json};

use domain_claims::stats::ClaimStats;
use domain_users::session::SessionContext;
use domain_users::user::Role;

use crate::dto::claims::{GlobalStatsResponse, SubmitterStatsResponse};
use crate::error::ApiError;
use crate::AppState;

/// GET /api/v1/stats
pub async fn global_stats(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<GlobalStatsResponse>, ApiError> {
    session.require_role(Role::Admin)?;

    let claims = state.claims.list_all().await?;
    let stats = ClaimStats::compute(&claims);

    Ok(Json(GlobalStatsResponse::from(stats)))
}

/// GET /api/v1/stats/mine
pub async fn submitter_stats(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
) -> Result<Json<SubmitterStatsResponse>, ApiError> {
    session.require_role(Role::Operator)?;

    let claims = state.claims.list_by_submitter(session.user_id).await?;
    let stats = ClaimStats::compute(&claims);

    Ok(Json(SubmitterStatsResponse::from(stats)))
}
