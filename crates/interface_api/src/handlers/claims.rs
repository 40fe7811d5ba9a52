//! Claim handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use core_kernel::ClaimId;
use domain_claims::claim::{ClaimDraft, Submitter};
use domain_users::session::SessionContext;
use domain_users::user::Role;

use crate::dto::claims::{ClaimListQuery, ClaimResponse, ReviewRequest, SubmitClaimRequest};
use crate::error::ApiError;
use crate::AppState;

/// GET /api/v1/claims
///
/// Admins see the whole portfolio; operators see only their own claims.
/// Both views accept the same search and status query parameters.
pub async fn list_claims(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Query(query): Query<ClaimListQuery>,
) -> Result<Json<Vec<ClaimResponse>>, ApiError> {
    let claims = match session.role {
        Role::Admin => state.claims.list_all().await?,
        Role::Operator => state.claims.list_by_submitter(session.user_id).await?,
    };

    let filter = query.into_filter();
    let claims = filter.apply(claims);

    Ok(Json(claims.into_iter().map(ClaimResponse::from).collect()))
}

/// POST /api/v1/claims
pub async fn submit_claim(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Json(request): Json<SubmitClaimRequest>,
) -> Result<(StatusCode, Json<ClaimResponse>), ApiError> {
    session.require_role(Role::Operator)?;
    request
        .validate()
        .map_err(|e| ApiError::Validation(e.to_string()))?;

    let draft = ClaimDraft::new(
        request.service_date,
        request.description,
        request.amount,
        request.category,
        request.notes,
    )?;

    let submitter = Submitter {
        id: session.user_id,
        name: session.name.clone(),
        email: session.email.clone(),
    };

    let claim = state.claims.insert(draft, submitter).await?;

    info!(claim_id = %claim.id, submitter = %session.user_id, "Claim submitted");

    Ok((StatusCode::CREATED, Json(ClaimResponse::from(claim))))
}

/// PUT /api/v1/claims/:id/status
pub async fn review_claim(
    State(state): State<AppState>,
    Extension(session): Extension<SessionContext>,
    Path(id): Path<Uuid>,
    Json(request): Json<ReviewRequest>,
) -> Result<Json<ClaimResponse>, ApiError> {
    session.require_role(Role::Admin)?;

    let claim = state
        .claims
        .update_status(ClaimId::from(id), request.decision.into())
        .await?;

    info!(
        claim_id = %claim.id,
        decision = ?request.decision,
        reviewer = %session.user_id,
        "Claim reviewed"
    );

    Ok(Json(ClaimResponse::from(claim)))
}
