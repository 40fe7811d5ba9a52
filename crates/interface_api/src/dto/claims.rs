//! Claim DTOs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use domain_claims::claim::{Claim, ClaimStatus, ExpenseCategory};
use domain_claims::filter::{ClaimFilter, StatusFilter};
use domain_claims::stats::ClaimStats;

/// Claim submission request
#[derive(Debug, Deserialize, Validate)]
pub struct SubmitClaimRequest {
    /// Date the expense was incurred
    pub service_date: NaiveDate,
    /// What the expense was for
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// Claimed amount
    pub amount: Decimal,
    /// Expense category
    pub category: ExpenseCategory,
    /// Optional free-form notes
    pub notes: Option<String>,
}

/// Review decision request
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub decision: ReviewDecision,
}

/// Terminal review decisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

impl From<ReviewDecision> for ClaimStatus {
    fn from(decision: ReviewDecision) -> Self {
        match decision {
            ReviewDecision::Approved => ClaimStatus::Approved,
            ReviewDecision::Rejected => ClaimStatus::Rejected,
        }
    }
}

/// Claim response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClaimResponse {
    pub id: Uuid,
    pub submitter_id: Uuid,
    pub submitter_name: String,
    pub submitter_email: String,
    pub service_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
    pub category: ExpenseCategory,
    pub status: ClaimStatus,
    pub submitted_date: NaiveDate,
    pub notes: Option<String>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: *claim.id.as_uuid(),
            submitter_id: *claim.submitter.id.as_uuid(),
            submitter_name: claim.submitter.name,
            submitter_email: claim.submitter.email,
            service_date: claim.service_date,
            description: claim.description,
            amount: claim.amount.amount(),
            category: claim.category,
            status: claim.status,
            submitted_date: claim.submitted_date,
            notes: claim.notes,
        }
    }
}

/// Claim listing query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ClaimListQuery {
    /// Case-insensitive search term
    pub search: Option<String>,
    /// Status selector
    pub status: Option<StatusFilter>,
}

impl ClaimListQuery {
    pub fn into_filter(self) -> ClaimFilter {
        ClaimFilter::new(self.search.unwrap_or_default(), self.status.unwrap_or_default())
    }
}

/// Portfolio-wide statistics response
#[derive(Debug, Serialize, Deserialize)]
pub struct GlobalStatsResponse {
    pub total_amount: Decimal,
    pub approved_amount: Decimal,
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub distinct_submitters: usize,
    pub total_claims: usize,
}

impl From<ClaimStats> for GlobalStatsResponse {
    fn from(stats: ClaimStats) -> Self {
        Self {
            total_amount: stats.total_amount.amount(),
            approved_amount: stats.approved_amount.amount(),
            pending_count: stats.pending_count,
            approved_count: stats.approved_count,
            rejected_count: stats.rejected_count,
            distinct_submitters: stats.distinct_submitters,
            total_claims: stats.total_claims,
        }
    }
}

/// Per-submitter statistics response
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitterStatsResponse {
    pub total_amount: Decimal,
    pub approved_amount: Decimal,
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub total_claims: usize,
}

impl From<ClaimStats> for SubmitterStatsResponse {
    fn from(stats: ClaimStats) -> Self {
        Self {
            total_amount: stats.total_amount.amount(),
            approved_amount: stats.approved_amount.amount(),
            pending_count: stats.pending_count,
            approved_count: stats.approved_count,
            rejected_count: stats.rejected_count,
            total_claims: stats.total_claims,
        }
    }
}
