//! Claim list filtering
//!
//! Derives the visible subset of a claim list from a free-text search term
//! and a status selector, the way the dashboard narrows its table.

use serde::{Deserialize, Serialize};

use crate::claim::{Claim, ClaimStatus};

/// Status selector for list filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Admit every status
    #[default]
    All,
    Pending,
    Approved,
    Rejected,
}

impl StatusFilter {
    /// Returns true if the selector admits the given status
    pub fn admits(&self, status: ClaimStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status == ClaimStatus::Pending,
            StatusFilter::Approved => status == ClaimStatus::Approved,
            StatusFilter::Rejected => status == ClaimStatus::Rejected,
        }
    }
}

impl From<ClaimStatus> for StatusFilter {
    fn from(status: ClaimStatus) -> Self {
        match status {
            ClaimStatus::Pending => StatusFilter::Pending,
            ClaimStatus::Approved => StatusFilter::Approved,
            ClaimStatus::Rejected => StatusFilter::Rejected,
        }
    }
}

/// A search term plus status selector
///
/// The term matches case-insensitively as a plain substring of the
/// submitter name, submitter email, or description. An empty or
/// whitespace-only term matches everything.
#[derive(Debug, Clone, Default)]
pub struct ClaimFilter {
    pub term: String,
    pub status: StatusFilter,
}

impl ClaimFilter {
    /// Creates a filter from a term and status selector
    pub fn new(term: impl Into<String>, status: StatusFilter) -> Self {
        Self {
            term: term.into(),
            status,
        }
    }

    /// Returns true if the claim passes both the status selector and the
    /// search term
    pub fn matches(&self, claim: &Claim) -> bool {
        if !self.status.admits(claim.status) {
            return false;
        }

        let term = self.term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }

        claim.submitter.name.to_lowercase().contains(&term)
            || claim.submitter.email.to_lowercase().contains(&term)
            || claim.description.to_lowercase().contains(&term)
    }

    /// Narrows a claim list, preserving the relative order of the input
    pub fn apply(&self, claims: Vec<Claim>) -> Vec<Claim> {
        claims.into_iter().filter(|c| self.matches(c)).collect()
    }
}
