//! Claim aggregate

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{ClaimId, Money, UserId};

use crate::error::ClaimError;

/// Review status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimStatus {
    /// Submitted, awaiting review
    Pending,
    /// Approved for reimbursement
    Approved,
    /// Rejected by a reviewer
    Rejected,
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClaimStatus::Pending => "pending",
            ClaimStatus::Approved => "approved",
            ClaimStatus::Rejected => "rejected",
        };
        write!(f, "{s}")
    }
}

/// Category of the underlying medical service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpenseCategory {
    Consultation,
    Laboratory,
    Pharmacy,
    Imaging,
    Surgery,
    Emergency,
    Dental,
    Vision,
    Other,
}

/// The operator a claim was filed by
///
/// Stamped onto the claim at submission from the caller's session and
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submitter {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// The fields an operator provides when filing a claim
///
/// Identifier, status, and submitted date are assigned by the store at
/// insertion, not by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClaimDraft {
    pub service_date: NaiveDate,
    pub description: String,
    pub amount: Money,
    pub category: ExpenseCategory,
    pub notes: Option<String>,
}

impl ClaimDraft {
    /// Builds a draft from raw fields, validating the amount and the
    /// required text fields
    pub fn new(
        service_date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        category: ExpenseCategory,
        notes: Option<String>,
    ) -> Result<Self, ClaimError> {
        let draft = Self {
            service_date,
            description: description.into(),
            amount: Money::new(amount)?,
            category,
            notes,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Checks the required-field invariants
    pub fn validate(&self) -> Result<(), ClaimError> {
        if self.description.trim().is_empty() {
            return Err(ClaimError::MissingField("description"));
        }
        Ok(())
    }
}

/// A medical expense reimbursement claim
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier, assigned at insertion
    pub id: ClaimId,
    /// Who filed the claim
    pub submitter: Submitter,
    /// Date of the medical service
    pub service_date: NaiveDate,
    /// Free-text description of the service
    pub description: String,
    /// Claimed amount, non-negative
    pub amount: Money,
    /// Service category
    pub category: ExpenseCategory,
    /// Review status
    pub status: ClaimStatus,
    /// Date the claim entered the store, never recomputed
    pub submitted_date: NaiveDate,
    /// Optional submitter notes
    pub notes: Option<String>,
}

impl Claim {
    /// Creates a pending claim from a draft
    ///
    /// `submitted_date` is the store clock at insertion time.
    pub fn submit(
        draft: ClaimDraft,
        submitter: Submitter,
        submitted_date: NaiveDate,
    ) -> Result<Self, ClaimError> {
        draft.validate()?;

        Ok(Self {
            id: ClaimId::new_v7(),
            submitter,
            service_date: draft.service_date,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
            status: ClaimStatus::Pending,
            submitted_date,
            notes: draft.notes,
        })
    }

    /// Overwrites the review status
    ///
    /// Transitions are permissive: an approved or rejected claim may be
    /// reviewed again. Callers log the acting reviewer.
    pub fn set_status(&mut self, status: ClaimStatus) {
        self.status = status;
    }

    /// Returns true if the claim is awaiting review
    pub fn is_pending(&self) -> bool {
        self.status == ClaimStatus::Pending
    }
}
