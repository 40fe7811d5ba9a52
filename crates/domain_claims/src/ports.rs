//! Claim repository port
//!
//! The store behind this trait is in-memory today; the trait is the seam a
//! persistent backend would implement instead.

use async_trait::async_trait;

use core_kernel::{ClaimId, DomainPort, PortError, UserId};

use crate::claim::{Claim, ClaimDraft, ClaimStatus, Submitter};

/// Repository for claim records
///
/// All mutations are visible to subsequent reads immediately. Display
/// ordering of the returned lists is not contractual.
#[async_trait]
pub trait ClaimRepository: DomainPort {
    /// Returns every claim
    async fn list_all(&self) -> Result<Vec<Claim>, PortError>;

    /// Returns claims whose submitter id matches exactly
    async fn list_by_submitter(&self, submitter_id: UserId) -> Result<Vec<Claim>, PortError>;

    /// Validates and stores a new claim
    ///
    /// Assigns a fresh identifier and the current date as the submitted
    /// date, and returns the stored record.
    async fn insert(&self, draft: ClaimDraft, submitter: Submitter) -> Result<Claim, PortError>;

    /// Overwrites the status of an existing claim
    ///
    /// Unknown identifiers yield `PortError::NotFound` and leave the store
    /// unchanged.
    async fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<Claim, PortError>;
}
