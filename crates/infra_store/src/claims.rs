//! In-memory claim store

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::info;

use core_kernel::{ClaimId, DomainPort, PortError, UserId};
use domain_claims::claim::{Claim, ClaimDraft, ClaimStatus, Submitter};
use domain_claims::ports::ClaimRepository;

/// In-memory store for claim records
///
/// The RwLock serializes writers; every acknowledged mutation is visible to
/// subsequent reads. Claims are returned in insertion order, though display
/// ordering is not contractual.
#[derive(Debug, Default)]
pub struct MemoryClaimStore {
    claims: RwLock<Vec<Claim>>,
}

impl MemoryClaimStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self {
            claims: RwLock::new(Vec::new()),
        }
    }

    /// Creates a store pre-populated with the given claims
    pub fn with_claims(claims: Vec<Claim>) -> Self {
        Self {
            claims: RwLock::new(claims),
        }
    }

    /// Returns the number of stored claims
    pub async fn count(&self) -> usize {
        self.claims.read().await.len()
    }
}

impl DomainPort for MemoryClaimStore {}

#[async_trait]
impl ClaimRepository for MemoryClaimStore {
    async fn list_all(&self) -> Result<Vec<Claim>, PortError> {
        Ok(self.claims.read().await.clone())
    }

    async fn list_by_submitter(&self, submitter_id: UserId) -> Result<Vec<Claim>, PortError> {
        let claims = self.claims.read().await;
        Ok(claims
            .iter()
            .filter(|c| c.submitter.id == submitter_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, draft: ClaimDraft, submitter: Submitter) -> Result<Claim, PortError> {
        // Store clock: the submitted date is assigned here, once.
        let submitted_date = Utc::now().date_naive();
        let claim = Claim::submit(draft, submitter, submitted_date)
            .map_err(|e| PortError::validation(e.to_string()))?;

        let mut claims = self.claims.write().await;
        claims.push(claim.clone());

        info!(
            claim_id = %claim.id,
            submitter = %claim.submitter.id,
            amount = %claim.amount,
            "Claim stored"
        );

        Ok(claim)
    }

    async fn update_status(&self, id: ClaimId, status: ClaimStatus) -> Result<Claim, PortError> {
        let mut claims = self.claims.write().await;
        let claim = claims
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| PortError::not_found("Claim", id))?;

        let previous = claim.status;
        claim.set_status(status);

        info!(claim_id = %id, from = %previous, to = %status, "Claim status updated");

        Ok(claim.clone())
    }
}
