//! Custom Assertion Helpers
//!
//! Domain-aware assertions that keep test bodies short and failures
//! readable.

use core_kernel::{ClaimId, Money};
use domain_claims::claim::{Claim, ClaimStatus};
use domain_claims::stats::ClaimStats;

/// Asserts the internal consistency of a statistics summary:
/// status counts sum to the total, and the approved amount never exceeds
/// the total amount.
pub fn assert_stats_balanced(stats: &ClaimStats) {
    assert_eq!(
        stats.pending_count + stats.approved_count + stats.rejected_count,
        stats.total_claims,
        "status counts do not sum to total_claims"
    );
    assert!(
        stats.approved_amount <= stats.total_amount,
        "approved_amount {} exceeds total_amount {}",
        stats.approved_amount,
        stats.total_amount
    );
}

/// Asserts that a claim list contains a claim with the given id
pub fn assert_contains_claim(claims: &[Claim], id: ClaimId) {
    assert!(
        claims.iter().any(|c| c.id == id),
        "claim {id} not found in list of {} claims",
        claims.len()
    );
}

/// Asserts that every claim in a list carries the given status
pub fn assert_all_have_status(claims: &[Claim], status: ClaimStatus) {
    for claim in claims {
        assert_eq!(
            claim.status, status,
            "claim {} has status {}, expected {}",
            claim.id, claim.status, status
        );
    }
}

/// Asserts that the amounts of a claim list sum to the expected total
pub fn assert_total_amount(claims: &[Claim], expected: Money) {
    let total: Money = claims.iter().map(|c| c.amount).sum();
    assert_eq!(total, expected, "claim amounts sum to {total}, expected {expected}");
}
