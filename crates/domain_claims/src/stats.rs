//! Aggregate statistics over claim sets
//!
//! Dashboards show the same summary in two scopes: global for the admin
//! view, and narrowed to one submitter for the operator view. Both are
//! served by a single one-pass fold.

use std::collections::HashSet;

use serde::Serialize;

use core_kernel::Money;

use crate::claim::{Claim, ClaimStatus};

/// Summary statistics for a set of claims
///
/// `distinct_submitters` is only meaningful on the global scope; for a
/// per-submitter set it is 1 (or 0 when the set is empty).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimStats {
    pub total_amount: Money,
    pub approved_amount: Money,
    pub pending_count: usize,
    pub approved_count: usize,
    pub rejected_count: usize,
    pub distinct_submitters: usize,
    pub total_claims: usize,
}

impl ClaimStats {
    /// The all-zero statistics of an empty claim set
    pub fn empty() -> Self {
        Self {
            total_amount: Money::zero(),
            approved_amount: Money::zero(),
            pending_count: 0,
            approved_count: 0,
            rejected_count: 0,
            distinct_submitters: 0,
            total_claims: 0,
        }
    }

    /// Computes all statistics in a single traversal
    ///
    /// No ordering dependency; empty input yields [`ClaimStats::empty`].
    pub fn compute<'a, I>(claims: I) -> Self
    where
        I: IntoIterator<Item = &'a Claim>,
    {
        let mut stats = Self::empty();
        let mut submitters = HashSet::new();

        for claim in claims {
            stats.total_claims += 1;
            stats.total_amount = stats.total_amount + claim.amount;
            submitters.insert(claim.submitter.id);

            match claim.status {
                ClaimStatus::Pending => stats.pending_count += 1,
                ClaimStatus::Approved => {
                    stats.approved_count += 1;
                    stats.approved_amount = stats.approved_amount + claim.amount;
                }
                ClaimStatus::Rejected => stats.rejected_count += 1,
            }
        }

        stats.distinct_submitters = submitters.len();
        stats
    }
}

impl Default for ClaimStats {
    fn default() -> Self {
        Self::empty()
    }
}
