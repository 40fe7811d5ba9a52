//! Reimbursement Claims Domain
//!
//! This crate implements the claim lifecycle for the reimbursement portal:
//! an operator files a claim, an admin approves or rejects it.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Submitted (pending) -> Approved / Rejected
//! ```
//!
//! Reviews are permissive: an already-reviewed claim may be reviewed again.
//! Claims are never deleted.

pub mod claim;
pub mod error;
pub mod filter;
pub mod ports;
pub mod stats;

pub use claim::{Claim, ClaimDraft, ClaimStatus, ExpenseCategory, Submitter};
pub use error::ClaimError;
pub use filter::{ClaimFilter, StatusFilter};
pub use ports::ClaimRepository;
pub use stats::ClaimStats;
