//! In-Memory Storage Adapters
//!
//! This crate provides the storage layer for the reimbursement portal.
//! There is no database: claims live in a `Vec` behind a `tokio` RwLock and
//! users in a fixed directory, both implementing the domain ports so a
//! persistent backend can replace them later.

pub mod claims;
pub mod seed;
pub mod users;

pub use claims::MemoryClaimStore;
pub use users::MemoryUserDirectory;
