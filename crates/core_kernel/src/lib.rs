//! Core Kernel - Foundational types for the reimbursement system
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money with precise decimal arithmetic and a non-negative invariant
//! - Strongly-typed identifiers
//! - Port infrastructure shared by repository and capability traits

pub mod identifiers;
pub mod money;
pub mod ports;

pub use identifiers::{ClaimId, UserId};
pub use money::{Money, MoneyError};
pub use ports::{DomainPort, PortError};
