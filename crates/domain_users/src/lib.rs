//! Users and Sessions Domain
//!
//! Two roles use the portal: operators submit claims for their own
//! reimbursement, admins review them. Access to each surface is gated by an
//! explicit [`SessionContext`] produced at login and threaded into every
//! call; nothing reads ambient process-wide session state.
//!
//! Credential verification sits behind the [`AuthProvider`] trait so the
//! in-memory directory can be swapped for a real identity provider without
//! touching the rest of the system.

pub mod error;
pub mod ports;
pub mod session;
pub mod user;

pub use error::AuthError;
pub use ports::AuthProvider;
pub use session::SessionContext;
pub use user::{Role, User};
