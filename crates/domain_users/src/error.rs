//! Authentication errors

use thiserror::Error;

use crate::user::Role;

/// Errors raised during login and role checks
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// No user with the given email is known
    #[error("Unknown user: {0}")]
    UnknownUser(String),

    /// The user exists but does not carry the role the caller expects
    #[error("Role mismatch: expected {expected}, got {actual}")]
    RoleMismatch { expected: Role, actual: Role },

    /// The presented session token could not be validated
    #[error("Invalid session")]
    InvalidSession,
}
