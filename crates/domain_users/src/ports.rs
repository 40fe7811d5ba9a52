//! Auth provider port

use async_trait::async_trait;

use core_kernel::DomainPort;

use crate::error::AuthError;
use crate::user::User;

/// Capability for verifying a login attempt
///
/// The in-memory directory accepts any credential for a known email; a real
/// identity provider implements this same trait, leaving callers unchanged.
#[async_trait]
pub trait AuthProvider: DomainPort {
    /// Verifies a credential for the given email
    ///
    /// Unknown emails yield `AuthError::UnknownUser`.
    async fn verify(&self, email: &str, credential: &str) -> Result<User, AuthError>;
}
