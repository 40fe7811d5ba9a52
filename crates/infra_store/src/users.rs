//! In-memory user directory

use async_trait::async_trait;
use tracing::warn;

use core_kernel::DomainPort;
use domain_users::error::AuthError;
use domain_users::ports::AuthProvider;
use domain_users::user::User;

/// Fixed directory of known users
///
/// Verifies logins by exact email match. The credential is accepted
/// unchecked: this directory is a stand-in until a real identity provider
/// implements [`AuthProvider`].
#[derive(Debug, Clone, Default)]
pub struct MemoryUserDirectory {
    users: Vec<User>,
}

impl MemoryUserDirectory {
    /// Creates a directory over the given users
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Looks up a user by exact (case-sensitive) email
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email == email)
    }
}

impl DomainPort for MemoryUserDirectory {}

#[async_trait]
impl AuthProvider for MemoryUserDirectory {
    async fn verify(&self, email: &str, _credential: &str) -> Result<User, AuthError> {
        match self.find_by_email(email) {
            Some(user) => Ok(user.clone()),
            None => {
                warn!(email, "Login attempt for unknown email");
                Err(AuthError::UnknownUser(email.to_string()))
            }
        }
    }
}
