//! Explicit session context
//!
//! A session is produced once at login and threaded explicitly into every
//! dashboard or query call. Handlers receive it as a value, never by reading
//! implicit global state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::UserId;

use crate::error::AuthError;
use crate::user::{Role, User};

/// The authenticated identity behind a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    pub user_id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub issued_at: DateTime<Utc>,
}

impl SessionContext {
    /// Opens a session for a verified user
    pub fn open(user: &User, issued_at: DateTime<Utc>) -> Self {
        Self {
            user_id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
            issued_at,
        }
    }

    /// Fails with `AuthError::RoleMismatch` unless the session carries the
    /// required role
    pub fn require_role(&self, required: Role) -> Result<(), AuthError> {
        if self.role == required {
            Ok(())
        } else {
            Err(AuthError::RoleMismatch {
                expected: required,
                actual: self.role,
            })
        }
    }
}
