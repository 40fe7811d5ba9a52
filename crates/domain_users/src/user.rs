//! User accounts and roles

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::UserId;

/// Portal role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Reviews and approves/rejects claims submitted by any operator
    Admin,
    /// Submits claims for their own reimbursement
    Operator,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Admin => "admin",
            Role::Operator => "operator",
        };
        write!(f, "{s}")
    }
}

/// A known portal user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl User {
    /// Returns true if this user reviews claims
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
