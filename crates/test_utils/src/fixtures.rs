//! Pre-built Test Fixtures
//!
//! Ready-to-use test data for common entities. These fixtures are
//! deterministic so tests can refer to the same records across runs.

use chrono::NaiveDate;
use core_kernel::{ClaimId, Money, UserId};
use domain_claims::claim::Submitter;
use domain_users::user::{Role, User};
use uuid::Uuid;

/// Fixture for monetary amounts
pub struct AmountFixtures;

impl AmountFixtures {
    /// A standard consultation amount (150.00)
    pub fn checkup() -> Money {
        Money::from_cents(15000)
    }

    /// A standard lab amount (75.00)
    pub fn blood_test() -> Money {
        Money::from_cents(7500)
    }

    /// A zero amount
    pub fn zero() -> Money {
        Money::zero()
    }
}

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// Standard service date (Jan 15, 2024)
    pub fn service_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    /// Standard submitted date (Jan 16, 2024)
    pub fn submitted_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 16).unwrap()
    }
}

/// Fixture for identifiers
pub struct IdFixtures;

impl IdFixtures {
    /// A deterministic claim id
    pub fn claim_id() -> ClaimId {
        ClaimId::from_uuid(Uuid::from_u128(0xC1A1))
    }

    /// A deterministic user id
    pub fn user_id() -> UserId {
        UserId::from_uuid(Uuid::from_u128(0xF001))
    }
}

/// Fixture for portal users
pub struct UserFixtures;

impl UserFixtures {
    /// The reviewing admin
    pub fn admin() -> User {
        User {
            id: UserId::from_uuid(Uuid::from_u128(0xAD)),
            email: "admin@company.com".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
        }
    }

    /// First operator
    pub fn john() -> User {
        User {
            id: UserId::from_uuid(Uuid::from_u128(1)),
            email: "john.doe@company.com".to_string(),
            name: "John Doe".to_string(),
            role: Role::Operator,
        }
    }

    /// Second operator
    pub fn jane() -> User {
        User {
            id: UserId::from_uuid(Uuid::from_u128(2)),
            email: "jane.smith@company.com".to_string(),
            name: "Jane Smith".to_string(),
            role: Role::Operator,
        }
    }
}

/// Fixture for claim submitters
pub struct SubmitterFixtures;

impl SubmitterFixtures {
    fn from_user(user: User) -> Submitter {
        Submitter {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }

    /// Submitter stamp of the first operator
    pub fn john() -> Submitter {
        Self::from_user(UserFixtures::john())
    }

    /// Submitter stamp of the second operator
    pub fn jane() -> Submitter {
        Self::from_user(UserFixtures::jane())
    }
}
