//! Deterministic seed data
//!
//! The portal ships with a small demo dataset: one admin, three operators,
//! and five claims across them. Identifiers are fixed `from_u128` UUIDs so
//! tests and demos can refer to the same records across runs.

use chrono::NaiveDate;
use uuid::Uuid;

use core_kernel::{ClaimId, Money, UserId};
use domain_claims::claim::{Claim, ClaimStatus, ExpenseCategory, Submitter};
use domain_users::user::{Role, User};

/// Fixed id of the seeded admin
pub fn admin_id() -> UserId {
    UserId::from_uuid(Uuid::from_u128(0xAD))
}

/// Fixed id of the n-th seeded operator (1-based)
pub fn operator_id(n: u128) -> UserId {
    UserId::from_uuid(Uuid::from_u128(n))
}

/// The demo user directory: one admin and three operators
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: admin_id(),
            email: "admin@company.com".to_string(),
            name: "Admin User".to_string(),
            role: Role::Admin,
        },
        User {
            id: operator_id(1),
            email: "john.doe@company.com".to_string(),
            name: "John Doe".to_string(),
            role: Role::Operator,
        },
        User {
            id: operator_id(2),
            email: "jane.smith@company.com".to_string(),
            name: "Jane Smith".to_string(),
            role: Role::Operator,
        },
        User {
            id: operator_id(3),
            email: "mike.johnson@company.com".to_string(),
            name: "Mike Johnson".to_string(),
            role: Role::Operator,
        },
    ]
}

/// The demo claim set: five claims over the three operators
///
/// Totals: 475.00 claimed, 120.00 approved, 2 pending, 3 distinct
/// submitters.
pub fn demo_claims() -> Vec<Claim> {
    let users = demo_users();
    let submitter = |n: usize| Submitter {
        id: users[n].id,
        name: users[n].name.clone(),
        email: users[n].email.clone(),
    };

    vec![
        Claim {
            id: claim_id(1),
            submitter: submitter(1),
            service_date: date(2024, 1, 15),
            description: "General Checkup".to_string(),
            amount: Money::from_cents(15000),
            category: ExpenseCategory::Consultation,
            status: ClaimStatus::Pending,
            submitted_date: date(2024, 1, 16),
            notes: Some("Annual health checkup".to_string()),
        },
        Claim {
            id: claim_id(2),
            submitter: submitter(2),
            service_date: date(2024, 1, 20),
            description: "Blood Test".to_string(),
            amount: Money::from_cents(7500),
            category: ExpenseCategory::Laboratory,
            status: ClaimStatus::Approved,
            submitted_date: date(2024, 1, 21),
            notes: None,
        },
        Claim {
            id: claim_id(3),
            submitter: submitter(1),
            service_date: date(2024, 1, 25),
            description: "Prescription Medication".to_string(),
            amount: Money::from_cents(4500),
            category: ExpenseCategory::Pharmacy,
            status: ClaimStatus::Approved,
            submitted_date: date(2024, 1, 26),
            notes: None,
        },
        Claim {
            id: claim_id(4),
            submitter: submitter(3),
            service_date: date(2024, 1, 28),
            description: "Dental Cleaning".to_string(),
            amount: Money::from_cents(12000),
            category: ExpenseCategory::Dental,
            status: ClaimStatus::Pending,
            submitted_date: date(2024, 1, 29),
            notes: None,
        },
        Claim {
            id: claim_id(5),
            submitter: submitter(2),
            service_date: date(2024, 2, 1),
            description: "Eye Examination".to_string(),
            amount: Money::from_cents(8500),
            category: ExpenseCategory::Vision,
            status: ClaimStatus::Rejected,
            submitted_date: date(2024, 2, 2),
            notes: None,
        },
    ]
}

/// Fixed id of the n-th seeded claim (1-based)
pub fn claim_id(n: u128) -> ClaimId {
    ClaimId::from_uuid(Uuid::from_u128(0x1000 + n))
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_users_have_unique_ids() {
        let users = demo_users();
        for (i, a) in users.iter().enumerate() {
            for b in &users[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn test_demo_claims_reference_demo_users() {
        let users = demo_users();
        for claim in demo_claims() {
            assert!(users.iter().any(|u| u.id == claim.submitter.id));
        }
    }

    #[test]
    fn test_demo_claims_are_deterministic() {
        let a = demo_claims();
        let b = demo_claims();
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.amount, y.amount);
        }
    }
}
