//! Random Test Data Generation
//!
//! Fake-but-plausible values for tests that want variety rather than the
//! deterministic fixtures.

use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::Fake;

use core_kernel::{Money, UserId};
use domain_claims::claim::Submitter;

/// Generates a random person name
pub fn random_name() -> String {
    Name().fake()
}

/// Generates a random email address
pub fn random_email() -> String {
    SafeEmail().fake()
}

/// Generates a random claim description
pub fn random_description() -> String {
    Sentence(2..6).fake()
}

/// Generates a random amount below 10,000.00
pub fn random_amount() -> Money {
    Money::from_cents((0..1_000_000u64).fake())
}

/// Generates a submitter with random identity fields
pub fn random_submitter() -> Submitter {
    Submitter {
        id: UserId::new_v7(),
        name: random_name(),
        email: random_email(),
    }
}
