//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the fields they care about.

use chrono::NaiveDate;
use core_kernel::{ClaimId, Money, UserId};
use domain_claims::claim::{Claim, ClaimDraft, ClaimStatus, ExpenseCategory, Submitter};
use domain_users::user::{Role, User};

use crate::fixtures::{AmountFixtures, DateFixtures, SubmitterFixtures};

/// Builder for constructing test claims and drafts
pub struct TestClaimBuilder {
    submitter: Submitter,
    service_date: NaiveDate,
    description: String,
    amount: Money,
    category: ExpenseCategory,
    status: ClaimStatus,
    submitted_date: NaiveDate,
    notes: Option<String>,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    /// Creates a builder with default values
    pub fn new() -> Self {
        Self {
            submitter: SubmitterFixtures::john(),
            service_date: DateFixtures::service_date(),
            description: "General Checkup".to_string(),
            amount: AmountFixtures::checkup(),
            category: ExpenseCategory::Consultation,
            status: ClaimStatus::Pending,
            submitted_date: DateFixtures::submitted_date(),
            notes: None,
        }
    }

    /// Sets the submitter
    pub fn with_submitter(mut self, submitter: Submitter) -> Self {
        self.submitter = submitter;
        self
    }

    /// Sets the service date
    pub fn with_service_date(mut self, date: NaiveDate) -> Self {
        self.service_date = date;
        self
    }

    /// Sets the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the amount
    pub fn with_amount(mut self, amount: Money) -> Self {
        self.amount = amount;
        self
    }

    /// Sets the amount from cents
    pub fn with_amount_cents(mut self, cents: u64) -> Self {
        self.amount = Money::from_cents(cents);
        self
    }

    /// Sets the category
    pub fn with_category(mut self, category: ExpenseCategory) -> Self {
        self.category = category;
        self
    }

    /// Sets the review status
    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the submitted date
    pub fn with_submitted_date(mut self, date: NaiveDate) -> Self {
        self.submitted_date = date;
        self
    }

    /// Sets the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds a draft carrying only the submission fields
    pub fn build_draft(&self) -> ClaimDraft {
        ClaimDraft {
            service_date: self.service_date,
            description: self.description.clone(),
            amount: self.amount,
            category: self.category,
            notes: self.notes.clone(),
        }
    }

    /// Builds a stored claim with a fresh id
    pub fn build(self) -> Claim {
        Claim {
            id: ClaimId::new_v7(),
            submitter: self.submitter,
            service_date: self.service_date,
            description: self.description,
            amount: self.amount,
            category: self.category,
            status: self.status,
            submitted_date: self.submitted_date,
            notes: self.notes,
        }
    }
}

/// Builder for constructing test users
pub struct TestUserBuilder {
    id: UserId,
    email: String,
    name: String,
    role: Role,
}

impl Default for TestUserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestUserBuilder {
    /// Creates a builder defaulting to an operator
    pub fn new() -> Self {
        Self {
            id: UserId::new_v7(),
            email: "test.operator@company.com".to_string(),
            name: "Test Operator".to_string(),
            role: Role::Operator,
        }
    }

    /// Sets the user id
    pub fn with_id(mut self, id: UserId) -> Self {
        self.id = id;
        self
    }

    /// Sets the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Sets the display name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the role
    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    /// Builds the user
    pub fn build(self) -> User {
        User {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role,
        }
    }
}
