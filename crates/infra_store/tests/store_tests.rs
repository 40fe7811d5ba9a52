//! Tests for the in-memory claim store and user directory

use chrono::Utc;
use rust_decimal_macros::dec;

use core_kernel::ClaimId;
use domain_claims::claim::ClaimStatus;
use domain_claims::ports::ClaimRepository;
use domain_claims::stats::ClaimStats;
use domain_users::ports::AuthProvider;
use domain_users::user::Role;
use infra_store::{seed, MemoryClaimStore, MemoryUserDirectory};
use test_utils::assertions::assert_stats_balanced;
use test_utils::builders::TestClaimBuilder;
use test_utils::fixtures::SubmitterFixtures;

mod insert_tests {
    use super::*;

    #[tokio::test]
    async fn insert_appends_exactly_one_claim() {
        let store = MemoryClaimStore::new();

        let claim = store
            .insert(TestClaimBuilder::new().build_draft(), SubmitterFixtures::john())
            .await
            .unwrap();

        assert_eq!(store.count().await, 1);
        assert_eq!(claim.status, ClaimStatus::Pending);
    }

    #[tokio::test]
    async fn insert_assigns_fresh_unique_ids() {
        let store = MemoryClaimStore::new();

        let a = store
            .insert(TestClaimBuilder::new().build_draft(), SubmitterFixtures::john())
            .await
            .unwrap();
        let b = store
            .insert(TestClaimBuilder::new().build_draft(), SubmitterFixtures::john())
            .await
            .unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.count().await, 2);
    }

    #[tokio::test]
    async fn insert_stamps_submitted_date_with_store_clock() {
        let store = MemoryClaimStore::new();

        let claim = store
            .insert(TestClaimBuilder::new().build_draft(), SubmitterFixtures::jane())
            .await
            .unwrap();

        assert_eq!(claim.submitted_date, Utc::now().date_naive());
    }

    #[tokio::test]
    async fn insert_rejects_empty_description() {
        let store = MemoryClaimStore::new();
        let draft = TestClaimBuilder::new().with_description("  ").build_draft();

        let result = store.insert(draft, SubmitterFixtures::john()).await;

        assert!(result.is_err());
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn insert_is_visible_to_subsequent_reads() {
        let store = MemoryClaimStore::new();
        let claim = store
            .insert(TestClaimBuilder::new().build_draft(), SubmitterFixtures::jane())
            .await
            .unwrap();

        let all = store.list_all().await.unwrap();
        assert!(all.iter().any(|c| c.id == claim.id));
    }
}

mod update_status_tests {
    use super::*;

    #[tokio::test]
    async fn unknown_id_yields_not_found_and_leaves_store_unchanged() {
        let store = MemoryClaimStore::with_claims(seed::demo_claims());
        let before = store.count().await;

        let result = store
            .update_status(ClaimId::new_v7(), ClaimStatus::Approved)
            .await;

        assert!(result.unwrap_err().is_not_found());
        assert_eq!(store.count().await, before);
    }

    #[tokio::test]
    async fn review_overwrites_status() {
        let store = MemoryClaimStore::with_claims(seed::demo_claims());

        let updated = store
            .update_status(seed::claim_id(1), ClaimStatus::Approved)
            .await
            .unwrap();

        assert_eq!(updated.status, ClaimStatus::Approved);

        let all = store.list_all().await.unwrap();
        let stored = all.iter().find(|c| c.id == seed::claim_id(1)).unwrap();
        assert_eq!(stored.status, ClaimStatus::Approved);
    }

    #[tokio::test]
    async fn approving_a_pending_claim_moves_its_amount_into_stats() {
        let store = MemoryClaimStore::with_claims(seed::demo_claims());

        let before = ClaimStats::compute(&store.list_all().await.unwrap());
        assert_eq!(before.approved_amount.amount(), dec!(120.00));

        store
            .update_status(seed::claim_id(1), ClaimStatus::Approved)
            .await
            .unwrap();

        let after = ClaimStats::compute(&store.list_all().await.unwrap());
        assert_eq!(after.approved_amount.amount(), dec!(270.00));
        assert_eq!(after.total_amount, before.total_amount);
        assert_stats_balanced(&after);
    }

    #[tokio::test]
    async fn review_may_be_flipped_later() {
        let store = MemoryClaimStore::with_claims(seed::demo_claims());

        store
            .update_status(seed::claim_id(2), ClaimStatus::Rejected)
            .await
            .unwrap();
        let updated = store
            .update_status(seed::claim_id(2), ClaimStatus::Approved)
            .await
            .unwrap();

        assert_eq!(updated.status, ClaimStatus::Approved);
    }
}

mod listing_tests {
    use super::*;

    #[tokio::test]
    async fn list_by_submitter_matches_exactly() {
        let store = MemoryClaimStore::with_claims(seed::demo_claims());

        let johns = store.list_by_submitter(seed::operator_id(1)).await.unwrap();
        assert_eq!(johns.len(), 2);
        assert!(johns.iter().all(|c| c.submitter.id == seed::operator_id(1)));

        let nobody = store.list_by_submitter(seed::admin_id()).await.unwrap();
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn seeded_store_has_expected_global_stats() {
        let store = MemoryClaimStore::with_claims(seed::demo_claims());
        let stats = ClaimStats::compute(&store.list_all().await.unwrap());

        assert_eq!(stats.total_amount.amount(), dec!(475.00));
        assert_eq!(stats.approved_amount.amount(), dec!(120.00));
        assert_eq!(stats.pending_count, 2);
        assert_eq!(stats.distinct_submitters, 3);
        assert_stats_balanced(&stats);
    }
}

mod directory_tests {
    use super::*;

    #[tokio::test]
    async fn verify_accepts_any_credential_for_known_email() {
        let directory = MemoryUserDirectory::new(seed::demo_users());

        let user = directory
            .verify("jane.smith@company.com", "anything-at-all")
            .await
            .unwrap();

        assert_eq!(user.name, "Jane Smith");
        assert_eq!(user.role, Role::Operator);
    }

    #[tokio::test]
    async fn verify_rejects_unknown_email() {
        let directory = MemoryUserDirectory::new(seed::demo_users());

        let result = directory.verify("nobody@company.com", "pw").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn email_match_is_case_sensitive() {
        let directory = MemoryUserDirectory::new(seed::demo_users());

        let result = directory.verify("Jane.Smith@company.com", "pw").await;
        assert!(result.is_err());
    }
}
