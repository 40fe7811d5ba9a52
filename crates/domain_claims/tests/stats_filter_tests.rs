//! Tests for aggregate statistics and list filtering

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use core_kernel::{Money, UserId};
use domain_claims::claim::{Claim, ClaimDraft, ClaimStatus, ExpenseCategory, Submitter};
use domain_claims::filter::{ClaimFilter, StatusFilter};
use domain_claims::stats::ClaimStats;

fn submitter(seed: u128, name: &str, email: &str) -> Submitter {
    Submitter {
        id: UserId::from_uuid(uuid::Uuid::from_u128(seed)),
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn claim(submitter: Submitter, description: &str, cents: u64, status: ClaimStatus) -> Claim {
    let draft = ClaimDraft {
        service_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
        description: description.to_string(),
        amount: Money::from_cents(cents),
        category: ExpenseCategory::Consultation,
        notes: None,
    };
    let mut claim = Claim::submit(draft, submitter, NaiveDate::from_ymd_opt(2024, 1, 16).unwrap())
        .unwrap();
    claim.set_status(status);
    claim
}

fn john() -> Submitter {
    submitter(1, "John Doe", "john.doe@company.com")
}

fn jane() -> Submitter {
    submitter(2, "Jane Smith", "jane.smith@company.com")
}

/// The two-claim scenario from the dashboard: 150 pending by one operator,
/// 75 approved by another.
fn scenario_claims() -> Vec<Claim> {
    vec![
        claim(john(), "General Checkup", 15000, ClaimStatus::Pending),
        claim(jane(), "Blood Test", 7500, ClaimStatus::Approved),
    ]
}

mod stats_tests {
    use super::*;

    #[test]
    fn test_empty_input_yields_all_zeros() {
        let stats = ClaimStats::compute(&[]);
        assert_eq!(stats, ClaimStats::empty());
        assert!(stats.total_amount.is_zero());
        assert_eq!(stats.total_claims, 0);
        assert_eq!(stats.distinct_submitters, 0);
    }

    #[test]
    fn test_global_stats_scenario() {
        let claims = scenario_claims();
        let stats = ClaimStats::compute(&claims);

        assert_eq!(stats.total_amount.amount(), dec!(225.00));
        assert_eq!(stats.approved_amount.amount(), dec!(75.00));
        assert_eq!(stats.pending_count, 1);
        assert_eq!(stats.distinct_submitters, 2);
    }

    #[test]
    fn test_approving_a_claim_moves_its_amount() {
        let mut claims = scenario_claims();
        claims[0].set_status(ClaimStatus::Approved);

        let stats = ClaimStats::compute(&claims);
        assert_eq!(stats.approved_amount.amount(), dec!(225.00));
        assert_eq!(stats.pending_count, 0);
    }

    #[test]
    fn test_distinct_submitters_dedupes() {
        let claims = vec![
            claim(john(), "Checkup", 10000, ClaimStatus::Pending),
            claim(john(), "Prescription", 4500, ClaimStatus::Approved),
            claim(jane(), "Eye Examination", 8500, ClaimStatus::Rejected),
        ];

        let stats = ClaimStats::compute(&claims);
        assert_eq!(stats.distinct_submitters, 2);
        assert_eq!(stats.total_claims, 3);
    }

    #[test]
    fn test_stats_ignore_input_order() {
        let mut claims = scenario_claims();
        let forward = ClaimStats::compute(&claims);
        claims.reverse();
        let backward = ClaimStats::compute(&claims);

        assert_eq!(forward, backward);
    }
}

mod filter_tests {
    use super::*;

    #[test]
    fn test_empty_filter_is_identity() {
        let claims = scenario_claims();
        let ids: Vec<_> = claims.iter().map(|c| c.id).collect();

        let filtered = ClaimFilter::default().apply(claims);
        let filtered_ids: Vec<_> = filtered.iter().map(|c| c.id).collect();

        assert_eq!(filtered_ids, ids);
    }

    #[test]
    fn test_term_matches_submitter_name() {
        let claims = scenario_claims();
        let filtered = ClaimFilter::new("jane", StatusFilter::All).apply(claims);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].submitter.name, "Jane Smith");
    }

    #[test]
    fn test_term_matches_email_and_description() {
        let claims = scenario_claims();

        let by_email = ClaimFilter::new("JOHN.DOE@", StatusFilter::All).apply(claims.clone());
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].submitter.name, "John Doe");

        let by_description = ClaimFilter::new("blood", StatusFilter::All).apply(claims);
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].description, "Blood Test");
    }

    #[test]
    fn test_status_selector() {
        let claims = scenario_claims();

        let pending = ClaimFilter::new("", StatusFilter::Pending).apply(claims.clone());
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].status, ClaimStatus::Pending);

        let rejected = ClaimFilter::new("", StatusFilter::Rejected).apply(claims);
        assert!(rejected.is_empty());
    }

    #[test]
    fn test_term_and_status_combine() {
        let claims = scenario_claims();
        let filtered = ClaimFilter::new("jane", StatusFilter::Pending).apply(claims);

        // Jane's claim is approved, so the combination excludes it.
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_whitespace_term_matches_everything() {
        let claims = scenario_claims();
        let filtered = ClaimFilter::new("  ", StatusFilter::All).apply(claims);
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_preserves_order() {
        let claims = vec![
            claim(john(), "Checkup A", 100, ClaimStatus::Pending),
            claim(jane(), "Blood Test", 200, ClaimStatus::Pending),
            claim(john(), "Checkup B", 300, ClaimStatus::Pending),
        ];

        let filtered = ClaimFilter::new("checkup", StatusFilter::All).apply(claims);
        let descriptions: Vec<_> = filtered.iter().map(|c| c.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Checkup A", "Checkup B"]);
    }
}

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_status() -> impl Strategy<Value = ClaimStatus> {
        prop_oneof![
            Just(ClaimStatus::Pending),
            Just(ClaimStatus::Approved),
            Just(ClaimStatus::Rejected),
        ]
    }

    fn arb_claims() -> impl Strategy<Value = Vec<Claim>> {
        proptest::collection::vec(
            (0u128..4, 0u64..1_000_000, arb_status(), "[a-z]{1,12}"),
            0..40,
        )
        .prop_map(|rows| {
            rows.into_iter()
                .map(|(seed, cents, status, description)| {
                    let submitter = submitter(
                        seed + 1,
                        &format!("Operator {seed}"),
                        &format!("op{seed}@company.com"),
                    );
                    claim(submitter, &description, cents, status)
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn total_amount_decomposes_by_status(claims in arb_claims()) {
            let stats = ClaimStats::compute(&claims);

            let unapproved: Money = claims
                .iter()
                .filter(|c| c.status != ClaimStatus::Approved)
                .map(|c| c.amount)
                .sum();

            prop_assert_eq!(stats.total_amount, stats.approved_amount + unapproved);
        }

        #[test]
        fn status_counts_sum_to_total(claims in arb_claims()) {
            let stats = ClaimStats::compute(&claims);
            prop_assert_eq!(
                stats.pending_count + stats.approved_count + stats.rejected_count,
                stats.total_claims
            );
            prop_assert_eq!(stats.total_claims, claims.len());
        }

        #[test]
        fn empty_filter_identity_law(claims in arb_claims()) {
            let ids: Vec<_> = claims.iter().map(|c| c.id).collect();
            let filtered = ClaimFilter::new("", StatusFilter::All).apply(claims);
            let filtered_ids: Vec<_> = filtered.iter().map(|c| c.id).collect();
            prop_assert_eq!(filtered_ids, ids);
        }

        #[test]
        fn filtering_is_idempotent(claims in arb_claims(), term in "[a-z]{0,4}", status in prop_oneof![
            Just(StatusFilter::All),
            Just(StatusFilter::Pending),
            Just(StatusFilter::Approved),
            Just(StatusFilter::Rejected),
        ]) {
            let filter = ClaimFilter::new(term, status);
            let once = filter.apply(claims);
            let once_ids: Vec<_> = once.iter().map(|c| c.id).collect();
            let twice = filter.apply(once);
            let twice_ids: Vec<_> = twice.iter().map(|c| c.id).collect();
            prop_assert_eq!(once_ids, twice_ids);
        }
    }
}
