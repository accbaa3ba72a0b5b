//! Integration tests for the unified mutation view builder.

mod common;

use backoffice_service::models::MutationKind;
use backoffice_service::mutations::{build_mutations, DateRange};
use common::*;
use uuid::Uuid;

fn date_range(start: &str, finish: &str) -> DateRange {
    DateRange::new(start.parse().unwrap(), finish.parse().unwrap())
}

#[tokio::test]
async fn mixed_categories_number_by_click_time() {
    init_tracing();
    let bank_a = bank("BCA");
    let bank_b = bank("BNI");

    let source = MemorySource {
        deposits: vec![deposit(bank_a.bank_id, "2024-03-05T03:00:00Z", 100)],
        withdrawals: vec![withdrawal(bank_a.bank_id, "2024-03-05T03:00:01Z", 50)],
        transfers: vec![transfer(
            bank_a.bank_id,
            bank_b.bank_id,
            "2024-03-05T03:00:02Z",
            30,
        )],
        banks: vec![bank_a.clone(), bank_b.clone()],
        ..Default::default()
    };

    let rows = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("build should succeed");

    assert_eq!(rows.len(), 4);
    // Display order is descending sequence: the transfer pair first, then the
    // withdrawal, then the deposit.
    assert_eq!(
        rows.iter().map(|r| r.display_sequence).collect::<Vec<_>>(),
        vec![4, 3, 2, 1]
    );
    assert_eq!(rows[0].kind, MutationKind::Transfer);
    assert_eq!(rows[1].kind, MutationKind::Transfer);
    assert_eq!(rows[2].kind, MutationKind::Withdrawal);
    assert_eq!(rows[2].amount, dec(-50));
    assert_eq!(rows[3].kind, MutationKind::Deposit);
    assert_eq!(rows[3].amount, dec(100));
}

#[tokio::test]
async fn sequences_form_a_dense_permutation() {
    init_tracing();
    let bank_a = bank("BCA");
    let bank_b = bank("BRI");

    let source = MemorySource {
        deposits: vec![
            deposit(bank_a.bank_id, "2024-03-05T01:00:00Z", 10),
            deposit(bank_a.bank_id, "2024-03-05T07:00:00Z", 20),
        ],
        withdrawals: vec![withdrawal(bank_a.bank_id, "2024-03-05T02:00:00Z", 5)],
        pending_deposits: vec![pending_deposit(bank_b.bank_id, "2024-03-05T03:00:00Z", 7)],
        adjustments: vec![adjustment(bank_b.bank_id, "2024-03-05T04:00:00Z", -3)],
        expenses: vec![expense(bank_a.bank_id, "2024-03-05T05:00:00Z", -2)],
        transfers: vec![
            transfer(bank_a.bank_id, bank_b.bank_id, "2024-03-05T06:00:00Z", 30),
            transfer(bank_b.bank_id, bank_a.bank_id, "2024-03-05T08:00:00Z", 40),
        ],
        banks: vec![bank_a, bank_b],
        ..Default::default()
    };

    let rows = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("build should succeed");

    // Transfers count double.
    assert_eq!(rows.len(), 10);

    let mut sequences: Vec<i64> = rows.iter().map(|r| r.display_sequence).collect();
    sequences.sort_unstable();
    assert_eq!(sequences, (1..=10).collect::<Vec<_>>());

    // Ascending sequence implies non-decreasing click time.
    let mut ascending = rows.clone();
    ascending.sort_by_key(|r| r.display_sequence);
    for pair in ascending.windows(2) {
        assert!(pair[0].click_time <= pair[1].click_time);
    }
}

#[tokio::test]
async fn transfer_expands_into_balanced_pair() {
    init_tracing();
    let bank_a = bank("BCA");
    let bank_b = bank("BNI");

    let source = MemorySource {
        transfers: vec![transfer(
            bank_a.bank_id,
            bank_b.bank_id,
            "2024-03-05T03:00:00Z",
            75,
        )],
        banks: vec![bank_a.clone(), bank_b.clone()],
        ..Default::default()
    };

    let rows = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("build should succeed");

    assert_eq!(rows.len(), 2);
    let credit = rows
        .iter()
        .find(|r| r.bank_id == bank_b.bank_id)
        .expect("credit row");
    let debit = rows
        .iter()
        .find(|r| r.bank_id == bank_a.bank_id)
        .expect("debit row");

    assert_eq!(debit.amount, dec(-75));
    assert_eq!(credit.amount, dec(75));
    assert_eq!(debit.amount, -credit.amount);
    assert_eq!(debit.click_time, credit.click_time);
    assert_eq!(debit.description, credit.description);
    assert_eq!(debit.chosen_time_top, credit.chosen_time_top);
    assert_eq!(debit.chosen_time_bottom, credit.chosen_time_bottom);
    // Both rows carry a sequence from the shared tie; together they hold 1
    // and 2.
    let mut pair: Vec<i64> = rows.iter().map(|r| r.display_sequence).collect();
    pair.sort_unstable();
    assert_eq!(pair, vec![1, 2]);
}

#[tokio::test]
async fn build_is_idempotent_against_unchanged_store() {
    init_tracing();
    let bank_a = bank("BCA");
    let bank_b = bank("BNI");

    let source = MemorySource {
        deposits: vec![deposit(bank_a.bank_id, "2024-03-05T01:00:00Z", 10)],
        expenses: vec![expense(bank_a.bank_id, "2024-03-05T02:00:00Z", -4)],
        transfers: vec![transfer(
            bank_a.bank_id,
            bank_b.bank_id,
            "2024-03-05T03:00:00Z",
            30,
        )],
        banks: vec![bank_a, bank_b],
        ..Default::default()
    };

    let range = Some(date_range("2024-03-05", "2024-03-05"));
    let first = build_mutations(&source, Uuid::new_v4(), range, TEST_TIMEOUT)
        .await
        .expect("first build");
    let second = build_mutations(&source, Uuid::new_v4(), range, TEST_TIMEOUT)
        .await
        .expect("second build");

    assert_eq!(first, second);
}

#[tokio::test]
async fn window_edges_are_inclusive_to_the_millisecond() {
    init_tracing();
    let bank_a = bank("BCA");

    // 2024-03-05 in UTC+7 spans [2024-03-04T17:00:00.000Z, 2024-03-05T16:59:59.999Z].
    let lower = "2024-03-04T17:00:00.000Z";
    let upper = "2024-03-05T16:59:59.999Z";
    let before = "2024-03-04T16:59:59.999Z";
    let after = "2024-03-05T17:00:00.000Z";

    let source = MemorySource {
        deposits: vec![
            deposit(bank_a.bank_id, lower, 1),
            deposit(bank_a.bank_id, upper, 2),
            deposit(bank_a.bank_id, before, 3),
            deposit(bank_a.bank_id, after, 4),
        ],
        banks: vec![bank_a],
        ..Default::default()
    };

    let rows = build_mutations(
        &source,
        Uuid::new_v4(),
        Some(date_range("2024-03-05", "2024-03-05")),
        TEST_TIMEOUT,
    )
    .await
    .expect("build should succeed");

    assert_eq!(rows.len(), 2);
    let amounts: Vec<_> = rows.iter().map(|r| r.amount).collect();
    assert!(amounts.contains(&dec(1)));
    assert!(amounts.contains(&dec(2)));
}

#[tokio::test]
async fn category_fetch_failure_fails_the_build() {
    init_tracing();
    let bank_a = bank("BCA");

    let source = MemorySource {
        deposits: vec![deposit(bank_a.bank_id, "2024-03-05T01:00:00Z", 10)],
        withdrawals: vec![withdrawal(bank_a.bank_id, "2024-03-05T02:00:00Z", 5)],
        failing: vec!["expenses"],
        banks: vec![bank_a],
        ..Default::default()
    };

    let result = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT).await;
    assert!(result.is_err(), "no partial ledger may be returned");
}

#[tokio::test]
async fn creator_names_resolve_in_one_batch_with_fallback() {
    init_tracing();
    let bank_a = bank("BCA");
    let known = Uuid::new_v4();
    let unknown = Uuid::new_v4();

    let mut first = deposit(bank_a.bank_id, "2024-03-05T01:00:00Z", 10);
    first.created_by = Some(known);
    let mut second = deposit(bank_a.bank_id, "2024-03-05T02:00:00Z", 20);
    second.created_by = Some(unknown);
    let mut third = withdrawal(bank_a.bank_id, "2024-03-05T03:00:00Z", 5);
    third.created_by = Some(known);

    let source = MemorySource {
        deposits: vec![first, second],
        withdrawals: vec![third],
        banks: vec![bank_a],
        profiles: vec![backoffice_service::models::Profile {
            profile_id: known,
            display_name: "Rina".to_string(),
        }],
        ..Default::default()
    };

    let rows = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("build should succeed");

    let by_creator = |id: Uuid| {
        rows.iter()
            .filter(|r| r.creator_id == Some(id))
            .map(|r| r.creator_name.clone().unwrap())
            .collect::<Vec<_>>()
    };
    assert!(by_creator(known).iter().all(|n| n == "Rina"));
    let truncated = unknown.to_string()[..8].to_string();
    assert_eq!(by_creator(unknown), vec![truncated]);

    // One batched lookup carrying the distinct creator set.
    let calls = source.profile_calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].len(), 2);
    assert!(calls[0].contains(&known) && calls[0].contains(&unknown));
}

#[tokio::test]
async fn identity_lookup_failure_degrades_to_truncated_ids() {
    init_tracing();
    let bank_a = bank("BCA");
    let creator = Uuid::new_v4();

    let mut record = deposit(bank_a.bank_id, "2024-03-05T01:00:00Z", 10);
    record.created_by = Some(creator);

    let source = MemorySource {
        deposits: vec![record],
        banks: vec![bank_a],
        failing: vec!["profiles"],
        ..Default::default()
    };

    let rows = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("identity failures must not abort the build");

    assert_eq!(
        rows[0].creator_name.as_deref(),
        Some(&creator.to_string()[..8])
    );
}

#[tokio::test]
async fn bank_lookup_failure_degrades_to_placeholders() {
    init_tracing();
    let bank_id = Uuid::new_v4();

    let source = MemorySource {
        deposits: vec![deposit(bank_id, "2024-03-05T01:00:00Z", 10)],
        failing: vec!["banks"],
        ..Default::default()
    };

    let rows = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("bank label failures must not abort the build");

    assert_eq!(rows[0].bank_lines, vec![format!("#{}", &bank_id.to_string()[..8])]);
}

#[tokio::test]
async fn empty_store_yields_empty_ledger() {
    init_tracing();
    let rows = build_mutations(&MemorySource::default(), Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("empty result is a valid terminal state");
    assert!(rows.is_empty());
}

#[tokio::test]
async fn same_click_ties_keep_category_order_before_reversal() {
    init_tracing();
    let bank_a = bank("BCA");
    let bank_b = bank("BNI");
    let click = "2024-03-05T03:00:00Z";

    let source = MemorySource {
        deposits: vec![deposit(bank_a.bank_id, click, 10)],
        withdrawals: vec![withdrawal(bank_a.bank_id, click, 5)],
        transfers: vec![transfer(bank_a.bank_id, bank_b.bank_id, click, 30)],
        banks: vec![bank_a.clone(), bank_b.clone()],
        ..Default::default()
    };

    let rows = build_mutations(&source, Uuid::new_v4(), None, TEST_TIMEOUT)
        .await
        .expect("build should succeed");

    // Concatenation order is deposits, withdrawals, pending, adjustments,
    // expenses, transfers (from-row before to-row); the stable sort keeps it
    // for equal keys, numbering follows it, display reverses it.
    let mut ascending = rows.clone();
    ascending.sort_by_key(|r| r.display_sequence);
    assert_eq!(ascending[0].kind, MutationKind::Deposit);
    assert_eq!(ascending[1].kind, MutationKind::Withdrawal);
    assert_eq!(ascending[2].kind, MutationKind::Transfer);
    assert_eq!(ascending[2].bank_id, bank_a.bank_id);
    assert_eq!(ascending[3].kind, MutationKind::Transfer);
    assert_eq!(ascending[3].bank_id, bank_b.bank_id);

    // Sanity: all four share the click instant.
    assert!(rows.windows(2).all(|p| p[0].click_time == p[1].click_time));
}
