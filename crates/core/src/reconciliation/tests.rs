//! Tests for the reconciliation matcher.

use std::collections::HashSet;

use chrono::NaiveDate;
use finsight_shared::types::{AccountId, ReconciliationRecordId, TransactionId};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::matcher::ReconciliationMatcher;
use super::types::{
    ClaimedTransactions, MatchKind, MatchOptions, ReconciliationRecord, ReconciliationStatus,
    ReconciliationSummary,
};
use crate::ledger::{Transaction, TransactionType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn record(amount: Decimal, on: NaiveDate) -> ReconciliationRecord {
    ReconciliationRecord {
        id: ReconciliationRecordId::new(),
        account_id: AccountId::new(),
        external_amount: amount,
        external_date: on,
        external_description: "statement line".to_string(),
        status: ReconciliationStatus::Pending,
        linked_transaction_id: None,
    }
}

fn tx(amount: Decimal, on: NaiveDate) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        account_id: AccountId::new(),
        category_id: None,
        amount,
        transaction_type: TransactionType::Expense,
        date: on,
        description: None,
    }
}

#[rstest]
#[case(ReconciliationStatus::Pending, ReconciliationStatus::Matched, true)]
#[case(ReconciliationStatus::Pending, ReconciliationStatus::Mismatched, true)]
#[case(ReconciliationStatus::Pending, ReconciliationStatus::Resolved, true)]
#[case(ReconciliationStatus::Matched, ReconciliationStatus::Resolved, true)]
#[case(ReconciliationStatus::Mismatched, ReconciliationStatus::Resolved, true)]
#[case(ReconciliationStatus::Resolved, ReconciliationStatus::Resolved, false)]
#[case(ReconciliationStatus::Resolved, ReconciliationStatus::Pending, false)]
#[case(ReconciliationStatus::Matched, ReconciliationStatus::Mismatched, false)]
#[case(ReconciliationStatus::Mismatched, ReconciliationStatus::Matched, false)]
#[case(ReconciliationStatus::Matched, ReconciliationStatus::Pending, false)]
fn test_status_transitions(
    #[case] from: ReconciliationStatus,
    #[case] to: ReconciliationStatus,
    #[case] allowed: bool,
) {
    assert_eq!(from.can_transition_to(to), allowed);
}

#[test]
fn test_exact_match_within_tolerance() {
    let day = date(2026, 3, 10);
    let t = tx(dec!(100.00), day);
    let r = record(dec!(100.01), day);

    let outcome = ReconciliationMatcher::default().match_record(
        &r,
        std::slice::from_ref(&t),
        &mut ClaimedTransactions::new(),
    );

    assert_eq!(outcome.kind, MatchKind::Exact);
    assert_eq!(outcome.status, ReconciliationStatus::Matched);
    assert_eq!(outcome.linked_transaction_id, Some(t.id));
}

#[test]
fn test_outside_tolerance_is_unmatched() {
    let day = date(2026, 3, 10);
    let r = record(dec!(100.02), day);

    let outcome = ReconciliationMatcher::default().match_record(
        &r,
        &[tx(dec!(100.00), day)],
        &mut ClaimedTransactions::new(),
    );

    assert_eq!(outcome.kind, MatchKind::Unmatched);
    assert_eq!(outcome.status, ReconciliationStatus::Mismatched);
    assert_eq!(outcome.linked_transaction_id, None);
}

#[test]
fn test_exact_match_preferred_over_earlier_amount_match() {
    let other_day = tx(dec!(50), date(2026, 3, 1));
    let same_day = tx(dec!(50), date(2026, 3, 5));
    let r = record(dec!(50), date(2026, 3, 5));

    let outcome = ReconciliationMatcher::default().match_record(
        &r,
        &[other_day, same_day.clone()],
        &mut ClaimedTransactions::new(),
    );

    assert_eq!(outcome.kind, MatchKind::Exact);
    assert_eq!(outcome.linked_transaction_id, Some(same_day.id));
}

#[test]
fn test_amount_only_match_is_mismatched_but_linked() {
    let t = tx(dec!(75), date(2026, 3, 1));
    let r = record(dec!(75), date(2026, 3, 2));

    let outcome = ReconciliationMatcher::default().match_record(
        &r,
        std::slice::from_ref(&t),
        &mut ClaimedTransactions::new(),
    );

    assert_eq!(outcome.kind, MatchKind::AmountOnly);
    assert_eq!(outcome.status, ReconciliationStatus::Mismatched);
    assert_eq!(outcome.linked_transaction_id, Some(t.id));
}

#[test]
fn test_greedy_first_fit_order() {
    // The first record has no same-day candidate and takes the first amount
    // match; the second still finds its exact match afterwards.
    let early = tx(dec!(20), date(2026, 3, 1));
    let late = tx(dec!(20), date(2026, 3, 9));
    let records = vec![
        record(dec!(20), date(2026, 3, 5)),
        record(dec!(20), date(2026, 3, 9)),
    ];

    let pass = ReconciliationMatcher::default().run(
        AccountId::new(),
        &records,
        &[early.clone(), late.clone()],
    );

    assert_eq!(pass.outcomes[0].kind, MatchKind::AmountOnly);
    assert_eq!(pass.outcomes[0].linked_transaction_id, Some(early.id));
    assert_eq!(pass.outcomes[1].kind, MatchKind::Exact);
    assert_eq!(pass.outcomes[1].linked_transaction_id, Some(late.id));
}

#[test]
fn test_duplicate_amounts_claim_once() {
    let day = date(2026, 3, 1);
    let only = tx(dec!(10), day);
    let records = vec![record(dec!(10), day), record(dec!(10), day)];

    let pass = ReconciliationMatcher::default().run(AccountId::new(), &records, &[only]);

    assert_eq!(pass.outcomes[0].kind, MatchKind::Exact);
    assert_eq!(pass.outcomes[1].kind, MatchKind::Unmatched);
    assert_eq!(
        pass.summary,
        ReconciliationSummary {
            matched: 1,
            mismatched_linked: 0,
            unmatched: 1,
        }
    );
    assert_eq!(pass.summary.mismatched(), 1);
    assert_eq!(pass.summary.total(), 2);
}

#[test]
fn test_non_pending_records_are_skipped() {
    let day = date(2026, 3, 1);
    let t = tx(dec!(10), day);
    let mut resolved = record(dec!(10), day);
    resolved.status = ReconciliationStatus::Resolved;
    let pending = record(dec!(10), day);

    let pass = ReconciliationMatcher::default().run(
        AccountId::new(),
        &[resolved, pending.clone()],
        std::slice::from_ref(&t),
    );

    assert_eq!(pass.outcomes.len(), 1);
    assert_eq!(pass.outcomes[0].record_id, pending.id);
    assert_eq!(pass.outcomes[0].linked_transaction_id, Some(t.id));
}

#[test]
fn test_claimed_set_threads_across_calls() {
    let day = date(2026, 3, 1);
    let t = tx(dec!(10), day);
    let matcher = ReconciliationMatcher::new(MatchOptions {
        tolerance: Decimal::ZERO,
    });
    let mut claimed = ClaimedTransactions::new();

    let transactions = std::slice::from_ref(&t);

    let first = matcher.match_records(&[record(dec!(10), day)], transactions, &mut claimed);
    let second = matcher.match_records(&[record(dec!(10), day)], transactions, &mut claimed);

    assert_eq!(first[0].kind, MatchKind::Exact);
    assert_eq!(second[0].kind, MatchKind::Unmatched);
    assert!(claimed.is_claimed(t.id));
    assert_eq!(claimed.len(), 1);
}

fn cents() -> impl Strategy<Value = Decimal> {
    (1i64..500i64).prop_map(|c| Decimal::new(c, 2))
}

proptest! {
    /// No transaction is linked to more than one record after a pass, and
    /// every linked amount is within tolerance of its record.
    #[test]
    fn test_no_double_claim(
        record_specs in prop::collection::vec((cents(), 1u32..5), 0..30),
        tx_specs in prop::collection::vec((cents(), 1u32..5), 0..30),
    ) {
        let records: Vec<ReconciliationRecord> = record_specs
            .iter()
            .map(|(amount, day)| record(*amount, date(2026, 3, *day)))
            .collect();
        let transactions: Vec<Transaction> = tx_specs
            .iter()
            .map(|(amount, day)| tx(*amount, date(2026, 3, *day)))
            .collect();

        let matcher = ReconciliationMatcher::default();
        let pass = matcher.run(AccountId::new(), &records, &transactions);

        let mut seen = HashSet::new();
        for (outcome, rec) in pass.outcomes.iter().zip(&records) {
            prop_assert_eq!(outcome.record_id, rec.id);
            if let Some(id) = outcome.linked_transaction_id {
                prop_assert!(seen.insert(id), "transaction linked twice");
                let linked = transactions.iter().find(|t| t.id == id).unwrap();
                prop_assert!(matcher.within_tolerance(linked.amount, rec.external_amount));
                if outcome.kind == MatchKind::Exact {
                    prop_assert_eq!(linked.date, rec.external_date);
                }
            } else {
                prop_assert_eq!(outcome.kind, MatchKind::Unmatched);
            }
        }
        prop_assert_eq!(pass.summary.total(), records.len());
    }
}
