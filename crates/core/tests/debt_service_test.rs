//! Integration tests for the debt service.

mod common;

use std::sync::Arc;

use common::{date, debt, ledger, payment};
use finsight_core::debt::{DebtError, DebtService, ProjectionOptions};
use finsight_core::store::InMemoryStore;
use finsight_shared::types::DebtId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_reference_payoff_schedule() {
    let start = date(2026, 1, 1);
    let mut snapshot = ledger(Some(dec!(100000)));
    let debt_id = debt(&mut snapshot, dec!(500000), Some(dec!(12)), dec!(50000), start);
    let owner_id = snapshot.owner_id();
    let store = Arc::new(InMemoryStore::with_snapshots([snapshot]));
    let service = DebtService::new(store, ProjectionOptions::default());

    let schedule = service
        .payoff_schedule(owner_id, debt_id, dec!(50000), start)
        .await
        .unwrap();

    let first = &schedule[0];
    assert_eq!(first.month, 1);
    assert_eq!(first.interest_portion, Decimal::ZERO);
    assert_eq!(first.principal_portion, dec!(50000));
    assert_eq!(first.remaining_balance, dec!(450000));

    assert_eq!(schedule[1].interest_portion, dec!(4500.00));
    assert_eq!(schedule[2].interest_portion, dec!(4045.00));

    let last = schedule.last().unwrap();
    assert_eq!(schedule.len(), 11);
    assert_eq!(last.remaining_balance, Decimal::ZERO);
}

#[tokio::test]
async fn test_unknown_debt_is_not_found() {
    let snapshot = ledger(None);
    let owner_id = snapshot.owner_id();
    let store = Arc::new(InMemoryStore::with_snapshots([snapshot]));
    let service = DebtService::new(store, ProjectionOptions::default());
    let missing = DebtId::new();

    let err = service
        .payoff_schedule(owner_id, missing, dec!(100), date(2026, 1, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, DebtError::NotFound(id) if id == missing));
}

#[tokio::test]
async fn test_overview_estimates_only_outstanding_debts() {
    let start = date(2026, 1, 1);
    let mut snapshot = ledger(None);
    let open = debt(&mut snapshot, dec!(1200), None, dec!(100), start);
    let settled = debt(&mut snapshot, dec!(300), None, dec!(100), start);
    payment(&mut snapshot, open, dec!(200), date(2026, 2, 1));
    payment(&mut snapshot, settled, dec!(300), date(2026, 3, 1));
    let owner_id = snapshot.owner_id();
    let store = Arc::new(InMemoryStore::with_snapshots([snapshot]));
    let service = DebtService::new(store, ProjectionOptions::default());

    let overviews = service.overview(owner_id, date(2026, 6, 1)).await.unwrap();

    assert_eq!(overviews.len(), 2);

    let open_view = &overviews[0];
    assert_eq!(open_view.debt_id, open);
    assert_eq!(open_view.summary.remaining_balance, dec!(1000));
    let payoff = open_view.payoff.as_ref().unwrap();
    assert_eq!(payoff.months, 10);
    assert_eq!(payoff.payoff_date, Some(date(2027, 3, 1)));
    assert_eq!(payoff.total_interest, Decimal::ZERO);
    assert!(payoff.converges);

    let settled_view = &overviews[1];
    assert!(settled_view.summary.is_paid_off);
    assert!(settled_view.payoff.is_none());
}
