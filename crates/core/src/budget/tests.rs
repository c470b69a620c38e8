//! Tests for budget tracking.

use chrono::NaiveDate;
use finsight_shared::types::{
    AccountId, BudgetId, CategoryId, DateRange, TransactionId, YearMonth,
};
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::tracker::BudgetTracker;
use super::types::{AlertOptions, AlertSeverity};
use crate::ledger::{Budget, Transaction, TransactionType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn tx(
    category_id: Option<CategoryId>,
    amount: Decimal,
    transaction_type: TransactionType,
    on: NaiveDate,
) -> Transaction {
    Transaction {
        id: TransactionId::new(),
        account_id: AccountId::new(),
        category_id,
        amount,
        transaction_type,
        date: on,
        description: None,
    }
}

fn budget(limit: Decimal) -> Budget {
    Budget {
        id: BudgetId::new(),
        category_id: CategoryId::new(),
        month: YearMonth::new(2026, 3).unwrap(),
        amount_limit: limit,
    }
}

#[test]
fn test_spending_sums_expenses_in_range_and_category() {
    let food = CategoryId::new();
    let rent = CategoryId::new();
    let march = YearMonth::new(2026, 3).unwrap().date_range();
    let transactions = vec![
        tx(Some(food), dec!(100), TransactionType::Expense, date(2026, 3, 1)),
        tx(Some(food), dec!(50.25), TransactionType::Expense, date(2026, 3, 31)),
        tx(Some(food), dec!(999), TransactionType::Income, date(2026, 3, 10)),
        tx(Some(food), dec!(70), TransactionType::Expense, date(2026, 4, 1)),
        tx(Some(rent), dec!(800), TransactionType::Expense, date(2026, 3, 5)),
        tx(None, dec!(5), TransactionType::Expense, date(2026, 3, 5)),
    ];

    assert_eq!(
        BudgetTracker::spending(&transactions, Some(food), march),
        dec!(150.25)
    );
    assert_eq!(
        BudgetTracker::spending(&transactions, None, march),
        dec!(955.25)
    );
}

#[test]
fn test_spending_empty_range() {
    let range = DateRange::new(date(2020, 1, 1), date(2020, 1, 31)).unwrap();
    assert_eq!(BudgetTracker::spending(&[], None, range), Decimal::ZERO);
}

#[rstest]
#[case(dec!(1000), dec!(0), dec!(0))]
#[case(dec!(1000), dec!(450), dec!(45))]
#[case(dec!(3), dec!(1), dec!(33.33))]
#[case(dec!(1000), dec!(1000), dec!(100))]
#[case(dec!(1000), dec!(5000), dec!(100))]
#[case(dec!(0), dec!(0), dec!(0))]
#[case(dec!(0), dec!(10), dec!(100))]
fn test_usage_percentage(
    #[case] limit: Decimal,
    #[case] spent: Decimal,
    #[case] expected: Decimal,
) {
    assert_eq!(BudgetTracker::usage_percentage(limit, spent), expected);
}

#[test]
fn test_remaining_and_over_budget() {
    assert_eq!(BudgetTracker::remaining(dec!(1000), dec!(400)), dec!(600));
    assert_eq!(BudgetTracker::remaining(dec!(1000), dec!(1400)), Decimal::ZERO);
    assert!(!BudgetTracker::is_over_budget(dec!(1000), dec!(1000)));
    assert!(BudgetTracker::is_over_budget(dec!(1000), dec!(1000.01)));
}

#[test]
fn test_alerts_keep_input_order_and_severity() {
    let tracker = BudgetTracker::default();
    let usages = vec![
        BudgetTracker::evaluate(&budget(dec!(1000)), "Food", dec!(1200)),
        BudgetTracker::evaluate(&budget(dec!(1000)), "Fuel", dec!(500)),
        BudgetTracker::evaluate(&budget(dec!(1000)), "Rent", dec!(900)),
        BudgetTracker::evaluate(&budget(dec!(1000)), "Fun", dec!(899.99)),
    ];

    let alerts = tracker.generate_alerts(&usages);

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].category, "Food");
    assert_eq!(alerts[0].severity, AlertSeverity::Critical);
    assert_eq!(alerts[0].remaining, Decimal::ZERO);
    assert_eq!(alerts[1].category, "Rent");
    assert_eq!(alerts[1].severity, AlertSeverity::Warning);
    assert_eq!(alerts[1].percentage, dec!(90));
    assert_eq!(alerts[1].remaining, dec!(100));
}

#[test]
fn test_custom_threshold() {
    let tracker = BudgetTracker::new(AlertOptions {
        threshold_percent: dec!(50),
    });
    let usage = BudgetTracker::evaluate(&budget(dec!(200)), "Food", dec!(100));

    let alert = tracker.alert_for(&usage).unwrap();
    assert_eq!(alert.severity, AlertSeverity::Warning);
}

proptest! {
    /// Usage never exceeds 100 however far spending overshoots the limit.
    #[test]
    fn test_usage_is_clamped(
        limit in 0i64..1_000_000_000,
        spent in 0i64..i64::from(i32::MAX),
        factor in 1i64..1000,
    ) {
        let limit = Decimal::new(limit, 2);
        let spent = Decimal::new(spent, 2) * Decimal::from(factor);

        let usage = BudgetTracker::usage_percentage(limit, spent);

        prop_assert!(usage >= Decimal::ZERO);
        prop_assert!(usage <= Decimal::ONE_HUNDRED);
        prop_assert_eq!(BudgetTracker::is_over_budget(limit, spent), spent > limit);
        prop_assert!(BudgetTracker::remaining(limit, spent) <= limit.max(Decimal::ZERO));
    }
}
