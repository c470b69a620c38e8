//! Read-only access to ledger records.

use std::future::Future;

use finsight_shared::types::{CategoryId, DateRange, OwnerId, YearMonth};

use super::types::{
    Account, Budget, Category, Debt, DebtPayment, FinancialProfile, Goal, GoalContribution,
    Investment, Transaction, TransactionType,
};
use crate::store::StoreError;

/// Filter applied when listing transactions.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransactionFilter {
    /// Only transactions dated inside this range.
    pub range: Option<DateRange>,
    /// Only transactions in this category.
    pub category_id: Option<CategoryId>,
    /// Only transactions of this type.
    pub transaction_type: Option<TransactionType>,
}

impl TransactionFilter {
    /// Expense transactions inside `range`.
    #[must_use]
    pub fn expenses_in(range: DateRange) -> Self {
        Self {
            range: Some(range),
            category_id: None,
            transaction_type: Some(TransactionType::Expense),
        }
    }

    /// Restricts the filter to one category.
    #[must_use]
    pub fn with_category(mut self, category_id: Option<CategoryId>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Returns true if the transaction passes every set criterion.
    #[must_use]
    pub fn matches(&self, transaction: &Transaction) -> bool {
        self.range.is_none_or(|range| range.contains(transaction.date))
            && self
                .category_id
                .is_none_or(|category| transaction.category_id == Some(category))
            && self
                .transaction_type
                .is_none_or(|kind| transaction.transaction_type == kind)
    }
}

/// Ledger Store collaborator.
///
/// Implemented by the persistence layer. Every method is scoped to a single
/// owner and returns records in the store's natural (insertion) order.
pub trait LedgerStore: Send + Sync {
    /// Owner's financial profile.
    fn profile(
        &self,
        owner_id: OwnerId,
    ) -> impl Future<Output = Result<FinancialProfile, StoreError>> + Send;

    /// Owner's accounts.
    fn accounts(
        &self,
        owner_id: OwnerId,
    ) -> impl Future<Output = Result<Vec<Account>, StoreError>> + Send;

    /// Owner's transactions matching the filter.
    fn transactions(
        &self,
        owner_id: OwnerId,
        filter: TransactionFilter,
    ) -> impl Future<Output = Result<Vec<Transaction>, StoreError>> + Send;

    /// Owner's spending categories.
    fn categories(
        &self,
        owner_id: OwnerId,
    ) -> impl Future<Output = Result<Vec<Category>, StoreError>> + Send;

    /// Owner's debts, active and closed.
    fn debts(&self, owner_id: OwnerId)
    -> impl Future<Output = Result<Vec<Debt>, StoreError>> + Send;

    /// Owner's debt payments across all debts.
    fn debt_payments(
        &self,
        owner_id: OwnerId,
    ) -> impl Future<Output = Result<Vec<DebtPayment>, StoreError>> + Send;

    /// Owner's investments.
    fn investments(
        &self,
        owner_id: OwnerId,
    ) -> impl Future<Output = Result<Vec<Investment>, StoreError>> + Send;

    /// Owner's budgets, optionally limited to one month.
    fn budgets(
        &self,
        owner_id: OwnerId,
        month: Option<YearMonth>,
    ) -> impl Future<Output = Result<Vec<Budget>, StoreError>> + Send;

    /// Owner's goals.
    fn goals(&self, owner_id: OwnerId)
    -> impl Future<Output = Result<Vec<Goal>, StoreError>> + Send;

    /// Owner's goal contributions across all goals.
    fn goal_contributions(
        &self,
        owner_id: OwnerId,
    ) -> impl Future<Output = Result<Vec<GoalContribution>, StoreError>> + Send;
}
