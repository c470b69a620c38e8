//! Budget usage arithmetic and alert generation.

use finsight_shared::types::money::round_money;
use finsight_shared::types::{CategoryId, DateRange};
use rust_decimal::Decimal;

use super::types::{AlertOptions, AlertSeverity, BudgetAlert, BudgetUsage};
use crate::ledger::{Budget, Transaction, TransactionFilter};

/// Computes budget usage and alerts.
#[derive(Debug, Clone, Copy, Default)]
pub struct BudgetTracker {
    options: AlertOptions,
}

impl BudgetTracker {
    /// Creates a tracker with the given alert options.
    #[must_use]
    pub const fn new(options: AlertOptions) -> Self {
        Self { options }
    }

    /// Sum of expense transactions inside `range`, optionally for one category.
    #[must_use]
    pub fn spending(
        transactions: &[Transaction],
        category_id: Option<CategoryId>,
        range: DateRange,
    ) -> Decimal {
        let filter = TransactionFilter::expenses_in(range).with_category(category_id);
        transactions
            .iter()
            .filter(|tx| filter.matches(tx))
            .map(|tx| tx.amount)
            .sum()
    }

    /// Share of the limit spent, in percent, capped at 100.
    ///
    /// A zero limit reports 100 once anything is spent and 0 otherwise.
    #[must_use]
    pub fn usage_percentage(limit: Decimal, spent: Decimal) -> Decimal {
        if limit <= Decimal::ZERO {
            return if spent > Decimal::ZERO {
                Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
        }

        round_money(spent / limit * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    }

    /// `max(0, limit - spent)`.
    #[must_use]
    pub fn remaining(limit: Decimal, spent: Decimal) -> Decimal {
        (limit - spent).max(Decimal::ZERO)
    }

    /// True if spending strictly exceeds the limit.
    #[must_use]
    pub fn is_over_budget(limit: Decimal, spent: Decimal) -> bool {
        spent > limit
    }

    /// Usage of one budget given its category's spending.
    #[must_use]
    pub fn evaluate(budget: &Budget, category: &str, spent: Decimal) -> BudgetUsage {
        BudgetUsage {
            budget_id: budget.id,
            category_id: budget.category_id,
            category: category.to_string(),
            month: budget.month,
            limit: budget.amount_limit,
            spent,
            usage_percentage: Self::usage_percentage(budget.amount_limit, spent),
            remaining: Self::remaining(budget.amount_limit, spent),
            is_over_budget: Self::is_over_budget(budget.amount_limit, spent),
        }
    }

    /// Alert for a single usage, if it has reached the threshold.
    #[must_use]
    pub fn alert_for(&self, usage: &BudgetUsage) -> Option<BudgetAlert> {
        if usage.usage_percentage < self.options.threshold_percent {
            return None;
        }

        let severity = if usage.usage_percentage >= Decimal::ONE_HUNDRED {
            AlertSeverity::Critical
        } else {
            AlertSeverity::Warning
        };

        Some(BudgetAlert {
            budget_id: usage.budget_id,
            category_id: usage.category_id,
            category: usage.category.clone(),
            percentage: usage.usage_percentage,
            remaining: usage.remaining,
            severity,
        })
    }

    /// Alerts for every usage at or above the threshold, in input order.
    #[must_use]
    pub fn generate_alerts(&self, usages: &[BudgetUsage]) -> Vec<BudgetAlert> {
        usages.iter().filter_map(|u| self.alert_for(u)).collect()
    }
}
