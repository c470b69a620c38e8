//! Budget service: aggregates spending for the active month's budgets.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::NaiveDate;
use finsight_shared::types::{CategoryId, DateRange, OwnerId, YearMonth};
use rust_decimal::Decimal;
use tracing::{debug, info};

use super::error::BudgetError;
use super::tracker::BudgetTracker;
use super::types::{AlertOptions, BudgetAlert, BudgetUsage, UNCATEGORIZED};
use crate::ledger::{LedgerStore, TransactionFilter};

/// Budget tracking over an owner's ledger.
pub struct BudgetService<L: LedgerStore> {
    ledger: Arc<L>,
    tracker: BudgetTracker,
}

impl<L: LedgerStore> BudgetService<L> {
    /// Create a new budget service.
    #[must_use]
    pub fn new(ledger: Arc<L>, options: AlertOptions) -> Self {
        Self {
            ledger,
            tracker: BudgetTracker::new(options),
        }
    }

    /// Total expenses in `range`, optionally for one category.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read.
    pub async fn spending(
        &self,
        owner_id: OwnerId,
        category_id: Option<CategoryId>,
        range: DateRange,
    ) -> Result<Decimal, BudgetError> {
        let filter = TransactionFilter::expenses_in(range).with_category(category_id);
        let transactions = self.ledger.transactions(owner_id, filter).await?;

        Ok(BudgetTracker::spending(&transactions, category_id, range))
    }

    /// Usage of every budget for the month containing `as_of`, in store order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read.
    pub async fn usage(
        &self,
        owner_id: OwnerId,
        as_of: NaiveDate,
    ) -> Result<Vec<BudgetUsage>, BudgetError> {
        let month = YearMonth::containing(as_of);
        let range = month.date_range();

        let (budgets, categories, transactions) = futures::try_join!(
            self.ledger.budgets(owner_id, Some(month)),
            self.ledger.categories(owner_id),
            self.ledger
                .transactions(owner_id, TransactionFilter::expenses_in(range))
        )?;

        let names: HashMap<CategoryId, &str> = categories
            .iter()
            .map(|c| (c.id, c.name.as_str()))
            .collect();

        let usages: Vec<BudgetUsage> = budgets
            .iter()
            .map(|budget| {
                let spent =
                    BudgetTracker::spending(&transactions, Some(budget.category_id), range);
                let category = names
                    .get(&budget.category_id)
                    .copied()
                    .unwrap_or(UNCATEGORIZED);
                BudgetTracker::evaluate(budget, category, spent)
            })
            .collect();

        debug!(
            owner_id = %owner_id,
            month = %month,
            budgets = usages.len(),
            "Computed budget usage"
        );

        Ok(usages)
    }

    /// Alerts for the month containing `as_of`, in budget order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read.
    pub async fn generate_alerts(
        &self,
        owner_id: OwnerId,
        as_of: NaiveDate,
    ) -> Result<Vec<BudgetAlert>, BudgetError> {
        let usages = self.usage(owner_id, as_of).await?;
        let alerts = self.tracker.generate_alerts(&usages);

        if !alerts.is_empty() {
            info!(
                owner_id = %owner_id,
                alerts = alerts.len(),
                "Budget alerts raised"
            );
        }

        Ok(alerts)
    }
}
