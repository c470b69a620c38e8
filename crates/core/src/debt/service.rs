//! Debt service: loads debts from the ledger and runs projections.

use std::sync::Arc;

use chrono::NaiveDate;
use finsight_shared::types::{DebtId, OwnerId};
use rust_decimal::Decimal;
use tracing::debug;

use super::error::DebtError;
use super::projector::DebtProjector;
use super::types::{DebtOverview, ProjectionOptions, ScheduleEntry};
use crate::ledger::LedgerStore;

/// Debt projections over an owner's ledger.
pub struct DebtService<L: LedgerStore> {
    ledger: Arc<L>,
    projector: DebtProjector,
}

impl<L: LedgerStore> DebtService<L> {
    /// Create a new debt service.
    #[must_use]
    pub fn new(ledger: Arc<L>, options: ProjectionOptions) -> Self {
        Self {
            ledger,
            projector: DebtProjector::new(options),
        }
    }

    /// Payoff schedule for one debt paying `monthly_payment` from `from`.
    ///
    /// # Errors
    ///
    /// Returns `DebtError::NotFound` if the owner has no such debt, or a store
    /// error if the ledger cannot be read.
    pub async fn payoff_schedule(
        &self,
        owner_id: OwnerId,
        debt_id: DebtId,
        monthly_payment: Decimal,
        from: NaiveDate,
    ) -> Result<Vec<ScheduleEntry>, DebtError> {
        let (debts, payments) = futures::try_join!(
            self.ledger.debts(owner_id),
            self.ledger.debt_payments(owner_id)
        )?;

        let debt = debts
            .iter()
            .find(|d| d.id == debt_id)
            .ok_or(DebtError::NotFound(debt_id))?;

        let schedule: Vec<ScheduleEntry> = self
            .projector
            .payoff_schedule(debt, &payments, monthly_payment, from)
            .collect();

        debug!(
            owner_id = %owner_id,
            debt_id = %debt_id,
            months = schedule.len(),
            "Computed payoff schedule"
        );

        Ok(schedule)
    }

    /// Summary and payoff estimate for each of the owner's debts, in store order.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read.
    pub async fn overview(
        &self,
        owner_id: OwnerId,
        as_of: NaiveDate,
    ) -> Result<Vec<DebtOverview>, DebtError> {
        let (debts, payments) = futures::try_join!(
            self.ledger.debts(owner_id),
            self.ledger.debt_payments(owner_id)
        )?;

        let overviews = debts
            .iter()
            .map(|debt| {
                let summary = DebtProjector::summarize(debt, &payments, as_of);
                let payoff = (debt.is_active() && !summary.is_paid_off)
                    .then(|| self.projector.estimate_payoff(debt, &payments, as_of));
                DebtOverview {
                    debt_id: debt.id,
                    name: debt.name.clone(),
                    summary,
                    payoff,
                }
            })
            .collect();

        Ok(overviews)
    }
}
