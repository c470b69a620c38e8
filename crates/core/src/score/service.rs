//! Score service: gathers ledger aggregates, scores them and manages history.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use finsight_shared::types::{DateRange, OwnerId};
use rust_decimal::Decimal;
use tracing::debug;

use super::calculator::ScoreCalculator;
use super::error::ScoreError;
use super::store::ScoreStore;
use super::types::{FinancialScoreSnapshot, SAVINGS_WINDOW_MONTHS, ScoreInputs, ScoreResult};
use super::writer::SnapshotWriter;
use crate::debt::DebtProjector;
use crate::ledger::{LedgerStore, TransactionFilter};

/// Composite financial health scoring for one owner at a time.
pub struct ScoreService<L: LedgerStore, S: ScoreStore> {
    ledger: Arc<L>,
    scores: Arc<S>,
    writer: SnapshotWriter<S>,
    history_limit: usize,
}

impl<L: LedgerStore, S: ScoreStore> ScoreService<L, S> {
    /// Create a new score service. `history_limit` is the default page size
    /// for [`Self::history`].
    #[must_use]
    pub fn new(ledger: Arc<L>, scores: Arc<S>, history_limit: usize) -> Self {
        Self {
            ledger,
            writer: SnapshotWriter::new(Arc::clone(&scores)),
            scores,
            history_limit,
        }
    }

    /// Reads the ledger aggregates the score depends on.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read.
    pub async fn inputs(
        &self,
        owner_id: OwnerId,
        as_of: NaiveDate,
    ) -> Result<ScoreInputs, ScoreError> {
        let window = DateRange::trailing_months(as_of, SAVINGS_WINDOW_MONTHS);

        let (profile, expenses, debts, payments, investments, goals, contributions) =
            futures::try_join!(
                self.ledger.profile(owner_id),
                self.ledger
                    .transactions(owner_id, TransactionFilter::expenses_in(window)),
                self.ledger.debts(owner_id),
                self.ledger.debt_payments(owner_id),
                self.ledger.investments(owner_id),
                self.ledger.goals(owner_id),
                self.ledger.goal_contributions(owner_id),
            )?;

        let inputs = ScoreInputs {
            monthly_income: profile.known_income(),
            trailing_expenses: expenses.iter().map(|tx| tx.amount).sum(),
            active_debt_remaining: DebtProjector::total_active_remaining(&debts, &payments),
            total_invested: investments.iter().map(|i| i.principal_amount).sum(),
            goal_count: goals.len(),
            goal_targets: goals.iter().map(|g| g.target_amount).sum(),
            goal_contributions: contributions
                .iter()
                .filter(|c| goals.iter().any(|g| g.id == c.goal_id))
                .map(|c| c.amount)
                .sum::<Decimal>(),
        };

        debug!(
            owner_id = %owner_id,
            expenses = expenses.len(),
            debts = debts.len(),
            investments = investments.len(),
            goals = goals.len(),
            "Gathered score inputs"
        );

        Ok(inputs)
    }

    /// Compute the score without persisting it.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read.
    pub async fn preview(
        &self,
        owner_id: OwnerId,
        as_of: NaiveDate,
    ) -> Result<ScoreResult, ScoreError> {
        let inputs = self.inputs(owner_id, as_of).await?;
        Ok(ScoreCalculator::compute(&inputs))
    }

    /// Compute the score and persist it as a new snapshot.
    ///
    /// Nothing is written if the ledger cannot be read.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read or the snapshot
    /// cannot be written.
    pub async fn calculate(
        &self,
        owner_id: OwnerId,
        as_of: NaiveDate,
    ) -> Result<FinancialScoreSnapshot, ScoreError> {
        let result = self.preview(owner_id, as_of).await?;
        self.writer.write(owner_id, result, Utc::now()).await
    }

    /// Most recent stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns a store error if the score store cannot be read.
    pub async fn latest(
        &self,
        owner_id: OwnerId,
    ) -> Result<Option<FinancialScoreSnapshot>, ScoreError> {
        Ok(self.scores.latest(owner_id).await?)
    }

    /// Stored snapshots, newest first. `limit` defaults to the configured
    /// history size.
    ///
    /// # Errors
    ///
    /// Returns a store error if the score store cannot be read.
    pub async fn history(
        &self,
        owner_id: OwnerId,
        limit: Option<usize>,
    ) -> Result<Vec<FinancialScoreSnapshot>, ScoreError> {
        let limit = limit.unwrap_or(self.history_limit);
        Ok(self.scores.history(owner_id, limit).await?)
    }
}
