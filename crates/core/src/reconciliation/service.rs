//! Reconciliation service: runs matching passes and manual resolution.

use std::sync::Arc;

use chrono::Utc;
use finsight_shared::types::{AccountId, OwnerId, ReconciliationRecordId, TransactionId};
use tracing::{debug, info, warn};

use super::error::ReconciliationError;
use super::matcher::ReconciliationMatcher;
use super::store::ReconciliationStore;
use super::types::{MatchOptions, ReconciliationPass, ReconciliationRecord, ReconciliationStatus};
use crate::insight::{Insight, InsightKind, InsightSink};

/// Reconciliation of imported statement lines against ledger transactions.
pub struct ReconciliationService<R: ReconciliationStore, I: InsightSink> {
    store: Arc<R>,
    insights: Arc<I>,
    matcher: ReconciliationMatcher,
}

impl<R: ReconciliationStore, I: InsightSink> ReconciliationService<R, I> {
    /// Create a new reconciliation service.
    #[must_use]
    pub fn new(store: Arc<R>, insights: Arc<I>, options: MatchOptions) -> Self {
        Self {
            store,
            insights,
            matcher: ReconciliationMatcher::new(options),
        }
    }

    /// Match pending records without persisting anything.
    ///
    /// # Errors
    ///
    /// Returns a store error if records or transactions cannot be read.
    pub async fn dry_run(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> Result<ReconciliationPass, ReconciliationError> {
        let (records, transactions) = futures::try_join!(
            self.store.pending_records(owner_id, account_id),
            self.store.unreconciled_transactions(owner_id, account_id)
        )?;

        let skipped = records.iter().filter(|r| !r.is_pending()).count();
        if skipped > 0 {
            debug!(
                owner_id = %owner_id,
                account_id = %account_id,
                skipped,
                "Skipping non-pending records"
            );
        }

        Ok(self.matcher.run(account_id, &records, &transactions))
    }

    /// Match pending records, emit one insight if any record ended up
    /// mismatched, then persist every outcome in a single write.
    ///
    /// The insight goes out before the write: a failed write leaves every
    /// record pending, so a rerun repeats the whole pass and its insight.
    ///
    /// # Errors
    ///
    /// Returns a store error if reading, emitting the insight, or writing the
    /// outcomes fails.
    pub async fn reconcile(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> Result<ReconciliationPass, ReconciliationError> {
        let pass = self.dry_run(owner_id, account_id).await?;

        let mismatched = pass.summary.mismatched();
        if mismatched > 0 {
            warn!(
                owner_id = %owner_id,
                account_id = %account_id,
                mismatched,
                "Reconciliation found inconsistencies"
            );

            self.insights
                .emit(Insight {
                    owner_id,
                    account_id: Some(account_id),
                    kind: InsightKind::ReconciliationMismatch,
                    count: mismatched,
                    message: format!(
                        "{mismatched} statement line(s) on account {account_id} \
                         could not be matched exactly"
                    ),
                    generated_at: Utc::now(),
                })
                .await?;
        }

        if !pass.outcomes.is_empty() {
            self.store
                .apply_outcomes(owner_id, &pass.outcomes)
                .await
                .inspect_err(|err| {
                    warn!(
                        owner_id = %owner_id,
                        account_id = %account_id,
                        error = %err,
                        "Failed to persist reconciliation outcomes"
                    );
                })?;
        }

        info!(
            owner_id = %owner_id,
            account_id = %account_id,
            matched = pass.summary.matched,
            mismatched,
            "Reconciliation pass complete"
        );

        Ok(pass)
    }

    /// Manually mark a record as resolved, optionally relinking it.
    ///
    /// # Errors
    ///
    /// Returns `ReconciliationError::InvalidTransition` if the record is
    /// already resolved, or a store error.
    pub async fn resolve(
        &self,
        owner_id: OwnerId,
        record_id: ReconciliationRecordId,
        linked_transaction_id: Option<TransactionId>,
    ) -> Result<ReconciliationRecord, ReconciliationError> {
        let mut record = self.store.record(owner_id, record_id).await?;

        if !record.status.can_transition_to(ReconciliationStatus::Resolved) {
            return Err(ReconciliationError::InvalidTransition {
                from: record.status,
                to: ReconciliationStatus::Resolved,
            });
        }

        let linked = linked_transaction_id.or(record.linked_transaction_id);
        self.store
            .update_record(owner_id, record_id, ReconciliationStatus::Resolved, linked)
            .await?;

        info!(
            owner_id = %owner_id,
            record_id = %record_id,
            from = %record.status,
            "Reconciliation record resolved"
        );

        record.status = ReconciliationStatus::Resolved;
        record.linked_transaction_id = linked;
        Ok(record)
    }
}
