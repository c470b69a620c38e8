//! Reconciliation Store collaborator.

use std::future::Future;

use finsight_shared::types::{AccountId, OwnerId, ReconciliationRecordId, TransactionId};

use super::types::{MatchOutcome, ReconciliationRecord, ReconciliationStatus};
use crate::ledger::Transaction;
use crate::store::StoreError;

/// Supplies imported statement lines and accepts match results.
pub trait ReconciliationStore: Send + Sync {
    /// Pending records for one account, in import order.
    fn pending_records(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> impl Future<Output = Result<Vec<ReconciliationRecord>, StoreError>> + Send;

    /// Transactions on the account not yet linked to any record.
    fn unreconciled_transactions(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> impl Future<Output = Result<Vec<Transaction>, StoreError>> + Send;

    /// A single record by ID.
    fn record(
        &self,
        owner_id: OwnerId,
        record_id: ReconciliationRecordId,
    ) -> impl Future<Output = Result<ReconciliationRecord, StoreError>> + Send;

    /// Sets a record's status and link.
    fn update_record(
        &self,
        owner_id: OwnerId,
        record_id: ReconciliationRecordId,
        status: ReconciliationStatus,
        linked_transaction_id: Option<TransactionId>,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Applies every outcome of a matching pass, or none of them.
    ///
    /// An error must leave all records untouched so the pass can be rerun.
    fn apply_outcomes(
        &self,
        owner_id: OwnerId,
        outcomes: &[MatchOutcome],
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}
