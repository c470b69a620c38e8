//! Score Store collaborator.

use std::future::Future;

use finsight_shared::types::OwnerId;

use super::types::FinancialScoreSnapshot;
use crate::store::StoreError;

/// Persists score snapshots and serves score history.
///
/// Snapshots are append-only; implementations never update a stored snapshot.
pub trait ScoreStore: Send + Sync {
    /// Append a snapshot.
    fn insert(
        &self,
        snapshot: FinancialScoreSnapshot,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Most recent snapshot for the owner.
    fn latest(
        &self,
        owner_id: OwnerId,
    ) -> impl Future<Output = Result<Option<FinancialScoreSnapshot>, StoreError>> + Send;

    /// Up to `limit` snapshots for the owner, newest first.
    fn history(
        &self,
        owner_id: OwnerId,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<FinancialScoreSnapshot>, StoreError>> + Send;
}
