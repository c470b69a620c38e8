//! Writes computed scores as immutable snapshots.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use finsight_shared::types::{OwnerId, ScoreSnapshotId};
use tracing::{info, warn};

use super::error::ScoreError;
use super::store::ScoreStore;
use super::types::{FinancialScoreSnapshot, ScoreResult};

/// Score Snapshot Writer.
pub struct SnapshotWriter<S: ScoreStore> {
    store: Arc<S>,
}

impl<S: ScoreStore> SnapshotWriter<S> {
    /// Create a writer over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Persist `result` as a new snapshot and return it.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::Store` if the score store rejects the insert.
    pub async fn write(
        &self,
        owner_id: OwnerId,
        result: ScoreResult,
        generated_at: DateTime<Utc>,
    ) -> Result<FinancialScoreSnapshot, ScoreError> {
        let snapshot = FinancialScoreSnapshot {
            id: ScoreSnapshotId::new(),
            owner_id,
            score: result.score,
            criteria: result.criteria,
            generated_at,
        };

        if let Err(e) = self.store.insert(snapshot.clone()).await {
            warn!(owner_id = %owner_id, error = %e, "Failed to write score snapshot");
            return Err(e.into());
        }

        info!(
            owner_id = %owner_id,
            snapshot_id = %snapshot.id,
            score = snapshot.score,
            "Score snapshot written"
        );

        Ok(snapshot)
    }
}
