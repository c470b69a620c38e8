//! Reconciliation error types.

use finsight_shared::AppError;
use thiserror::Error;

use super::types::ReconciliationStatus;
use crate::store::StoreError;

/// Reconciliation errors.
#[derive(Debug, Error)]
pub enum ReconciliationError {
    /// Attempted an invalid status transition.
    #[error("Invalid reconciliation transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: ReconciliationStatus,
        /// The attempted target status.
        to: ReconciliationStatus,
    },

    /// Reconciliation store or insight sink failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ReconciliationError> for AppError {
    fn from(err: ReconciliationError) -> Self {
        match err {
            ReconciliationError::InvalidTransition { .. } => Self::Validation(err.to_string()),
            ReconciliationError::Store(inner) => inner.into(),
        }
    }
}
