//! Debt error types.

use finsight_shared::AppError;
use finsight_shared::types::DebtId;
use thiserror::Error;

use crate::store::StoreError;

/// Debt-related errors.
#[derive(Debug, Error)]
pub enum DebtError {
    /// Debt not found for this owner.
    #[error("Debt not found: {0}")]
    NotFound(DebtId),

    /// Ledger store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<DebtError> for AppError {
    fn from(err: DebtError) -> Self {
        match err {
            DebtError::NotFound(_) => Self::NotFound(err.to_string()),
            DebtError::Store(inner) => inner.into(),
        }
    }
}
