//! Score error types.

use finsight_shared::AppError;
use thiserror::Error;

use crate::store::StoreError;

/// Score-related errors.
#[derive(Debug, Error)]
pub enum ScoreError {
    /// Ledger or score store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ScoreError> for AppError {
    fn from(err: ScoreError) -> Self {
        match err {
            ScoreError::Store(inner) => inner.into(),
        }
    }
}
