//! Collaborator error types.

use std::fmt;

use finsight_shared::AppError;
use thiserror::Error;

/// External collaborator the engine talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    /// Ledger records (transactions, debts, investments, budgets, goals).
    LedgerStore,
    /// Score snapshot history.
    ScoreStore,
    /// Imported statement lines.
    ReconciliationStore,
    /// Insight delivery.
    InsightSink,
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LedgerStore => "ledger store",
            Self::ScoreStore => "score store",
            Self::ReconciliationStore => "reconciliation store",
            Self::InsightSink => "insight sink",
        };
        f.write_str(name)
    }
}

/// Failure reading from or writing to an external collaborator.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The collaborator could not serve the request.
    #[error("{collaborator} unavailable: {message}")]
    Unavailable {
        /// Which collaborator failed.
        collaborator: Collaborator,
        /// Underlying cause.
        message: String,
    },

    /// A record the caller referenced does not exist.
    #[error("{entity} not found: {id}")]
    NotFound {
        /// Entity kind.
        entity: &'static str,
        /// Identifier that was looked up.
        id: String,
    },
}

impl StoreError {
    /// Create an unavailable error.
    #[must_use]
    pub fn unavailable(collaborator: Collaborator, message: impl Into<String>) -> Self {
        Self::Unavailable {
            collaborator,
            message: message.into(),
        }
    }

    /// Create a not found error.
    #[must_use]
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable { .. } => Self::CollaboratorUnavailable(err.to_string()),
            StoreError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}
