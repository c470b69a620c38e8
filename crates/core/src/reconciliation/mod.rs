//! Matching of imported statement lines to ledger transactions.

pub mod error;
pub mod matcher;
pub mod service;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::ReconciliationError;
pub use matcher::ReconciliationMatcher;
pub use service::ReconciliationService;
pub use store::ReconciliationStore;
pub use types::{
    ClaimedTransactions, DEFAULT_AMOUNT_TOLERANCE, MatchKind, MatchOptions, MatchOutcome,
    ReconciliationPass, ReconciliationRecord, ReconciliationStatus, ReconciliationSummary,
};
