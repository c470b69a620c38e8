//! Reconciliation data types.
//!
//! State machine for a statement line:
//! - Pending → Matched (exact amount and date)
//! - Pending → Mismatched (amount-only match, or no match)
//! - Pending | Matched | Mismatched → Resolved (manual)

use std::collections::HashSet;
use std::fmt;

use chrono::NaiveDate;
use finsight_shared::config::ReconciliationConfig;
use finsight_shared::types::{AccountId, ReconciliationRecordId, TransactionId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default amount tolerance (0.01).
pub const DEFAULT_AMOUNT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Reconciliation status of a statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconciliationStatus {
    /// Imported, not yet matched.
    Pending,
    /// Paired with a transaction on the same date and amount.
    Matched,
    /// Paired on amount only, or not paired at all.
    Mismatched,
    /// Settled manually.
    Resolved,
}

impl ReconciliationStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Matched => "matched",
            Self::Mismatched => "mismatched",
            Self::Resolved => "resolved",
        }
    }

    /// Returns true if a record may move from `self` to `next`.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Pending, Self::Matched | Self::Mismatched | Self::Resolved)
                | (Self::Matched | Self::Mismatched, Self::Resolved)
        )
    }
}

impl fmt::Display for ReconciliationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An externally reported statement line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationRecord {
    /// Record ID.
    pub id: ReconciliationRecordId,
    /// Account the line was reported for.
    pub account_id: AccountId,
    /// Reported amount.
    pub external_amount: Decimal,
    /// Reported date.
    pub external_date: NaiveDate,
    /// Reported description.
    #[serde(default)]
    pub external_description: String,
    /// Current status.
    pub status: ReconciliationStatus,
    /// Transaction the line is paired with.
    #[serde(default)]
    pub linked_transaction_id: Option<TransactionId>,
}

impl ReconciliationRecord {
    /// Returns true if the record still awaits matching.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == ReconciliationStatus::Pending
    }
}

/// Options for the matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOptions {
    /// Maximum absolute amount difference (inclusive) for a match.
    pub tolerance: Decimal,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_AMOUNT_TOLERANCE,
        }
    }
}

impl From<&ReconciliationConfig> for MatchOptions {
    fn from(config: &ReconciliationConfig) -> Self {
        Self {
            tolerance: config.amount_tolerance,
        }
    }
}

/// Transactions already paired during one pass.
///
/// Lives for a single pass and is threaded through the matcher explicitly.
#[derive(Debug, Default)]
pub struct ClaimedTransactions {
    ids: HashSet<TransactionId>,
}

impl ClaimedTransactions {
    /// Empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `id` as claimed. Returns false if it already was.
    pub fn claim(&mut self, id: TransactionId) -> bool {
        self.ids.insert(id)
    }

    /// Returns true if `id` has been claimed.
    #[must_use]
    pub fn is_claimed(&self, id: TransactionId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of claimed transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if nothing has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// How a record was paired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    /// Same amount (within tolerance) and same date.
    Exact,
    /// Same amount (within tolerance) on a different date.
    AmountOnly,
    /// No unclaimed transaction within tolerance.
    Unmatched,
}

/// Result of matching one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Record ID.
    pub record_id: ReconciliationRecordId,
    /// How the record was paired.
    pub kind: MatchKind,
    /// New status.
    pub status: ReconciliationStatus,
    /// Linked transaction, if any.
    pub linked_transaction_id: Option<TransactionId>,
}

/// Counts for one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationSummary {
    /// Records matched exactly.
    pub matched: usize,
    /// Records mismatched but linked on amount.
    pub mismatched_linked: usize,
    /// Records with no candidate transaction.
    pub unmatched: usize,
}

impl ReconciliationSummary {
    /// Tallies a list of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: &[MatchOutcome]) -> Self {
        outcomes
            .iter()
            .fold(Self::default(), |mut summary, outcome| {
                match outcome.kind {
                    MatchKind::Exact => summary.matched += 1,
                    MatchKind::AmountOnly => summary.mismatched_linked += 1,
                    MatchKind::Unmatched => summary.unmatched += 1,
                }
                summary
            })
    }

    /// Records left mismatched, linked or not.
    #[must_use]
    pub const fn mismatched(&self) -> usize {
        self.mismatched_linked + self.unmatched
    }

    /// Records evaluated.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.matched + self.mismatched()
    }
}

/// Outcomes and counts for one account's pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciliationPass {
    /// Account reconciled.
    pub account_id: AccountId,
    /// One outcome per pending record, in record order.
    pub outcomes: Vec<MatchOutcome>,
    /// Counts.
    pub summary: ReconciliationSummary,
}
