//! Greedy first-fit matching of statement lines to ledger transactions.

use finsight_shared::types::AccountId;
use rust_decimal::Decimal;

use super::types::{
    ClaimedTransactions, MatchKind, MatchOptions, MatchOutcome, ReconciliationPass,
    ReconciliationRecord, ReconciliationStatus, ReconciliationSummary,
};
use crate::ledger::Transaction;

/// Reconciliation Matcher.
///
/// Single pass, order dependent: each pending record takes the first
/// unclaimed transaction that fits, in collection order. No transaction is
/// paired twice within a pass.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReconciliationMatcher {
    options: MatchOptions,
}

impl ReconciliationMatcher {
    /// Creates a matcher with the given options.
    #[must_use]
    pub const fn new(options: MatchOptions) -> Self {
        Self { options }
    }

    /// Returns true if two amounts differ by at most the tolerance.
    #[must_use]
    pub fn within_tolerance(&self, a: Decimal, b: Decimal) -> bool {
        (a - b).abs() <= self.options.tolerance
    }

    /// Matches one record against the unclaimed transactions, claiming the
    /// chosen transaction.
    pub fn match_record(
        &self,
        record: &ReconciliationRecord,
        transactions: &[Transaction],
        claimed: &mut ClaimedTransactions,
    ) -> MatchOutcome {
        let taken: &ClaimedTransactions = claimed;
        let candidate = |tx: &&Transaction| {
            !taken.is_claimed(tx.id) && self.within_tolerance(tx.amount, record.external_amount)
        };

        let exact = transactions
            .iter()
            .filter(candidate)
            .find(|tx| tx.date == record.external_date);
        let (kind, linked) = match exact {
            Some(tx) => (MatchKind::Exact, Some(tx.id)),
            None => match transactions.iter().find(candidate) {
                Some(tx) => (MatchKind::AmountOnly, Some(tx.id)),
                None => (MatchKind::Unmatched, None),
            },
        };

        if let Some(id) = linked {
            claimed.claim(id);
        }

        MatchOutcome {
            record_id: record.id,
            kind,
            status: match kind {
                MatchKind::Exact => ReconciliationStatus::Matched,
                MatchKind::AmountOnly | MatchKind::Unmatched => ReconciliationStatus::Mismatched,
            },
            linked_transaction_id: linked,
        }
    }

    /// Matches every pending record in order. Non-pending records are skipped.
    pub fn match_records(
        &self,
        records: &[ReconciliationRecord],
        transactions: &[Transaction],
        claimed: &mut ClaimedTransactions,
    ) -> Vec<MatchOutcome> {
        records
            .iter()
            .filter(|record| record.is_pending())
            .map(|record| self.match_record(record, transactions, claimed))
            .collect()
    }

    /// Runs a full pass for one account with a fresh claimed set.
    #[must_use]
    pub fn run(
        &self,
        account_id: AccountId,
        records: &[ReconciliationRecord],
        transactions: &[Transaction],
    ) -> ReconciliationPass {
        let mut claimed = ClaimedTransactions::new();
        let outcomes = self.match_records(records, transactions, &mut claimed);
        let summary = ReconciliationSummary::from_outcomes(&outcomes);

        ReconciliationPass {
            account_id,
            outcomes,
            summary,
        }
    }
}
