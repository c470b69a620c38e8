//! In-memory implementation of every collaborator trait.
//!
//! Backs the analyzer binary (loaded from a JSON ledger snapshot) and the
//! service tests.

use std::collections::HashMap;

use finsight_shared::types::{AccountId, OwnerId, ReconciliationRecordId, TransactionId, YearMonth};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::error::StoreError;
use crate::insight::{Insight, InsightSink};
use crate::ledger::{
    Account, Budget, Category, Debt, DebtPayment, FinancialProfile, Goal, GoalContribution,
    Investment, LedgerStore, Transaction, TransactionFilter,
};
use crate::reconciliation::{
    MatchOutcome, ReconciliationRecord, ReconciliationStatus, ReconciliationStore,
};
use crate::score::{FinancialScoreSnapshot, ScoreStore};

/// Every record belonging to one owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    /// Owner profile; its `owner_id` keys the snapshot.
    pub profile: FinancialProfile,
    /// Accounts.
    #[serde(default)]
    pub accounts: Vec<Account>,
    /// Transactions.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Debts.
    #[serde(default)]
    pub debts: Vec<Debt>,
    /// Debt payments.
    #[serde(default)]
    pub debt_payments: Vec<DebtPayment>,
    /// Investments.
    #[serde(default)]
    pub investments: Vec<Investment>,
    /// Budgets.
    #[serde(default)]
    pub budgets: Vec<Budget>,
    /// Goals.
    #[serde(default)]
    pub goals: Vec<Goal>,
    /// Goal contributions.
    #[serde(default)]
    pub goal_contributions: Vec<GoalContribution>,
    /// Imported statement lines.
    #[serde(default)]
    pub reconciliation_records: Vec<ReconciliationRecord>,
    /// Stored score snapshots, in insertion order.
    #[serde(default)]
    pub score_history: Vec<FinancialScoreSnapshot>,
}

impl LedgerSnapshot {
    /// Empty ledger for a profile.
    #[must_use]
    pub fn new(profile: FinancialProfile) -> Self {
        Self {
            profile,
            accounts: Vec::new(),
            transactions: Vec::new(),
            categories: Vec::new(),
            debts: Vec::new(),
            debt_payments: Vec::new(),
            investments: Vec::new(),
            budgets: Vec::new(),
            goals: Vec::new(),
            goal_contributions: Vec::new(),
            reconciliation_records: Vec::new(),
            score_history: Vec::new(),
        }
    }

    /// Parses a snapshot from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document does not describe a valid snapshot.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Owner the snapshot belongs to.
    #[must_use]
    pub const fn owner_id(&self) -> OwnerId {
        self.profile.owner_id
    }
}

/// Owner-partitioned store held in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    ledgers: RwLock<HashMap<OwnerId, LedgerSnapshot>>,
    insights: RwLock<Vec<Insight>>,
}

impl InMemoryStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given snapshots.
    #[must_use]
    pub fn with_snapshots(snapshots: impl IntoIterator<Item = LedgerSnapshot>) -> Self {
        let ledgers = snapshots
            .into_iter()
            .map(|snapshot| (snapshot.owner_id(), snapshot))
            .collect();

        Self {
            ledgers: RwLock::new(ledgers),
            insights: RwLock::new(Vec::new()),
        }
    }

    /// Copy of an owner's snapshot.
    pub async fn snapshot(&self, owner_id: OwnerId) -> Option<LedgerSnapshot> {
        self.ledgers.read().await.get(&owner_id).cloned()
    }

    /// Insights emitted so far, oldest first.
    pub async fn insights(&self) -> Vec<Insight> {
        self.insights.read().await.clone()
    }

    async fn read<T>(
        &self,
        owner_id: OwnerId,
        f: impl FnOnce(&LedgerSnapshot) -> T,
    ) -> Option<T> {
        self.ledgers.read().await.get(&owner_id).map(f)
    }

    async fn list<T: Clone>(
        &self,
        owner_id: OwnerId,
        f: impl FnOnce(&LedgerSnapshot) -> &Vec<T>,
    ) -> Vec<T> {
        self.read(owner_id, |ledger| f(ledger).clone())
            .await
            .unwrap_or_default()
    }
}

fn missing_owner(owner_id: OwnerId) -> StoreError {
    StoreError::not_found("owner", owner_id)
}

impl LedgerStore for InMemoryStore {
    async fn profile(&self, owner_id: OwnerId) -> Result<FinancialProfile, StoreError> {
        self.read(owner_id, |ledger| ledger.profile.clone())
            .await
            .ok_or_else(|| StoreError::not_found("profile", owner_id))
    }

    async fn accounts(&self, owner_id: OwnerId) -> Result<Vec<Account>, StoreError> {
        Ok(self.list(owner_id, |l| &l.accounts).await)
    }

    async fn transactions(
        &self,
        owner_id: OwnerId,
        filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .read(owner_id, |ledger| {
                ledger
                    .transactions
                    .iter()
                    .filter(|tx| filter.matches(tx))
                    .cloned()
                    .collect()
            })
            .await
            .unwrap_or_default())
    }

    async fn categories(&self, owner_id: OwnerId) -> Result<Vec<Category>, StoreError> {
        Ok(self.list(owner_id, |l| &l.categories).await)
    }

    async fn debts(&self, owner_id: OwnerId) -> Result<Vec<Debt>, StoreError> {
        Ok(self.list(owner_id, |l| &l.debts).await)
    }

    async fn debt_payments(&self, owner_id: OwnerId) -> Result<Vec<DebtPayment>, StoreError> {
        Ok(self.list(owner_id, |l| &l.debt_payments).await)
    }

    async fn investments(&self, owner_id: OwnerId) -> Result<Vec<Investment>, StoreError> {
        Ok(self.list(owner_id, |l| &l.investments).await)
    }

    async fn budgets(
        &self,
        owner_id: OwnerId,
        month: Option<YearMonth>,
    ) -> Result<Vec<Budget>, StoreError> {
        Ok(self
            .read(owner_id, |ledger| {
                ledger
                    .budgets
                    .iter()
                    .filter(|b| month.is_none_or(|m| b.month == m))
                    .cloned()
                    .collect()
            })
            .await
            .unwrap_or_default())
    }

    async fn goals(&self, owner_id: OwnerId) -> Result<Vec<Goal>, StoreError> {
        Ok(self.list(owner_id, |l| &l.goals).await)
    }

    async fn goal_contributions(
        &self,
        owner_id: OwnerId,
    ) -> Result<Vec<GoalContribution>, StoreError> {
        Ok(self.list(owner_id, |l| &l.goal_contributions).await)
    }
}

impl ScoreStore for InMemoryStore {
    async fn insert(&self, snapshot: FinancialScoreSnapshot) -> Result<(), StoreError> {
        let mut ledgers = self.ledgers.write().await;
        let ledger = ledgers
            .get_mut(&snapshot.owner_id)
            .ok_or_else(|| missing_owner(snapshot.owner_id))?;
        ledger.score_history.push(snapshot);
        Ok(())
    }

    async fn latest(
        &self,
        owner_id: OwnerId,
    ) -> Result<Option<FinancialScoreSnapshot>, StoreError> {
        Ok(self.history(owner_id, 1).await?.into_iter().next())
    }

    async fn history(
        &self,
        owner_id: OwnerId,
        limit: usize,
    ) -> Result<Vec<FinancialScoreSnapshot>, StoreError> {
        let mut history: Vec<FinancialScoreSnapshot> = self
            .list(owner_id, |l| &l.score_history)
            .await
            .into_iter()
            .rev()
            .collect();
        // Stable: equal timestamps keep newest-inserted first.
        history.sort_by(|a, b| b.generated_at.cmp(&a.generated_at));
        history.truncate(limit);
        Ok(history)
    }
}

impl ReconciliationStore for InMemoryStore {
    async fn pending_records(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> Result<Vec<ReconciliationRecord>, StoreError> {
        Ok(self
            .read(owner_id, |ledger| {
                ledger
                    .reconciliation_records
                    .iter()
                    .filter(|r| r.account_id == account_id && r.is_pending())
                    .cloned()
                    .collect()
            })
            .await
            .unwrap_or_default())
    }

    async fn unreconciled_transactions(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> Result<Vec<Transaction>, StoreError> {
        Ok(self
            .read(owner_id, |ledger| {
                let linked: Vec<TransactionId> = ledger
                    .reconciliation_records
                    .iter()
                    .filter_map(|r| r.linked_transaction_id)
                    .collect();
                ledger
                    .transactions
                    .iter()
                    .filter(|tx| tx.account_id == account_id && !linked.contains(&tx.id))
                    .cloned()
                    .collect()
            })
            .await
            .unwrap_or_default())
    }

    async fn record(
        &self,
        owner_id: OwnerId,
        record_id: ReconciliationRecordId,
    ) -> Result<ReconciliationRecord, StoreError> {
        self.read(owner_id, |ledger| {
            ledger
                .reconciliation_records
                .iter()
                .find(|r| r.id == record_id)
                .cloned()
        })
        .await
        .flatten()
        .ok_or_else(|| StoreError::not_found("reconciliation record", record_id))
    }

    async fn update_record(
        &self,
        owner_id: OwnerId,
        record_id: ReconciliationRecordId,
        status: ReconciliationStatus,
        linked_transaction_id: Option<TransactionId>,
    ) -> Result<(), StoreError> {
        let mut ledgers = self.ledgers.write().await;
        let record = ledgers
            .get_mut(&owner_id)
            .and_then(|ledger| {
                ledger
                    .reconciliation_records
                    .iter_mut()
                    .find(|r| r.id == record_id)
            })
            .ok_or_else(|| StoreError::not_found("reconciliation record", record_id))?;

        record.status = status;
        record.linked_transaction_id = linked_transaction_id;
        Ok(())
    }

    async fn apply_outcomes(
        &self,
        owner_id: OwnerId,
        outcomes: &[MatchOutcome],
    ) -> Result<(), StoreError> {
        let mut ledgers = self.ledgers.write().await;
        let ledger = ledgers
            .get_mut(&owner_id)
            .ok_or_else(|| missing_owner(owner_id))?;

        // Resolve every index before touching anything.
        let targets = outcomes
            .iter()
            .map(|outcome| {
                ledger
                    .reconciliation_records
                    .iter()
                    .position(|r| r.id == outcome.record_id)
                    .map(|index| (index, outcome))
                    .ok_or_else(|| {
                        StoreError::not_found("reconciliation record", outcome.record_id)
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (index, outcome) in targets {
            let record = &mut ledger.reconciliation_records[index];
            record.status = outcome.status;
            record.linked_transaction_id = outcome.linked_transaction_id;
        }
        Ok(())
    }
}

impl InsightSink for InMemoryStore {
    async fn emit(&self, insight: Insight) -> Result<(), StoreError> {
        self.insights.write().await.push(insight);
        Ok(())
    }
}
