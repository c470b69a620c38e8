//! Shared fixtures for service integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use finsight_core::insight::{Insight, InsightSink};
use finsight_core::ledger::{
    Account, Budget, Category, Debt, DebtPayment, DebtStatus, FinancialProfile, Goal,
    GoalContribution, InstallmentFrequency, Investment, InvestmentType, LedgerStore, Transaction,
    TransactionFilter, TransactionType,
};
use finsight_core::reconciliation::{
    MatchOutcome, ReconciliationRecord, ReconciliationStatus, ReconciliationStore,
};
use finsight_core::score::{FinancialScoreSnapshot, ScoreStore};
use finsight_core::store::{Collaborator, InMemoryStore, LedgerSnapshot, StoreError};
use finsight_shared::types::{
    AccountId, BudgetId, CategoryId, Currency, DebtId, DebtPaymentId, GoalContributionId, GoalId,
    InvestmentId, Money, OwnerId, ReconciliationRecordId, TransactionId, YearMonth,
};
use rust_decimal::Decimal;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn ledger(monthly_income: Option<Decimal>) -> LedgerSnapshot {
    let owner_id = OwnerId::new();
    let mut snapshot = LedgerSnapshot::new(FinancialProfile {
        owner_id,
        monthly_income,
        currency: Currency::Idr,
    });
    snapshot.accounts.push(Account {
        id: AccountId::new(),
        owner_id,
        name: "Main".to_string(),
        balance: Money::new(Decimal::ZERO, Currency::Idr),
    });
    snapshot
}

pub fn account_id(snapshot: &LedgerSnapshot) -> AccountId {
    snapshot.accounts[0].id
}

pub fn category(snapshot: &mut LedgerSnapshot, name: &str) -> CategoryId {
    let id = CategoryId::new();
    snapshot.categories.push(Category {
        id,
        name: name.to_string(),
    });
    id
}

pub fn expense(
    snapshot: &mut LedgerSnapshot,
    category_id: Option<CategoryId>,
    amount: Decimal,
    on: NaiveDate,
) -> TransactionId {
    let id = TransactionId::new();
    let account_id = account_id(snapshot);
    snapshot.transactions.push(Transaction {
        id,
        account_id,
        category_id,
        amount,
        transaction_type: TransactionType::Expense,
        date: on,
        description: None,
    });
    id
}

pub fn budget(
    snapshot: &mut LedgerSnapshot,
    category_id: CategoryId,
    month: YearMonth,
    limit: Decimal,
) -> BudgetId {
    let id = BudgetId::new();
    snapshot.budgets.push(Budget {
        id,
        category_id,
        month,
        amount_limit: limit,
    });
    id
}

pub fn debt(
    snapshot: &mut LedgerSnapshot,
    principal: Decimal,
    rate: Option<Decimal>,
    installment: Decimal,
    start: NaiveDate,
) -> DebtId {
    let id = DebtId::new();
    snapshot.debts.push(Debt {
        id,
        name: "Loan".to_string(),
        principal_amount: principal,
        current_balance: principal,
        interest_rate_annual: rate,
        installment_amount: installment,
        installment_frequency: InstallmentFrequency::Monthly,
        start_date: start,
        status: DebtStatus::Active,
    });
    id
}

pub fn payment(snapshot: &mut LedgerSnapshot, debt_id: DebtId, amount: Decimal, on: NaiveDate) {
    snapshot.debt_payments.push(DebtPayment {
        id: DebtPaymentId::new(),
        debt_id,
        amount,
        payment_date: on,
    });
}

pub fn investment(
    snapshot: &mut LedgerSnapshot,
    investment_type: InvestmentType,
    principal: Decimal,
    current_value: Option<Decimal>,
    purchased: NaiveDate,
) {
    snapshot.investments.push(Investment {
        id: InvestmentId::new(),
        name: investment_type.to_string(),
        investment_type,
        principal_amount: principal,
        current_value,
        purchase_date: purchased,
        maturity_date: None,
    });
}

pub fn goal(snapshot: &mut LedgerSnapshot, target: Decimal, contributions: &[Decimal]) -> GoalId {
    let id = GoalId::new();
    snapshot.goals.push(Goal {
        id,
        name: "Emergency fund".to_string(),
        target_amount: target,
        current_saved_amount: contributions.iter().sum(),
        target_date: None,
    });
    for amount in contributions {
        snapshot.goal_contributions.push(GoalContribution {
            id: GoalContributionId::new(),
            goal_id: id,
            amount: *amount,
        });
    }
    id
}

pub fn statement_line(
    snapshot: &mut LedgerSnapshot,
    amount: Decimal,
    on: NaiveDate,
) -> ReconciliationRecordId {
    let id = ReconciliationRecordId::new();
    let account_id = account_id(snapshot);
    snapshot.reconciliation_records.push(ReconciliationRecord {
        id,
        account_id,
        external_amount: amount,
        external_date: on,
        external_description: "BANK TRANSFER".to_string(),
        status: ReconciliationStatus::Pending,
        linked_transaction_id: None,
    });
    id
}

/// Store double whose every call fails as unavailable.
pub struct UnavailableStore;

fn down(collaborator: Collaborator) -> StoreError {
    StoreError::unavailable(collaborator, "connection refused")
}

impl LedgerStore for UnavailableStore {
    async fn profile(&self, _owner_id: OwnerId) -> Result<FinancialProfile, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn accounts(&self, _owner_id: OwnerId) -> Result<Vec<Account>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn transactions(
        &self,
        _owner_id: OwnerId,
        _filter: TransactionFilter,
    ) -> Result<Vec<Transaction>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn categories(&self, _owner_id: OwnerId) -> Result<Vec<Category>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn debts(&self, _owner_id: OwnerId) -> Result<Vec<Debt>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn debt_payments(&self, _owner_id: OwnerId) -> Result<Vec<DebtPayment>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn investments(&self, _owner_id: OwnerId) -> Result<Vec<Investment>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn budgets(
        &self,
        _owner_id: OwnerId,
        _month: Option<YearMonth>,
    ) -> Result<Vec<Budget>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn goals(&self, _owner_id: OwnerId) -> Result<Vec<Goal>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }

    async fn goal_contributions(
        &self,
        _owner_id: OwnerId,
    ) -> Result<Vec<GoalContribution>, StoreError> {
        Err(down(Collaborator::LedgerStore))
    }
}

impl ScoreStore for UnavailableStore {
    async fn insert(&self, _snapshot: FinancialScoreSnapshot) -> Result<(), StoreError> {
        Err(down(Collaborator::ScoreStore))
    }

    async fn latest(
        &self,
        _owner_id: OwnerId,
    ) -> Result<Option<FinancialScoreSnapshot>, StoreError> {
        Err(down(Collaborator::ScoreStore))
    }

    async fn history(
        &self,
        _owner_id: OwnerId,
        _limit: usize,
    ) -> Result<Vec<FinancialScoreSnapshot>, StoreError> {
        Err(down(Collaborator::ScoreStore))
    }
}

impl ReconciliationStore for UnavailableStore {
    async fn pending_records(
        &self,
        _owner_id: OwnerId,
        _account_id: AccountId,
    ) -> Result<Vec<ReconciliationRecord>, StoreError> {
        Err(down(Collaborator::ReconciliationStore))
    }

    async fn unreconciled_transactions(
        &self,
        _owner_id: OwnerId,
        _account_id: AccountId,
    ) -> Result<Vec<Transaction>, StoreError> {
        Err(down(Collaborator::ReconciliationStore))
    }

    async fn record(
        &self,
        _owner_id: OwnerId,
        _record_id: ReconciliationRecordId,
    ) -> Result<ReconciliationRecord, StoreError> {
        Err(down(Collaborator::ReconciliationStore))
    }

    async fn update_record(
        &self,
        _owner_id: OwnerId,
        _record_id: ReconciliationRecordId,
        _status: ReconciliationStatus,
        _linked_transaction_id: Option<TransactionId>,
    ) -> Result<(), StoreError> {
        Err(down(Collaborator::ReconciliationStore))
    }

    async fn apply_outcomes(
        &self,
        _owner_id: OwnerId,
        _outcomes: &[MatchOutcome],
    ) -> Result<(), StoreError> {
        Err(down(Collaborator::ReconciliationStore))
    }
}

/// Reconciliation store that reads from an in-memory store but rejects writes.
pub struct ReadOnlyReconciliationStore(pub Arc<InMemoryStore>);

impl ReconciliationStore for ReadOnlyReconciliationStore {
    async fn pending_records(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> Result<Vec<ReconciliationRecord>, StoreError> {
        self.0.pending_records(owner_id, account_id).await
    }

    async fn unreconciled_transactions(
        &self,
        owner_id: OwnerId,
        account_id: AccountId,
    ) -> Result<Vec<Transaction>, StoreError> {
        self.0.unreconciled_transactions(owner_id, account_id).await
    }

    async fn record(
        &self,
        owner_id: OwnerId,
        record_id: ReconciliationRecordId,
    ) -> Result<ReconciliationRecord, StoreError> {
        self.0.record(owner_id, record_id).await
    }

    async fn update_record(
        &self,
        _owner_id: OwnerId,
        _record_id: ReconciliationRecordId,
        _status: ReconciliationStatus,
        _linked_transaction_id: Option<TransactionId>,
    ) -> Result<(), StoreError> {
        Err(down(Collaborator::ReconciliationStore))
    }

    async fn apply_outcomes(
        &self,
        _owner_id: OwnerId,
        _outcomes: &[MatchOutcome],
    ) -> Result<(), StoreError> {
        Err(down(Collaborator::ReconciliationStore))
    }
}

impl InsightSink for UnavailableStore {
    async fn emit(&self, _insight: Insight) -> Result<(), StoreError> {
        Err(down(Collaborator::InsightSink))
    }
}
