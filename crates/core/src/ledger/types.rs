//! Ledger record types read by the analytics engine.
//!
//! These records are owned and validated by the ledger subsystem. The engine
//! only reads them; nothing here is mutated during a computation.

use chrono::NaiveDate;
use finsight_shared::types::{
    AccountId, BudgetId, CategoryId, Currency, DebtId, DebtPaymentId, GoalContributionId, GoalId,
    InvestmentId, Money, OwnerId, TransactionId, YearMonth,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Financial profile of the owner whose ledger is analyzed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    /// Owner ID.
    pub owner_id: OwnerId,
    /// Declared monthly income; `None` when the user has not set it.
    pub monthly_income: Option<Decimal>,
    /// Reporting currency.
    pub currency: Currency,
}

impl FinancialProfile {
    /// Monthly income when it is set and positive.
    #[must_use]
    pub fn known_income(&self) -> Option<Decimal> {
        self.monthly_income.filter(|income| *income > Decimal::ZERO)
    }
}

/// A money account (bank, wallet, card).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account ID.
    pub id: AccountId,
    /// Owner ID.
    pub owner_id: OwnerId,
    /// Display name.
    pub name: String,
    /// Current balance as tracked by the ledger, in the account's currency.
    pub balance: Money,
}

impl Account {
    /// True when the balance is below zero.
    #[must_use]
    pub fn is_overdrawn(&self) -> bool {
        self.balance.is_negative()
    }

    /// Sums balances per currency, in order of first appearance.
    ///
    /// Currencies are never mixed; each gets its own total.
    #[must_use]
    pub fn totals_by_currency(accounts: &[Self]) -> Vec<Money> {
        let mut totals: Vec<Money> = Vec::new();
        for account in accounts {
            let merged = totals
                .iter_mut()
                .find_map(|total| total.checked_add(account.balance).map(|sum| (total, sum)));
            match merged {
                Some((total, sum)) => *total = sum,
                None => totals.push(account.balance),
            }
        }
        totals
    }
}

/// Direction of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
    /// Movement between the owner's own accounts.
    Transfer,
}

impl TransactionType {
    /// Returns the string representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
            Self::Transfer => "transfer",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A ledger transaction. Amounts are always non-negative; direction comes from the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: TransactionId,
    /// Account the transaction was recorded on.
    pub account_id: AccountId,
    /// Optional spending category.
    pub category_id: Option<CategoryId>,
    /// Amount (>= 0).
    pub amount: Decimal,
    /// Transaction type.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// Booking date.
    pub date: NaiveDate,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
}

impl Transaction {
    /// Returns true for expense transactions.
    #[must_use]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }
}

/// A spending category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Category ID.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}

/// How often a debt installment falls due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstallmentFrequency {
    /// Every month.
    Monthly,
    /// Every three months.
    Quarterly,
    /// Every six months.
    Semiannual,
    /// Once a year.
    Annual,
}

impl InstallmentFrequency {
    /// Length of one installment period in months.
    #[must_use]
    pub const fn months(self) -> u32 {
        match self {
            Self::Monthly => 1,
            Self::Quarterly => 3,
            Self::Semiannual => 6,
            Self::Annual => 12,
        }
    }
}

/// Lifecycle status of a debt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DebtStatus {
    /// Still being repaid.
    Active,
    /// Settled or written off.
    Closed,
}

/// A debt owed by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Debt {
    /// Debt ID.
    pub id: DebtId,
    /// Display name.
    pub name: String,
    /// Original principal.
    pub principal_amount: Decimal,
    /// Balance as tracked by the ledger (0 <= balance <= principal).
    pub current_balance: Decimal,
    /// Annual interest rate in percent (12 means 12%/yr); `None` for interest-free debts.
    pub interest_rate_annual: Option<Decimal>,
    /// Installment due each period.
    pub installment_amount: Decimal,
    /// Installment period.
    pub installment_frequency: InstallmentFrequency,
    /// Date the debt started.
    pub start_date: NaiveDate,
    /// Lifecycle status.
    pub status: DebtStatus,
}

impl Debt {
    /// Returns true if the debt is still being repaid.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == DebtStatus::Active
    }

    /// Annual rate when set and non-zero.
    #[must_use]
    pub fn rate(&self) -> Option<Decimal> {
        self.interest_rate_annual.filter(|rate| !rate.is_zero())
    }
}

/// A payment made against a debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayment {
    /// Payment ID.
    pub id: DebtPaymentId,
    /// Debt the payment applies to.
    pub debt_id: DebtId,
    /// Amount paid.
    pub amount: Decimal,
    /// Date paid.
    pub payment_date: NaiveDate,
}

/// Kind of investment instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentType {
    /// Listed equity.
    Stock,
    /// Fixed income.
    Bond,
    /// Bank term deposit.
    TermDeposit,
    /// Pooled fund.
    MutualFund,
    /// Crypto asset.
    Crypto,
    /// Anything else.
    Other,
}

impl InvestmentType {
    /// Every recognized investment type.
    pub const ALL: [Self; 6] = [
        Self::Stock,
        Self::Bond,
        Self::TermDeposit,
        Self::MutualFund,
        Self::Crypto,
        Self::Other,
    ];

    /// Returns the string representation of the type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Bond => "bond",
            Self::TermDeposit => "term_deposit",
            Self::MutualFund => "mutual_fund",
            Self::Crypto => "crypto",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An investment holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Investment {
    /// Investment ID.
    pub id: InvestmentId,
    /// Display name.
    pub name: String,
    /// Instrument type.
    #[serde(rename = "type")]
    pub investment_type: InvestmentType,
    /// Amount originally invested.
    pub principal_amount: Decimal,
    /// Latest valuation; `None` when never valued.
    pub current_value: Option<Decimal>,
    /// Purchase date.
    pub purchase_date: NaiveDate,
    /// Maturity date for fixed-term instruments.
    pub maturity_date: Option<NaiveDate>,
}

/// Monthly spending limit for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    /// Budget ID.
    pub id: BudgetId,
    /// Category the limit applies to.
    pub category_id: CategoryId,
    /// Month the budget covers.
    pub month: YearMonth,
    /// Spending limit.
    pub amount_limit: Decimal,
}

/// A savings goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    /// Goal ID.
    pub id: GoalId,
    /// Display name.
    pub name: String,
    /// Amount to reach.
    pub target_amount: Decimal,
    /// Amount saved so far, as tracked by the ledger.
    pub current_saved_amount: Decimal,
    /// Optional deadline.
    pub target_date: Option<NaiveDate>,
}

/// Money put towards a goal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalContribution {
    /// Contribution ID.
    pub id: GoalContributionId,
    /// Goal the contribution belongs to.
    pub goal_id: GoalId,
    /// Amount contributed.
    pub amount: Decimal,
}
