//! Ledger records and the read-only store the engine pulls them from.

pub mod store;
pub mod types;

pub use store::{LedgerStore, TransactionFilter};
pub use types::{
    Account, Budget, Category, Debt, DebtPayment, DebtStatus, FinancialProfile, Goal,
    GoalContribution, InstallmentFrequency, Investment, InvestmentType, Transaction,
    TransactionType,
};
