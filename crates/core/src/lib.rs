//! Core analytics for Finsight.
//!
//! This crate turns an owner's ledger records into derived financial
//! metrics. Computations are pure functions over a snapshot of the ledger;
//! services wrap them with reads from (and the few writes to) external
//! collaborators.
//!
//! # Modules
//!
//! - `ledger` - Ledger record types and the read-only Ledger Store
//! - `debt` - Remaining balance, accrued interest and payoff schedules
//! - `portfolio` - Investment returns, diversification and risk bucket
//! - `budget` - Monthly spending against budgets and threshold alerts
//! - `score` - Weighted composite financial health score and its history
//! - `reconciliation` - Greedy matching of statement lines to transactions
//! - `insight` - Messages emitted to the owner
//! - `store` - Collaborator errors and an in-memory store

pub mod budget;
pub mod debt;
pub mod insight;
pub mod ledger;
pub mod portfolio;
pub mod reconciliation;
pub mod score;
pub mod store;
