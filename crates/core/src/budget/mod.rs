//! Budget tracking and threshold alerts.

pub mod error;
pub mod service;
pub mod tracker;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::BudgetError;
pub use service::BudgetService;
pub use tracker::BudgetTracker;
pub use types::{
    AlertOptions, AlertSeverity, BudgetAlert, BudgetUsage, DEFAULT_ALERT_THRESHOLD_PERCENT,
    UNCATEGORIZED,
};
