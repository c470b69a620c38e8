//! Budget tracking data types.

use finsight_shared::config::BudgetConfig;
use finsight_shared::types::{BudgetId, CategoryId, YearMonth};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Usage percentage at which alerts start firing by default.
pub const DEFAULT_ALERT_THRESHOLD_PERCENT: Decimal = Decimal::from_parts(90, 0, 0, false, 0);

/// Category name used when a budget's category is unknown.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Options for budget alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertOptions {
    /// Minimum usage percentage (inclusive) that raises an alert.
    pub threshold_percent: Decimal,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            threshold_percent: DEFAULT_ALERT_THRESHOLD_PERCENT,
        }
    }
}

impl From<&BudgetConfig> for AlertOptions {
    fn from(config: &BudgetConfig) -> Self {
        Self {
            threshold_percent: config.alert_threshold_percent,
        }
    }
}

/// Alert severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Usage is at or above the threshold but below the limit.
    Warning,
    /// The limit has been reached.
    Critical,
}

/// Spending against one budget.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetUsage {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Category ID.
    pub category_id: CategoryId,
    /// Category display name.
    pub category: String,
    /// Budget month.
    pub month: YearMonth,
    /// Spending limit.
    pub limit: Decimal,
    /// Expenses recorded in the category during the month.
    pub spent: Decimal,
    /// `spent / limit * 100`, capped at 100.
    pub usage_percentage: Decimal,
    /// `max(0, limit - spent)`.
    pub remaining: Decimal,
    /// True if spending strictly exceeds the limit.
    pub is_over_budget: bool,
}

/// Alert raised for a budget near or over its limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetAlert {
    /// Budget ID.
    pub budget_id: BudgetId,
    /// Category ID.
    pub category_id: CategoryId,
    /// Category display name.
    pub category: String,
    /// Usage percentage.
    pub percentage: Decimal,
    /// Amount left before the limit.
    pub remaining: Decimal,
    /// Severity.
    pub severity: AlertSeverity,
}
