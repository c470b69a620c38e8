//! Financial health score data types.

use std::fmt;

use chrono::{DateTime, Utc};
use finsight_shared::types::{OwnerId, ScoreSnapshotId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Months of expenses weighed against income for the savings rate.
pub const SAVINGS_WINDOW_MONTHS: u32 = 3;

/// Score given to an owner with no goals at all.
pub const NO_GOALS_SCORE: Decimal = Decimal::from_parts(50, 0, 0, false, 0);

/// One of the four weighted sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriterionName {
    /// Share of income left after expenses.
    SavingsRate,
    /// Outstanding debt relative to annual income.
    DebtRatio,
    /// Invested principal relative to a fifth of annual income.
    Investment,
    /// Contributions relative to goal targets.
    GoalProgress,
}

impl CriterionName {
    /// All criteria, in snapshot order.
    pub const ALL: [Self; 4] = [
        Self::SavingsRate,
        Self::DebtRatio,
        Self::Investment,
        Self::GoalProgress,
    ];

    /// Fixed weight of this criterion. The four weights sum to one.
    #[must_use]
    pub const fn weight(self) -> Decimal {
        match self {
            Self::SavingsRate => Decimal::from_parts(35, 0, 0, false, 2),
            Self::DebtRatio | Self::Investment => Decimal::from_parts(25, 0, 0, false, 2),
            Self::GoalProgress => Decimal::from_parts(15, 0, 0, false, 2),
        }
    }

    /// Stable string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SavingsRate => "savings_rate",
            Self::DebtRatio => "debt_ratio",
            Self::Investment => "investment",
            Self::GoalProgress => "goal_progress",
        }
    }
}

impl fmt::Display for CriterionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, weighted sub-score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Criterion name.
    pub name: CriterionName,
    /// Sub-score in `[0, 100]`, two decimal places.
    pub score: Decimal,
    /// Weight in `[0, 1]`.
    pub weight: Decimal,
    /// Human-readable explanation.
    pub details: String,
}

/// Ledger aggregates the score is computed from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInputs {
    /// Monthly income, if known and positive.
    pub monthly_income: Option<Decimal>,
    /// Expenses over the trailing savings window.
    pub trailing_expenses: Decimal,
    /// Remaining balance across active debts.
    pub active_debt_remaining: Decimal,
    /// Invested principal across all holdings.
    pub total_invested: Decimal,
    /// Number of goals.
    pub goal_count: usize,
    /// Sum of goal targets.
    pub goal_targets: Decimal,
    /// Sum of goal contributions.
    pub goal_contributions: Decimal,
}

/// Coarse label for a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreRating {
    /// 80 and above.
    Excellent,
    /// 60 to 79.
    Good,
    /// 40 to 59.
    Fair,
    /// Below 40.
    Poor,
}

impl ScoreRating {
    /// Rating for a composite score.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60..=79 => Self::Good,
            40..=59 => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// A computed score that has not been persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Composite score in `[0, 100]`.
    pub score: u8,
    /// Rating label.
    pub rating: ScoreRating,
    /// Sub-scores, in [`CriterionName::ALL`] order.
    pub criteria: Vec<Criterion>,
}

/// Persisted score. Never mutated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinancialScoreSnapshot {
    /// Snapshot ID.
    pub id: ScoreSnapshotId,
    /// Owner ID.
    pub owner_id: OwnerId,
    /// Composite score in `[0, 100]`.
    pub score: u8,
    /// Sub-scores.
    pub criteria: Vec<Criterion>,
    /// When the score was computed.
    pub generated_at: DateTime<Utc>,
}

impl FinancialScoreSnapshot {
    /// Rating label for the stored score.
    #[must_use]
    pub const fn rating(&self) -> ScoreRating {
        ScoreRating::from_score(self.score)
    }
}
