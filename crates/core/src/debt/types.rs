//! Debt projection data types.

use chrono::NaiveDate;
use finsight_shared::config::DebtConfig;
use finsight_shared::types::DebtId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default hard cap on schedule length (30 years of monthly steps).
pub const DEFAULT_MAX_SCHEDULE_MONTHS: u32 = 360;

/// Options for debt projections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Maximum number of monthly steps in a payoff schedule.
    pub max_months: u32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            max_months: DEFAULT_MAX_SCHEDULE_MONTHS,
        }
    }
}

impl From<&DebtConfig> for ProjectionOptions {
    fn from(config: &DebtConfig) -> Self {
        Self {
            max_months: config.max_schedule_months,
        }
    }
}

/// One month of a payoff schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Step number, starting at 1.
    pub month: u32,
    /// Date of the payment.
    pub date: NaiveDate,
    /// Cash paid this month (principal + interest).
    pub payment: Decimal,
    /// Portion reducing the balance.
    pub principal_portion: Decimal,
    /// Portion covering accrued interest.
    pub interest_portion: Decimal,
    /// Balance left after this payment.
    pub remaining_balance: Decimal,
}

/// Point-in-time view of a single debt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtSummary {
    /// Debt ID.
    pub debt_id: DebtId,
    /// Sum of all payments made.
    pub total_paid: Decimal,
    /// `max(0, principal - total_paid)`.
    pub remaining_balance: Decimal,
    /// Share of the principal already repaid (0-100).
    pub progress_percentage: Decimal,
    /// Simple interest accrued since the start date.
    pub accrued_interest: Decimal,
    /// Installment expressed per month.
    pub monthly_installment: Decimal,
    /// Next installment due on or after the evaluation date.
    pub next_installment_date: Option<NaiveDate>,
    /// True once nothing is left to repay.
    pub is_paid_off: bool,
}

/// Outcome of projecting the regular installment forward.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffEstimate {
    /// Debt ID.
    pub debt_id: DebtId,
    /// Monthly amount used for the projection.
    pub monthly_payment: Decimal,
    /// Number of scheduled months.
    pub months: u32,
    /// Date of the last scheduled payment, when the schedule is non-empty.
    pub payoff_date: Option<NaiveDate>,
    /// Interest paid across the schedule.
    pub total_interest: Decimal,
    /// Cash paid across the schedule.
    pub total_paid: Decimal,
    /// True if the schedule brings the balance to zero.
    pub converges: bool,
}

/// Summary and payoff estimate for one of the owner's debts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtOverview {
    /// Debt ID.
    pub debt_id: DebtId,
    /// Display name.
    pub name: String,
    /// Point-in-time summary.
    pub summary: DebtSummary,
    /// Projection of the regular installment; absent for closed or settled debts.
    pub payoff: Option<PayoffEstimate>,
}
