//! Sub-score formulas and weighted composition.

use finsight_shared::types::OwnerId;
use finsight_shared::types::money::{clamp, clamp_percent, round_money};
use rayon::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{
    Criterion, CriterionName, NO_GOALS_SCORE, SAVINGS_WINDOW_MONTHS, ScoreInputs, ScoreRating,
    ScoreResult,
};

/// A 20% savings rate maps to a full score.
const SAVINGS_RATE_MULTIPLIER: Decimal = Decimal::from_parts(5, 0, 0, false, 0);

/// Investment target as a share of annual income.
const INVESTMENT_TARGET_SHARE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Stateless score calculator.
pub struct ScoreCalculator;

impl ScoreCalculator {
    /// Savings-rate sub-score over the trailing window.
    ///
    /// `rate = (income * 3 - expenses) / (income * 3) * 100`, scored as
    /// `clamp(rate * 5, 0, 100)`. Zero without income.
    #[must_use]
    pub fn savings_rate_score(
        monthly_income: Option<Decimal>,
        trailing_expenses: Decimal,
    ) -> Decimal {
        let Some(income) = positive(monthly_income) else {
            return Decimal::ZERO;
        };

        let window_income = income * Decimal::from(SAVINGS_WINDOW_MONTHS);
        let savings = window_income - trailing_expenses;
        let rate = savings / window_income * Decimal::ONE_HUNDRED;

        round_money(clamp_percent(rate * SAVINGS_RATE_MULTIPLIER))
    }

    /// Debt-ratio sub-score: `clamp(100 - debt / annual income * 100, 0, 100)`.
    ///
    /// Without income there is no burden to measure and the score is 100.
    #[must_use]
    pub fn debt_ratio_score(
        monthly_income: Option<Decimal>,
        active_debt_remaining: Decimal,
    ) -> Decimal {
        let Some(income) = positive(monthly_income) else {
            return Decimal::ONE_HUNDRED;
        };

        let ratio = active_debt_remaining / (income * MONTHS_PER_YEAR);
        round_money(clamp_percent(Decimal::ONE_HUNDRED - ratio * Decimal::ONE_HUNDRED))
    }

    /// Investment sub-score against a target of 20% of annual income.
    #[must_use]
    pub fn investment_score(monthly_income: Option<Decimal>, total_invested: Decimal) -> Decimal {
        let Some(income) = positive(monthly_income) else {
            return Decimal::ZERO;
        };
        if total_invested <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        let target = income * MONTHS_PER_YEAR * INVESTMENT_TARGET_SHARE;
        let progress = clamp(total_invested / target, Decimal::ZERO, Decimal::ONE);
        round_money(progress * Decimal::ONE_HUNDRED)
    }

    /// Goal-progress sub-score: contributions over targets, in percent.
    ///
    /// An owner with no goals scores 50. Goals whose targets sum to zero
    /// score 0.
    #[must_use]
    pub fn goal_progress_score(
        goal_count: usize,
        contributions: Decimal,
        targets: Decimal,
    ) -> Decimal {
        if goal_count == 0 {
            return NO_GOALS_SCORE;
        }
        if targets <= Decimal::ZERO {
            return Decimal::ZERO;
        }

        round_money(clamp_percent(contributions / targets * Decimal::ONE_HUNDRED))
    }

    /// The four weighted criteria, in [`CriterionName::ALL`] order.
    #[must_use]
    pub fn criteria(inputs: &ScoreInputs) -> Vec<Criterion> {
        let income = positive(inputs.monthly_income);

        let savings = Self::savings_rate_score(income, inputs.trailing_expenses);
        let debt = Self::debt_ratio_score(income, inputs.active_debt_remaining);
        let investment = Self::investment_score(income, inputs.total_invested);
        let goals = Self::goal_progress_score(
            inputs.goal_count,
            inputs.goal_contributions,
            inputs.goal_targets,
        );

        let savings_details = if income.is_some() {
            format!(
                "Savings rate over the last {SAVINGS_WINDOW_MONTHS} months, scaled so 20% scores 100"
            )
        } else {
            "No monthly income recorded".to_string()
        };
        let debt_details = if income.is_some() {
            "Active debt remaining relative to annual income".to_string()
        } else {
            "No monthly income recorded; debt burden not assessed".to_string()
        };
        let investment_details = if income.is_some() {
            "Invested principal relative to 20% of annual income".to_string()
        } else {
            "No monthly income recorded".to_string()
        };
        let goal_details = if inputs.goal_count == 0 {
            "No goals set".to_string()
        } else {
            format!("Contributions toward {} goal(s)", inputs.goal_count)
        };

        vec![
            criterion(CriterionName::SavingsRate, savings, savings_details),
            criterion(CriterionName::DebtRatio, debt, debt_details),
            criterion(CriterionName::Investment, investment, investment_details),
            criterion(CriterionName::GoalProgress, goals, goal_details),
        ]
    }

    /// Weighted sum of the criteria, rounded half away from zero.
    #[must_use]
    pub fn compose(criteria: &[Criterion]) -> u8 {
        let total: Decimal = criteria.iter().map(|c| c.score * c.weight).sum();
        clamp_percent(total)
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_u8()
            .unwrap_or(0)
    }

    /// Full score for one owner.
    #[must_use]
    pub fn compute(inputs: &ScoreInputs) -> ScoreResult {
        let criteria = Self::criteria(inputs);
        let score = Self::compose(&criteria);

        ScoreResult {
            score,
            rating: ScoreRating::from_score(score),
            criteria,
        }
    }

    /// Scores many owners in parallel. Output order matches input order.
    #[must_use]
    pub fn compute_batch(inputs: &[(OwnerId, ScoreInputs)]) -> Vec<(OwnerId, ScoreResult)> {
        inputs
            .par_iter()
            .map(|(owner_id, inputs)| (*owner_id, Self::compute(inputs)))
            .collect()
    }
}

fn positive(value: Option<Decimal>) -> Option<Decimal> {
    value.filter(|v| *v > Decimal::ZERO)
}

fn criterion(name: CriterionName, score: Decimal, details: String) -> Criterion {
    Criterion {
        name,
        score,
        weight: name.weight(),
        details,
    }
}
