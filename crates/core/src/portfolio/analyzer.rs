//! Investment return metrics and portfolio statistics.

use std::collections::{BTreeMap, BTreeSet};

use finsight_shared::calendar::months_between;
use finsight_shared::types::money::{percentage, round_money};
use rust_decimal::Decimal;

use super::types::{
    InvestmentPerformance, PortfolioAnalysis, PortfolioOptions, RiskLevel, TypeAllocation,
    ValuationFallback,
};
use crate::ledger::{Investment, InvestmentType};

const HIGH_RISK_THRESHOLD: Decimal = Decimal::from_parts(6, 0, 0, false, 1); // 0.6
const MODERATE_RISK_THRESHOLD: Decimal = Decimal::from_parts(3, 0, 0, false, 1); // 0.3

/// Analyzes investment holdings.
#[derive(Debug, Clone)]
pub struct PortfolioAnalyzer {
    options: PortfolioOptions,
}

impl PortfolioAnalyzer {
    /// Creates an analyzer with the given options.
    #[must_use]
    pub const fn new(options: PortfolioOptions) -> Self {
        Self { options }
    }

    /// Valuation of a holding after applying the fallback policy.
    #[must_use]
    pub fn current_value(&self, investment: &Investment) -> Decimal {
        investment
            .current_value
            .unwrap_or(match self.options.valuation_fallback {
                ValuationFallback::Principal => investment.principal_amount,
                ValuationFallback::Zero => Decimal::ZERO,
            })
    }

    /// Return metrics for one holding.
    #[must_use]
    pub fn performance(&self, investment: &Investment) -> InvestmentPerformance {
        let current_value = self.current_value(investment);
        let return_amount = current_value - investment.principal_amount;

        let holding_end = investment.maturity_date.unwrap_or(self.options.as_of);
        let months_held = months_between(investment.purchase_date, holding_end);

        let annualized_return = if months_held == 0 {
            Decimal::ZERO
        } else {
            round_money(return_amount / Decimal::from(months_held) * Decimal::from(12))
        };

        InvestmentPerformance {
            investment_id: investment.id,
            name: investment.name.clone(),
            investment_type: investment.investment_type,
            principal: investment.principal_amount,
            current_value,
            return_amount,
            return_percentage: round_money(percentage(
                return_amount,
                investment.principal_amount,
            )),
            annualized_return,
            months_held,
            matured: investment
                .maturity_date
                .is_some_and(|maturity| maturity <= self.options.as_of),
        }
    }

    /// Aggregate statistics over all holdings.
    #[must_use]
    pub fn analyze(&self, investments: &[Investment]) -> PortfolioAnalysis {
        let performances: Vec<InvestmentPerformance> =
            investments.iter().map(|inv| self.performance(inv)).collect();

        let total_invested: Decimal = performances.iter().map(|p| p.principal).sum();
        let total_current_value: Decimal = performances.iter().map(|p| p.current_value).sum();
        let total_return = total_current_value - total_invested;

        let mut by_type: BTreeMap<InvestmentType, TypeAllocation> = BTreeMap::new();
        for perf in &performances {
            let entry = by_type
                .entry(perf.investment_type)
                .or_insert_with(|| TypeAllocation {
                    amount: Decimal::ZERO,
                    percentage_of_total: Decimal::ZERO,
                    count: 0,
                });
            entry.amount += perf.principal;
            entry.count += 1;
        }
        for allocation in by_type.values_mut() {
            allocation.percentage_of_total =
                round_money(percentage(allocation.amount, total_invested));
        }

        PortfolioAnalysis {
            total_invested,
            total_current_value,
            total_return,
            total_return_percentage: round_money(percentage(total_return, total_invested)),
            by_type,
            diversification_score: Self::diversification_score(investments),
            risk_assessment: self.risk_assessment(investments),
            investments: performances,
        }
    }

    /// `min(100, distinct types / 6 * 100)`, rounded to two places.
    #[must_use]
    pub fn diversification_score(investments: &[Investment]) -> Decimal {
        let distinct: BTreeSet<InvestmentType> =
            investments.iter().map(|inv| inv.investment_type).collect();

        let score = Decimal::from(distinct.len())
            / Decimal::from(InvestmentType::ALL.len())
            * Decimal::ONE_HUNDRED;
        round_money(score.min(Decimal::ONE_HUNDRED))
    }

    /// Risk bucket from the share of holdings (by count) in high-risk types.
    #[must_use]
    pub fn risk_assessment(&self, investments: &[Investment]) -> RiskLevel {
        if investments.is_empty() {
            return RiskLevel::Neutral;
        }

        let high_risk = investments
            .iter()
            .filter(|inv| self.options.high_risk_types.contains(&inv.investment_type))
            .count();
        let ratio = Decimal::from(high_risk) / Decimal::from(investments.len());

        if ratio > HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if ratio > MODERATE_RISK_THRESHOLD {
            RiskLevel::Moderate
        } else {
            RiskLevel::Low
        }
    }
}
