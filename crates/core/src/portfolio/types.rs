//! Portfolio analysis data types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use finsight_shared::types::InvestmentId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ledger::InvestmentType;

/// How to value a holding that has never been valued.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValuationFallback {
    /// Use the principal, giving a zero return.
    #[default]
    Principal,
    /// Treat the holding as worthless.
    Zero,
}

/// Options for portfolio analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioOptions {
    /// Evaluation date; holding periods without a maturity end here.
    pub as_of: NaiveDate,
    /// Instrument types counted as high risk.
    pub high_risk_types: Vec<InvestmentType>,
    /// Valuation used when `current_value` is missing.
    pub valuation_fallback: ValuationFallback,
}

impl PortfolioOptions {
    /// Default options evaluated at `as_of`.
    #[must_use]
    pub fn as_of(as_of: NaiveDate) -> Self {
        Self {
            as_of,
            high_risk_types: vec![InvestmentType::Crypto, InvestmentType::Stock],
            valuation_fallback: ValuationFallback::Principal,
        }
    }
}

/// Return metrics for a single holding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentPerformance {
    /// Investment ID.
    pub investment_id: InvestmentId,
    /// Display name.
    pub name: String,
    /// Instrument type.
    pub investment_type: InvestmentType,
    /// Amount invested.
    pub principal: Decimal,
    /// Valuation used (after fallback).
    pub current_value: Decimal,
    /// `current_value - principal`.
    pub return_amount: Decimal,
    /// Return relative to principal, in percent.
    pub return_percentage: Decimal,
    /// Return scaled to twelve months.
    pub annualized_return: Decimal,
    /// Whole months from purchase to maturity (or the evaluation date).
    pub months_held: u32,
    /// True once the maturity date has passed.
    pub matured: bool,
}

/// Allocation to one instrument type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeAllocation {
    /// Principal invested in this type.
    pub amount: Decimal,
    /// Share of total invested, in percent.
    pub percentage_of_total: Decimal,
    /// Number of holdings.
    pub count: usize,
}

/// Coarse portfolio risk bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// No holdings to assess.
    Neutral,
    /// At most 30% of holdings are high risk.
    Low,
    /// More than 30% and at most 60% are high risk.
    Moderate,
    /// More than 60% are high risk.
    High,
}

/// Aggregate portfolio statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    /// Sum of principals.
    pub total_invested: Decimal,
    /// Sum of valuations.
    pub total_current_value: Decimal,
    /// `total_current_value - total_invested`.
    pub total_return: Decimal,
    /// Return relative to total invested, in percent.
    pub total_return_percentage: Decimal,
    /// Allocation per instrument type.
    pub by_type: BTreeMap<InvestmentType, TypeAllocation>,
    /// Spread across instrument types (0-100).
    pub diversification_score: Decimal,
    /// Risk bucket.
    pub risk_assessment: RiskLevel,
    /// Per-holding metrics, in input order.
    pub investments: Vec<InvestmentPerformance>,
}
