//! Investment portfolio analytics.

pub mod analyzer;
pub mod service;
pub mod types;


pub use analyzer::PortfolioAnalyzer;
pub use service::PortfolioService;
pub use types::{
    InvestmentPerformance, PortfolioAnalysis, PortfolioOptions, RiskLevel, TypeAllocation,
    ValuationFallback,
};
