//! Assembles the analyzer's JSON report.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use finsight_core::budget::{AlertOptions, BudgetAlert, BudgetService, BudgetUsage};
use finsight_core::debt::{DebtOverview, DebtService, ProjectionOptions};
use finsight_core::ledger::{Account, LedgerStore};
use finsight_core::portfolio::{PortfolioAnalysis, PortfolioOptions, PortfolioService};
use finsight_core::reconciliation::{MatchOptions, ReconciliationPass, ReconciliationService};
use finsight_core::score::{ScoreResult, ScoreService};
use finsight_core::store::InMemoryStore;
use finsight_shared::types::{AccountId, Money, OwnerId};
use finsight_shared::{AppConfig, AppResult};

/// Everything the engine derives for one owner at one date.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub owner_id: OwnerId,
    pub as_of: NaiveDate,
    pub cash: Vec<Money>,
    pub overdrawn_accounts: Vec<AccountId>,
    pub score: ScoreResult,
    pub portfolio: PortfolioAnalysis,
    pub budget_usage: Vec<BudgetUsage>,
    pub budget_alerts: Vec<BudgetAlert>,
    pub debts: Vec<DebtOverview>,
    pub reconciliation: Vec<ReconciliationPass>,
}

/// Runs every analysis read-only. Reconciliation is a dry run per account and
/// no score snapshot is written.
pub async fn build(
    store: &Arc<InMemoryStore>,
    config: &AppConfig,
    owner_id: OwnerId,
    as_of: NaiveDate,
) -> AppResult<AnalysisReport> {
    let scores = ScoreService::new(
        Arc::clone(store),
        Arc::clone(store),
        config.score.history_limit,
    );
    let portfolio = PortfolioService::new(Arc::clone(store));
    let budgets = BudgetService::new(Arc::clone(store), AlertOptions::from(&config.budget));
    let debts = DebtService::new(Arc::clone(store), ProjectionOptions::from(&config.debt));
    let reconciliation = ReconciliationService::new(
        Arc::clone(store),
        Arc::clone(store),
        MatchOptions::from(&config.reconciliation),
    );

    let accounts = store.accounts(owner_id).await?;
    let score = scores.preview(owner_id, as_of).await?;
    let portfolio = portfolio
        .analyze(owner_id, PortfolioOptions::as_of(as_of))
        .await?;
    let budget_usage = budgets.usage(owner_id, as_of).await?;
    let budget_alerts = budgets.generate_alerts(owner_id, as_of).await?;
    let debts = debts.overview(owner_id, as_of).await?;

    let mut passes = Vec::with_capacity(accounts.len());
    for account in &accounts {
        passes.push(reconciliation.dry_run(owner_id, account.id).await?);
    }

    Ok(AnalysisReport {
        owner_id,
        as_of,
        cash: Account::totals_by_currency(&accounts),
        overdrawn_accounts: accounts
            .iter()
            .filter(|a| a.is_overdrawn())
            .map(|a| a.id)
            .collect(),
        score,
        portfolio,
        budget_usage,
        budget_alerts,
        debts,
        reconciliation: passes,
    })
}
