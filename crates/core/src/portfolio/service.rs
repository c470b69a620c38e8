//! Portfolio service: loads holdings from the ledger and analyzes them.

use std::sync::Arc;

use finsight_shared::types::OwnerId;
use tracing::debug;

use super::analyzer::PortfolioAnalyzer;
use super::types::{PortfolioAnalysis, PortfolioOptions};
use crate::ledger::LedgerStore;
use crate::store::StoreError;

/// Portfolio analysis over an owner's ledger.
pub struct PortfolioService<L: LedgerStore> {
    ledger: Arc<L>,
}

impl<L: LedgerStore> PortfolioService<L> {
    /// Create a new portfolio service.
    #[must_use]
    pub const fn new(ledger: Arc<L>) -> Self {
        Self { ledger }
    }

    /// Analyze all of the owner's holdings.
    ///
    /// # Errors
    ///
    /// Returns a store error if the ledger cannot be read.
    pub async fn analyze(
        &self,
        owner_id: OwnerId,
        options: PortfolioOptions,
    ) -> Result<PortfolioAnalysis, StoreError> {
        let investments = self.ledger.investments(owner_id).await?;
        let analysis = PortfolioAnalyzer::new(options).analyze(&investments);

        debug!(
            owner_id = %owner_id,
            holdings = investments.len(),
            total_invested = %analysis.total_invested,
            risk = ?analysis.risk_assessment,
            "Analyzed portfolio"
        );

        Ok(analysis)
    }
}
