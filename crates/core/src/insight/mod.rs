//! Insights delivered to the owner and the sink that receives them.

use std::fmt;
use std::future::Future;

use chrono::{DateTime, Utc};
use finsight_shared::types::{AccountId, OwnerId};
use serde::{Deserialize, Serialize};

use crate::store::StoreError;

/// What an insight is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// A reconciliation pass left statement lines mismatched.
    ReconciliationMismatch,
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReconciliationMismatch => f.write_str("reconciliation_mismatch"),
        }
    }
}

/// A message for the owner derived from a computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insight {
    /// Owner the insight is for.
    pub owner_id: OwnerId,
    /// Account the insight concerns, if any.
    pub account_id: Option<AccountId>,
    /// Insight kind.
    pub kind: InsightKind,
    /// Number of items the insight summarizes.
    pub count: usize,
    /// Human-readable message.
    pub message: String,
    /// When the insight was produced.
    pub generated_at: DateTime<Utc>,
}

/// Insight Sink collaborator.
pub trait InsightSink: Send + Sync {
    /// Deliver one insight.
    fn emit(&self, insight: Insight) -> impl Future<Output = Result<(), StoreError>> + Send;
}
