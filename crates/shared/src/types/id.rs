//! Typed IDs for type-safe entity references.
//!
//! Using typed IDs prevents accidentally passing a `DebtId` where an `InvestmentId` is expected.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Macro to generate typed ID wrappers.
macro_rules! typed_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Creates a new random ID using UUID v7 (time-ordered).
            #[must_use]
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Creates an ID from an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Returns the inner UUID.
            #[must_use]
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(Self(Uuid::parse_str(s)?))
            }
        }
    };
}

typed_id!(OwnerId, "Unique identifier for the user profile that owns ledger data.");
typed_id!(AccountId, "Unique identifier for a money account.");
typed_id!(TransactionId, "Unique identifier for a ledger transaction.");
typed_id!(CategoryId, "Unique identifier for a spending category.");
typed_id!(DebtId, "Unique identifier for a debt.");
typed_id!(DebtPaymentId, "Unique identifier for a payment made against a debt.");
typed_id!(InvestmentId, "Unique identifier for an investment holding.");
typed_id!(BudgetId, "Unique identifier for a monthly category budget.");
typed_id!(GoalId, "Unique identifier for a savings goal.");
typed_id!(
    GoalContributionId,
    "Unique identifier for a contribution towards a goal."
);
typed_id!(ScoreSnapshotId, "Unique identifier for a financial score snapshot.");
typed_id!(
    ReconciliationRecordId,
    "Unique identifier for an imported bank statement line."
);

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
