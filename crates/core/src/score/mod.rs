//! Composite financial health score.

pub mod calculator;
pub mod error;
pub mod service;
pub mod store;
pub mod types;
pub mod writer;


pub use calculator::ScoreCalculator;
pub use error::ScoreError;
pub use service::ScoreService;
pub use store::ScoreStore;
pub use types::{
    Criterion, CriterionName, FinancialScoreSnapshot, NO_GOALS_SCORE, SAVINGS_WINDOW_MONTHS,
    ScoreInputs, ScoreRating, ScoreResult,
};
pub use writer::SnapshotWriter;
