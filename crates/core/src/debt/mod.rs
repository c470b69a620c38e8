//! Debt balances, accrued interest and payoff projections.

pub mod error;
pub mod projector;
pub mod service;
pub mod types;


pub use error::DebtError;
pub use projector::{DebtProjector, PayoffSchedule};
pub use service::DebtService;
pub use types::{
    DEFAULT_MAX_SCHEDULE_MONTHS, DebtOverview, DebtSummary, PayoffEstimate, ProjectionOptions,
    ScheduleEntry,
};
