//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration.
    #[serde(default)]
    pub log: LogConfig,
    /// Debt projection tunables.
    #[serde(default)]
    pub debt: DebtConfig,
    /// Budget alert tunables.
    #[serde(default)]
    pub budget: BudgetConfig,
    /// Reconciliation matcher tunables.
    #[serde(default)]
    pub reconciliation: ReconciliationConfig,
    /// Score history settings.
    #[serde(default)]
    pub score: ScoreConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    "finsight=info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
        }
    }
}

/// Debt projection configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DebtConfig {
    /// Hard cap on payoff schedule length.
    #[serde(default = "default_max_schedule_months")]
    pub max_schedule_months: u32,
}

fn default_max_schedule_months() -> u32 {
    360 // 30 years
}

impl Default for DebtConfig {
    fn default() -> Self {
        Self {
            max_schedule_months: default_max_schedule_months(),
        }
    }
}

/// Budget alert configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BudgetConfig {
    /// Usage percentage at which a budget starts raising alerts.
    #[serde(default = "default_alert_threshold")]
    pub alert_threshold_percent: Decimal,
}

fn default_alert_threshold() -> Decimal {
    Decimal::from(90)
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            alert_threshold_percent: default_alert_threshold(),
        }
    }
}

/// Reconciliation configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReconciliationConfig {
    /// Maximum absolute difference for two amounts to be considered equal.
    #[serde(default = "default_amount_tolerance")]
    pub amount_tolerance: Decimal,
}

fn default_amount_tolerance() -> Decimal {
    Decimal::new(1, 2)
}

impl Default for ReconciliationConfig {
    fn default() -> Self {
        Self {
            amount_tolerance: default_amount_tolerance(),
        }
    }
}

/// Score history configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreConfig {
    /// Number of snapshots returned by history views when no limit is given.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

fn default_history_limit() -> usize {
    12
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINSIGHT").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
