//! Finsight analyzer
//!
//! Usage:
//!   finsight-analyzer ledger.json                  Analyze as of today
//!   finsight-analyzer ledger.json --as-of 2026-06-15 --pretty

mod report;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use finsight_core::store::{InMemoryStore, LedgerSnapshot};
use finsight_shared::AppConfig;

/// Financial analytics over a ledger snapshot.
#[derive(Parser)]
#[command(name = "finsight-analyzer", version, about)]
struct Cli {
    /// JSON ledger snapshot for one owner
    snapshot: PathBuf,

    /// Evaluation date (defaults to today, UTC)
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    // RUST_LOG wins over the configured filter. Logs go to stderr so stdout
    // carries only the report.
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log.filter)),
        )
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let json = tokio::fs::read_to_string(&cli.snapshot)
        .await
        .with_context(|| format!("Failed to read {}", cli.snapshot.display()))?;
    let snapshot = LedgerSnapshot::from_json(&json)
        .with_context(|| format!("Invalid ledger snapshot in {}", cli.snapshot.display()))?;

    let owner_id = snapshot.owner_id();
    let as_of = cli.as_of.unwrap_or_else(|| Utc::now().date_naive());
    info!(owner_id = %owner_id, %as_of, "Analyzing ledger snapshot");

    let store = Arc::new(InMemoryStore::with_snapshots([snapshot]));
    let report = report::build(&store, &config, owner_id, as_of).await?;

    let output = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
