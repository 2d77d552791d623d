//! Roster ingestion orchestrator - runs the fetch, parse, tabulate pipeline

use anyhow::Result;
use chrono::Utc;
use roster_backend::ingestion::fetch::{self, HttpSource, RecordSource};
use roster_backend::ingestion::{table, IngestReport};
use std::env;
use std::time::Duration;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true)
        .init();

    info!("Starting roster ingestion pipeline");

    dotenvy::dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env()?;
    info!("Configuration loaded");

    let source = HttpSource::new(&config.source_url, config.fetch_timeout)?;

    // Step 1: Fetch and normalize records, one request per record
    info!("Step 1/2: Ingesting {} records...", config.record_count);
    let started_at = Utc::now();
    let set = fetch::ingest(&source, config.record_count).await?;
    let report = IngestReport {
        source_url: source.describe(),
        started_at,
        completed_at: Utc::now(),
        records_fetched: set.len(),
    };
    info!("✓ Ingest complete: {}", report);

    // Step 2: Project into a table
    info!("Step 2/2: Building table...");
    let table = table::to_table(&set);
    info!("✓ Table built ({} rows)", table.row_count());

    println!("{}", table);

    info!("Roster ingestion pipeline complete");

    Ok(())
}

/// Configuration loaded from environment variables
#[derive(Debug, Clone)]
struct Config {
    source_url: String,
    record_count: usize,
    fetch_timeout: Duration,
}

impl Config {
    fn from_env() -> Result<Self> {
        Ok(Config {
            source_url: env::var("SOURCE_URL")
                .unwrap_or_else(|_| "https://randomuser.me/api/".to_string()),

            record_count: env::var("RECORD_COUNT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(10),

            fetch_timeout: Duration::from_secs(
                env::var("FETCH_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
        })
    }
}
