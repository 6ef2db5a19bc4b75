//! Argumentation-based Negotiation Agency
//!
//! Runs a single seeded negotiation between randomly generated agents and
//! prints the exchanged messages.

use anyhow::{Context, Result};
use tracing::info;

use negotiation_agency::orchestrator::{ArgumentModel, ConfigManager};
use negotiation_agency::utils::telemetry::{init_logging, DEFAULT_FILTER};

// ──────────────────────────────────────────────────────────────────────────────
// CONFIGURATION
// ──────────────────────────────────────────────────────────────────────────────

const DEFAULT_CONFIG_PATH: &str = "negotiation.json";

fn config_path() -> String {
    std::env::var("NEGOTIATION_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    init_logging(DEFAULT_FILTER)?;

    let path = config_path();
    let config = ConfigManager::new(&path)
        .load()
        .await
        .with_context(|| format!("Failed to load config from '{}'", path))?
        .apply_env()?;
    config.validate()?;

    info!(seed = config.seed, mode = %config.mode, steps = config.steps, "Starting negotiation");

    println!("\n{}", "═".repeat(60));
    println!("Argumentation Negotiation ({} mode, seed {})", config.mode, config.seed);
    println!("{}", "═".repeat(60));

    let mut model = ArgumentModel::new(&config)?;
    model.open(&config.opening)?;
    let report = model.run(config.steps)?;

    for message in model.transcript() {
        println!("  {}", message);
    }
    println!("{}", "─".repeat(60));

    for defect in &report.defects {
        println!("Protocol defect in round {}: {}", defect.round, defect.error);
    }
    if report.committed.is_empty() {
        println!("No commitment after {} rounds", report.rounds);
    } else {
        println!("Committed: {}", report.committed.join(", "));
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
