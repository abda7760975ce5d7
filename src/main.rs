//! Weighted Hit Simulator
//!
//! Runs a seeded simulation over a weight map and prints per-category hit
//! tallies as JSON. Configuration comes from `HIT_*` environment variables.

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use weighted_hit::{
    sim::{run_simulation, SimulationConfig},
    VERSION,
};

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Weighted Hit Simulator v{}", VERSION);

    let config = SimulationConfig::from_env().context("invalid configuration")?;

    info!("Seed: {}", config.seed);
    info!("Rounds: {}", config.rounds);
    info!("Target hit: {} (cap {})", config.target_hit, config.max_allowed_hits);
    info!(
        "Options: default_weight={} chance_multiplier={}",
        config.options.default_weight, config.options.chance_multiplier
    );
    for (category, weight) in &config.weights {
        info!("Category {:?} weight {}", category, weight);
    }

    let report = run_simulation(&config);

    info!("=== Results ===");
    for (category, tally) in &report.tallies {
        let rate = if config.rounds == 0 {
            0.0
        } else {
            tally.hits as f64 / config.rounds as f64
        };
        match &tally.error {
            Some(error) => warn!("{:?}: rejected {} times ({})", category, tally.rejected, error),
            None => info!(
                "{:?}: {} hits ({:.2}%), adjusted target {:?}",
                category,
                tally.hits,
                rate * 100.0,
                tally.adjusted_target
            ),
        }
    }
    info!("Total hits: {}", report.total_hits());

    // Same seed must give the same tallies
    let replay = run_simulation(&config);
    if replay == report {
        info!("REPRODUCIBILITY VERIFIED: replay matches");
    } else {
        warn!("REPRODUCIBILITY FAILURE: replay differs");
    }

    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
