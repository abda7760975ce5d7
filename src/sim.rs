//! Hit Simulation
//!
//! Runs many decision rounds over a weight map with a seeded decider and
//! tallies hits per category. Used by the `weighted-hit` binary to show how
//! weights, targets and caps shape the hit distribution.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::hit::{CategoryWeights, HitDecider, HitOptions, HitThreshold};

/// Category asked about every round that is absent from the weight map.
pub const PROBE_CATEGORY: &str = "__unknown__";

/// Simulation configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Seed for the decider's random source.
    pub seed: u64,
    /// Number of rounds. Each round asks about every category once.
    pub rounds: u32,
    /// Hit target for the heaviest category.
    pub target_hit: i64,
    /// Cap on any category's adjusted target.
    pub max_allowed_hits: i64,
    /// Decider options.
    pub options: HitOptions,
    /// Category weights.
    pub weights: CategoryWeights,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: 12345,
            rounds: 10_000,
            target_hit: 2,
            max_allowed_hits: 100,
            options: HitOptions::default(),
            weights: BTreeMap::from([
                ("a".to_string(), 10),
                ("b".to_string(), 5),
                ("c".to_string(), 1),
            ]),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A numeric variable failed to parse.
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        /// Variable name.
        var: &'static str,
        /// Raw value.
        value: String,
        /// Parser message.
        reason: String,
    },
    /// `HIT_WEIGHTS` is not a JSON object of integers.
    #[error("invalid HIT_WEIGHTS: {0}")]
    Weights(#[from] serde_json::Error),
}

impl SimulationConfig {
    /// Create config from environment variables.
    ///
    /// Reads `HIT_SEED`, `HIT_ROUNDS`, `HIT_TARGET`, `HIT_MAX_ALLOWED`,
    /// `HIT_CHANCE_MULTIPLIER`, `HIT_DEFAULT_WEIGHT` and `HIT_WEIGHTS`
    /// (JSON object). Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let weights = match lookup("HIT_WEIGHTS") {
            Some(raw) => serde_json::from_str(&raw)?,
            None => defaults.weights,
        };

        let options = HitOptions::default()
            .with_chance_multiplier(parse_var(&lookup, "HIT_CHANCE_MULTIPLIER", defaults.options.chance_multiplier)?)
            .with_default_weight(parse_var(&lookup, "HIT_DEFAULT_WEIGHT", defaults.options.default_weight)?);

        Ok(Self {
            seed: parse_var(&lookup, "HIT_SEED", defaults.seed)?,
            rounds: parse_var(&lookup, "HIT_ROUNDS", defaults.rounds)?,
            target_hit: parse_var(&lookup, "HIT_TARGET", defaults.target_hit)?,
            max_allowed_hits: parse_var(&lookup, "HIT_MAX_ALLOWED", defaults.max_allowed_hits)?,
            options,
            weights,
        })
    }
}

fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(var) {
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            var,
            value: raw,
            reason: e.to_string(),
        }),
        None => Ok(default),
    }
}

/// Per-category outcome of a simulation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTally {
    /// Adjusted target, if the category resolves to a threshold.
    pub adjusted_target: Option<i64>,
    /// Number of hits.
    pub hits: u64,
    /// Number of rounds the decider rejected the input.
    pub rejected: u64,
    /// Last rejection message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Simulation result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Seed the run used.
    pub seed: u64,
    /// Rounds played.
    pub rounds: u32,
    /// Tallies keyed by category, including [`PROBE_CATEGORY`].
    pub tallies: BTreeMap<String, CategoryTally>,
}

impl SimulationReport {
    /// Hits across every category.
    pub fn total_hits(&self) -> u64 {
        self.tallies.values().map(|t| t.hits).sum()
    }
}

/// Run a simulation.
pub fn run_simulation(config: &SimulationConfig) -> SimulationReport {
    let mut decider = HitDecider::seeded(config.seed, config.options);

    let categories: Vec<&str> = config
        .weights
        .keys()
        .map(String::as_str)
        .chain(std::iter::once(PROBE_CATEGORY))
        .collect();

    let mut tallies: BTreeMap<String, CategoryTally> = categories
        .iter()
        .map(|category| {
            let adjusted_target = HitThreshold::compute(
                category,
                &config.weights,
                config.target_hit,
                config.max_allowed_hits,
                &config.options,
            )
            .ok()
            .flatten()
            .map(|t| t.adjusted_target);

            let tally = CategoryTally {
                adjusted_target,
                ..Default::default()
            };
            (category.to_string(), tally)
        })
        .collect();

    for _ in 0..config.rounds {
        for category in &categories {
            let result = decider.decide(
                category,
                &config.weights,
                config.target_hit,
                config.max_allowed_hits,
            );

            let Some(tally) = tallies.get_mut(*category) else {
                continue;
            };

            match result {
                Ok(true) => tally.hits += 1,
                Ok(false) => {}
                Err(e) => {
                    tally.rejected += 1;
                    tally.error = Some(e.to_string());
                }
            }
        }
    }

    debug!(seed = config.seed, rounds = config.rounds, "simulation finished");

    SimulationReport {
        seed: config.seed,
        rounds: config.rounds,
        tallies,
    }
}

// =============================================================================
// TESTS
// =============================================================================
