//! # Weighted Hit
//!
//! Weighted random hit decisions for sampling and flag-style gating.
//! Categories with larger weights receive proportionally more hits, and each
//! category's hit threshold is capped.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      WEIGHTED HIT                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  core/           - Random sources                            │
//! │  └── rng.rs      - RandomSource, seeded PRNG, thread source  │
//! │                                                              │
//! │  hit/            - Hit Decider (stateless)                   │
//! │  ├── options.rs  - Default weight, chance multiplier         │
//! │  ├── weights.rs  - Weight map and total/max summary          │
//! │  ├── decider.rs  - Threshold arithmetic, decisions           │
//! │  └── error.rs    - Invalid-input errors                      │
//! │                                                              │
//! │  sim.rs          - Seeded hit simulation (demo binary)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use std::collections::BTreeMap;
//! use weighted_hit::{HitDecider, HitOptions};
//!
//! let weights = BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 5)]);
//! let mut decider = HitDecider::seeded(42, HitOptions::default().with_chance_multiplier(100));
//!
//! // Cutoff 4 * 100 covers the whole draw range [0, 15)
//! assert_eq!(decider.decide("b", &weights, 2, 100), Ok(true));
//! ```
//!
//! Hit counts are never stored. Callers track how often each category has
//! hit and adjust `target_hit` themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod core;
pub mod hit;
pub mod sim;

// Re-export commonly used types
pub use core::rng::{DeterministicRng, RandomSource, ThreadRandom};
pub use hit::{
    is_category_hit, is_category_hit_with,
    CategoryWeights, HitDecider, HitError, HitOptions, HitThreshold, WeightSummary,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
