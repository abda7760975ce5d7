//! Core randomness primitives.
//!
//! Everything the decider draws goes through [`RandomSource`], so callers can
//! swap the process-wide source for a seeded one.

pub mod rng;

// Re-export core types
pub use rng::{DeterministicRng, RandomSource, ThreadRandom};
