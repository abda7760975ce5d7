//! Hit Decider
//!
//! ## Module Structure
//!
//! - `options`: Per-call knobs (default weight, chance multiplier)
//! - `weights`: Weight map type and its total/max summary
//! - `decider`: Threshold arithmetic and the decision functions
//! - `error`: Invalid-input errors

pub mod options;
pub mod weights;
pub mod decider;
pub mod error;

// Re-export key types
pub use options::HitOptions;
pub use weights::{CategoryWeights, WeightSummary};
pub use decider::{is_category_hit, is_category_hit_with, HitDecider, HitThreshold};
pub use error::HitError;
