//! Decider Options
//!
//! Two knobs tune a decision: a fallback weight for categories missing from
//! the weight map, and a multiplier on the final hit threshold.

use serde::{Deserialize, Serialize};

/// Per-call decider configuration.
///
/// Builder methods consume and return `self`, so chaining the same setter
/// twice keeps the last value.
///
/// ```
/// use weighted_hit::HitOptions;
///
/// let options = HitOptions::default()
///     .with_chance_multiplier(4)
///     .with_default_weight(5)
///     .with_chance_multiplier(2);
///
/// assert_eq!(options.chance_multiplier, 2);
/// assert_eq!(options.default_weight, 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HitOptions {
    /// Weight used for categories absent from the weight map.
    /// Zero means "no default": unknown categories never hit.
    pub default_weight: i64,
    /// Multiplier applied to the adjusted target before comparing the draw.
    /// Mostly useful for forcing hits in tests.
    pub chance_multiplier: i64,
}

impl Default for HitOptions {
    fn default() -> Self {
        Self {
            default_weight: 0,
            chance_multiplier: 1,
        }
    }
}

impl HitOptions {
    /// Set the fallback weight for unknown categories.
    pub fn with_default_weight(mut self, default_weight: i64) -> Self {
        self.default_weight = default_weight;
        self
    }

    /// Set the threshold multiplier.
    pub fn with_chance_multiplier(mut self, multiplier: i64) -> Self {
        self.chance_multiplier = multiplier;
        self
    }

    /// Whether unknown categories fall back to [`Self::default_weight`].
    #[inline]
    pub fn has_default_weight(&self) -> bool {
        self.default_weight != 0
    }
}

// =============================================================================
// TESTS
// =============================================================================
