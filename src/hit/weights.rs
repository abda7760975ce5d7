//! Weight Map Summary
//!
//! Category weights live in a `BTreeMap<String, i64>` so iteration order,
//! and with it every derived value, is the same on every run.

use std::collections::BTreeMap;

/// Category name to weight.
pub type CategoryWeights = BTreeMap<String, i64>;

/// Aggregate values derived from a weight map in a single pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WeightSummary {
    /// Sum of all weights. Wraps on overflow.
    pub total: i64,
    /// Largest weight, floored at zero.
    pub max: i64,
}

impl WeightSummary {
    /// Summarize a weight map.
    ///
    /// `max` starts at zero, so an empty map or one holding only negative
    /// weights reports `max == 0`.
    pub fn of(weights: &CategoryWeights) -> Self {
        weights.values().fold(Self::default(), |acc, &weight| Self {
            total: acc.total.wrapping_add(weight),
            max: acc.max.max(weight),
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn weights(pairs: &[(&str, i64)]) -> CategoryWeights {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_summary_basic() {
        let summary = WeightSummary::of(&weights(&[("a", 10), ("b", 5)]));
        assert_eq!(summary, WeightSummary { total: 15, max: 10 });
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(WeightSummary::of(&CategoryWeights::new()), WeightSummary::default());
    }

    #[test]
    fn test_summary_negative_weights() {
        let summary = WeightSummary::of(&weights(&[("a", -4), ("b", -1)]));
        assert_eq!(summary.total, -5);
        assert_eq!(summary.max, 0);
    }
}
