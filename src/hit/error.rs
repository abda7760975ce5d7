//! Decider errors.
//!
//! A miss is `Ok(false)`. These variants are reserved for inputs where no
//! meaningful draw exists.

use thiserror::Error;

/// Invalid-input conditions rejected before any randomness is drawn.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HitError {
    /// The resolved weight for the category is zero, so the weight ratio
    /// `max_weight / weight` is undefined.
    #[error("category {category:?} resolved to a zero weight")]
    ZeroWeight {
        /// Category that was looked up.
        category: String,
    },

    /// The weights sum to zero or less, leaving no range to draw from.
    #[error("total category weight must be positive, got {total}")]
    NonPositiveTotalWeight {
        /// Sum of all weights in the map.
        total: i64,
    },
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let zero = HitError::ZeroWeight { category: "b".into() };
        assert_eq!(zero.to_string(), "category \"b\" resolved to a zero weight");

        let total = HitError::NonPositiveTotalWeight { total: -3 };
        assert_eq!(total.to_string(), "total category weight must be positive, got -3");
    }
}
