//! Weighted Hit Decision
//!
//! Decides whether a category counts as a "hit" on this call. Heavier
//! categories get more hits overall, while each category's threshold is
//! capped so no single one can run away.
//!
//! ## Threshold arithmetic
//!
//! ```text
//! total    = Σ weights                 (draw range is [0, total))
//! max      = max(0, max weight)
//! ratio    = max / weight              (truncating)
//! adjusted = min(target_hit * ratio, max_allowed)
//! hit      = (draw % total) <= adjusted * chance_multiplier
//! ```
//!
//! Products wrap on overflow, like 64-bit machine integers. The `% total`
//! is a no-op for draws already in range; it is kept so a source that
//! over-reports still lands on the same comparison.

use tracing::{debug, trace};

use crate::core::rng::{DeterministicRng, RandomSource, ThreadRandom};
use crate::hit::error::HitError;
use crate::hit::options::HitOptions;
use crate::hit::weights::{CategoryWeights, WeightSummary};

/// Resolved threshold for one category, before any randomness is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HitThreshold {
    /// Weight of the category (from the map, or the default weight).
    pub weight: i64,
    /// Largest weight in the map.
    pub max_weight: i64,
    /// Sum of weights in the map. Always positive.
    pub total_weight: i64,
    /// Target after weight scaling and clamping.
    pub adjusted_target: i64,
    /// Copied from the options the threshold was computed with.
    pub chance_multiplier: i64,
}

impl HitThreshold {
    /// Resolve the threshold for `category`.
    ///
    /// Returns `Ok(None)` when the category is not in `weights` and no
    /// default weight is configured; such categories never hit.
    ///
    /// The default weight only stands in for the category's own weight.
    /// It never contributes to the map's total or maximum.
    pub fn compute(
        category: &str,
        weights: &CategoryWeights,
        target_hit: i64,
        max_allowed_hits: i64,
        options: &HitOptions,
    ) -> Result<Option<Self>, HitError> {
        let summary = WeightSummary::of(weights);

        let weight = match weights.get(category) {
            Some(&weight) => weight,
            None if !options.has_default_weight() => {
                debug!(category, "unknown category ignored");
                return Ok(None);
            }
            None => options.default_weight,
        };

        if weight == 0 {
            debug!(category, "rejecting zero weight");
            return Err(HitError::ZeroWeight {
                category: category.to_string(),
            });
        }

        if summary.total <= 0 {
            debug!(category, total = summary.total, "rejecting non-positive total weight");
            return Err(HitError::NonPositiveTotalWeight {
                total: summary.total,
            });
        }

        // max is floored at zero, so MIN / -1 cannot occur
        let ratio = summary.max / weight;
        let adjusted_target = target_hit.wrapping_mul(ratio).min(max_allowed_hits);

        Ok(Some(Self {
            weight,
            max_weight: summary.max,
            total_weight: summary.total,
            adjusted_target,
            chance_multiplier: options.chance_multiplier,
        }))
    }

    /// Highest draw that still counts as a hit.
    #[inline]
    pub fn cutoff(&self) -> i64 {
        self.adjusted_target.wrapping_mul(self.chance_multiplier)
    }

    /// Draw a value in `[0, total_weight)`.
    pub fn draw<R: RandomSource + ?Sized>(&self, rng: &mut R) -> i64 {
        // total_weight > 0, so both casts are lossless
        rng.next_below(self.total_weight as u64) as i64
    }

    /// Compare a draw against the cutoff.
    #[inline]
    pub fn is_hit(&self, draw: i64) -> bool {
        draw % self.total_weight <= self.cutoff()
    }
}

/// Decide a hit using the supplied random source.
///
/// Exactly one value is drawn when a threshold resolves. Ignored categories
/// and rejected inputs draw nothing.
///
/// ```
/// use std::collections::BTreeMap;
/// use weighted_hit::{is_category_hit_with, DeterministicRng, HitOptions};
///
/// let weights = BTreeMap::from([("a".to_string(), 10), ("b".to_string(), 5)]);
/// let mut rng = DeterministicRng::new(7);
///
/// // Unknown categories never hit without a default weight
/// let hit = is_category_hit_with(&mut rng, "zzz", &weights, 2, 100, &HitOptions::default());
/// assert_eq!(hit, Ok(false));
/// ```
pub fn is_category_hit_with<R: RandomSource + ?Sized>(
    rng: &mut R,
    category: &str,
    weights: &CategoryWeights,
    target_hit: i64,
    max_allowed_hits: i64,
    options: &HitOptions,
) -> Result<bool, HitError> {
    let Some(threshold) =
        HitThreshold::compute(category, weights, target_hit, max_allowed_hits, options)?
    else {
        return Ok(false);
    };

    let draw = threshold.draw(rng);
    let hit = threshold.is_hit(draw);

    trace!(
        category,
        weight = threshold.weight,
        total = threshold.total_weight,
        adjusted_target = threshold.adjusted_target,
        cutoff = threshold.cutoff(),
        draw,
        hit,
        "category decision"
    );

    Ok(hit)
}

/// Decide a hit using the process-wide thread-local source.
pub fn is_category_hit(
    category: &str,
    weights: &CategoryWeights,
    target_hit: i64,
    max_allowed_hits: i64,
    options: &HitOptions,
) -> Result<bool, HitError> {
    is_category_hit_with(
        &mut ThreadRandom,
        category,
        weights,
        target_hit,
        max_allowed_hits,
        options,
    )
}

/// A random source bundled with fixed options.
///
/// Useful when one configuration answers many questions, e.g. a seeded
/// simulation.
#[derive(Clone, Debug)]
pub struct HitDecider<R = ThreadRandom> {
    rng: R,
    options: HitOptions,
}

impl Default for HitDecider<ThreadRandom> {
    fn default() -> Self {
        Self::new(ThreadRandom, HitOptions::default())
    }
}

impl HitDecider<DeterministicRng> {
    /// Decider over a seeded [`DeterministicRng`].
    pub fn seeded(seed: u64, options: HitOptions) -> Self {
        Self::new(DeterministicRng::new(seed), options)
    }
}

impl<R: RandomSource> HitDecider<R> {
    /// Create a decider from a source and options.
    pub fn new(rng: R, options: HitOptions) -> Self {
        Self { rng, options }
    }

    /// Options applied to every decision.
    pub fn options(&self) -> &HitOptions {
        &self.options
    }

    /// Decide a hit for `category`.
    pub fn decide(
        &mut self,
        category: &str,
        weights: &CategoryWeights,
        target_hit: i64,
        max_allowed_hits: i64,
    ) -> Result<bool, HitError> {
        is_category_hit_with(
            &mut self.rng,
            category,
            weights,
            target_hit,
            max_allowed_hits,
            &self.options,
        )
    }

    /// Give back the random source.
    pub fn into_rng(self) -> R {
        self.rng
    }
}

// =============================================================================
// TESTS
// =============================================================================
