//! Random Sources
//!
//! The decider only ever needs one thing from randomness: a uniform integer
//! in `[0, n)`. [`RandomSource`] is that seam. Two sources ship with the crate:
//!
//! - [`DeterministicRng`]: seeded Xorshift128+ variant. Same seed, same
//!   sequence, on every platform. Used by simulations and tests.
//! - [`ThreadRandom`]: handle onto `rand`'s thread-local generator. Each
//!   thread owns its generator, so concurrent callers never share state.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// A source of uniformly distributed integers.
pub trait RandomSource {
    /// Draw a value in `[0, bound)`.
    ///
    /// Callers must pass `bound > 0`.
    fn next_below(&mut self, bound: u64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    #[inline]
    fn next_below(&mut self, bound: u64) -> u64 {
        (**self).next_below(bound)
    }
}

/// Deterministic PRNG using a Xorshift128+ style update.
///
/// # Example
///
/// ```
/// use weighted_hit::core::rng::{DeterministicRng, RandomSource};
///
/// let mut a = DeterministicRng::new(12345);
/// let mut b = DeterministicRng::new(12345);
/// assert_eq!(a.next_below(15), b.next_below(15));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeterministicRng {
    state: [u64; 2],
}

impl Default for DeterministicRng {
    fn default() -> Self {
        Self::new(0)
    }
}

impl DeterministicRng {
    /// Create a new RNG from a 64-bit seed.
    ///
    /// SplitMix64 spreads the seed over both state words, so small or
    /// sequential seeds still give unrelated streams.
    pub fn new(seed: u64) -> Self {
        let mut s = seed;
        let state0 = splitmix64(&mut s);
        let state1 = splitmix64(&mut s);

        // All-zero state would be a fixed point
        let state = if state0 == 0 && state1 == 0 {
            [1, 1]
        } else {
            [state0, state1]
        };

        Self { state }
    }

    /// Generate the next 64-bit random value.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state[1] = s1.rotate_left(37);

        result
    }

    /// Get current state (for checkpointing/debugging).
    pub fn state(&self) -> [u64; 2] {
        self.state
    }

    /// Restore from saved state.
    pub fn set_state(&mut self, state: [u64; 2]) {
        self.state = state;
    }
}

impl RandomSource for DeterministicRng {
    /// Modulo reduction. The bias is negligible for the small bounds that
    /// category weight totals produce.
    #[inline]
    fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.next_u64() % bound
    }
}

/// Process-wide random source backed by `rand::thread_rng()`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    #[inline]
    fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..bound)
    }
}

/// SplitMix64 for seed initialization.
#[inline]
fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E3779B97F4A7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58476D1CE4E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D049BB133111EB);
    z ^ (z >> 31)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Scripted source: replays `values` in order, cycling at the end.
    ///
    /// Values are returned as-is, so a script entry outside `[0, bound)`
    /// lets a test exercise the decider's own reduction step.
    pub(crate) struct FixedRandom {
        values: Vec<u64>,
        index: usize,
        pub(crate) bounds_seen: Vec<u64>,
    }

    impl FixedRandom {
        pub(crate) fn new(values: Vec<u64>) -> Self {
            Self {
                values,
                index: 0,
                bounds_seen: Vec::new(),
            }
        }

        pub(crate) fn constant(value: u64) -> Self {
            Self::new(vec![value])
        }

        pub(crate) fn draws(&self) -> usize {
            self.bounds_seen.len()
        }
    }

    impl RandomSource for FixedRandom {
        fn next_below(&mut self, bound: u64) -> u64 {
            self.bounds_seen.push(bound);
            let value = self.values[self.index % self.values.len()];
            self.index += 1;
            value
        }
    }

    #[test]
    fn test_rng_determinism() {
        let mut rng1 = DeterministicRng::new(12345);
        let mut rng2 = DeterministicRng::new(12345);

        for _ in 0..1000 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = DeterministicRng::new(12345);
        let mut rng2 = DeterministicRng::new(54321);

        assert_ne!(rng1.next_u64(), rng2.next_u64());
    }

    #[test]
    fn test_next_below_range() {
        let mut rng = DeterministicRng::new(1234);

        for bound in [1u64, 2, 15, 100, 1 << 40] {
            for _ in 0..500 {
                assert!(rng.next_below(bound) < bound);
            }
        }

        assert_eq!(rng.next_below(1), 0);
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn test_next_below_covers_small_range() {
        let mut rng = DeterministicRng::new(99);
        let mut seen = [false; 15];

        for _ in 0..2000 {
            seen[rng.next_below(15) as usize] = true;
        }

        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_state_checkpoint() {
        let mut rng = DeterministicRng::new(5555);

        for _ in 0..50 {
            rng.next_u64();
        }

        let saved_state = rng.state();
        let next_values: Vec<u64> = (0..10).map(|_| rng.next_u64()).collect();

        rng.set_state(saved_state);

        for expected in next_values {
            assert_eq!(rng.next_u64(), expected);
        }
    }

    #[test]
    fn test_state_serde_roundtrip_resumes_stream() {
        let mut rng = DeterministicRng::new(777);
        rng.next_u64();

        let json = serde_json::to_string(&rng).unwrap();
        let mut restored: DeterministicRng = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.next_u64(), rng.next_u64());
    }

    #[test]
    fn test_thread_random_range() {
        let mut rng = ThreadRandom;

        for _ in 0..1000 {
            assert!(rng.next_below(7) < 7);
        }
    }

    #[test]
    fn test_thread_random_per_thread() {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                std::thread::spawn(|| {
                    let mut rng = ThreadRandom;
                    (0..1000).all(|_| rng.next_below(10) < 10)
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_borrowed_source_advances_owner() {
        fn draw<R: RandomSource>(mut source: R) -> u64 {
            source.next_below(100)
        }

        let mut rng = DeterministicRng::new(42);
        let mut twin = rng.clone();

        let lent = draw(&mut rng);

        assert_eq!(lent, twin.next_below(100));
        assert_eq!(rng, twin);
    }

    #[test]
    fn test_fixed_random_cycles() {
        let mut rng = FixedRandom::new(vec![3, 1]);

        assert_eq!(rng.next_below(10), 3);
        assert_eq!(rng.next_below(10), 1);
        assert_eq!(rng.next_below(10), 3);
        assert_eq!(rng.draws(), 3);
        assert_eq!(FixedRandom::constant(4).next_below(5), 4);
    }
}
