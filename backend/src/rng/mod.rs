//! Deterministic random number generation
//!
//! Uses xorshift64* algorithm for fast, deterministic random number generation.
//! CRITICAL: All randomness in the simulator MUST go through this module.
//!
//! Stages never own a generator. The orchestrator creates one `RngManager`
//! per run and threads it through every stage as `&mut dyn RandomSource`,
//! so the draw order is the call order and concurrent runs never share state.

mod xorshift;

pub use xorshift::RngManager;

/// Source of reproducible random draws.
///
/// Implementors only provide [`RandomSource::next_u64`]; every other draw is
/// derived from it, so two sources yielding the same `u64` stream yield the
/// same floats, ranges, samples and choices.
///
/// # Example
/// ```
/// use runway_simulator_core_rs::{RandomSource, RngManager};
///
/// let mut rng = RngManager::new(7);
/// let minute = rng.range(0, 120);
/// assert!((0..120).contains(&minute));
///
/// let picked = rng.sample_without_replacement(10, 3);
/// assert_eq!(picked.len(), 3);
/// ```
pub trait RandomSource {
    /// Next raw 64-bit value. Advances the internal state.
    fn next_u64(&mut self) -> u64;

    /// Uniform f64 in [0.0, 1.0), built from the top 53 bits.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform integer in [min, max).
    ///
    /// # Panics
    /// Panics if min >= max
    fn range(&mut self, min: i64, max: i64) -> i64 {
        assert!(min < max, "min must be less than max");

        let value = self.next_u64();
        let range_size = (max - min) as u64;
        min + (value % range_size) as i64
    }

    /// Bernoulli trial with success probability `p`.
    ///
    /// Always consumes exactly one draw, including for `p == 0.0`.
    fn bernoulli(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Uniform index in [0, len).
    ///
    /// # Panics
    /// Panics if len == 0
    fn choose_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot choose from an empty set");
        self.range(0, len as i64) as usize
    }

    /// Index drawn proportionally to `weights` (one draw).
    ///
    /// # Panics
    /// Panics if weights are empty or do not sum to a positive value
    fn weighted_index(&mut self, weights: &[f64]) -> usize {
        assert!(!weights.is_empty(), "cannot choose from an empty set");
        let total: f64 = weights.iter().sum();
        assert!(total > 0.0, "weights must sum to a positive value");

        let target = self.next_f64() * total;
        let mut cumulative = 0.0;
        for (idx, weight) in weights.iter().enumerate() {
            cumulative += weight;
            if target < cumulative {
                return idx;
            }
        }

        // Float rounding can leave target == total
        weights.len() - 1
    }

    /// `amount` distinct indices from [0, population), in draw order.
    ///
    /// Partial Fisher-Yates: consumes exactly `amount` draws.
    ///
    /// # Panics
    /// Panics if amount > population
    fn sample_without_replacement(&mut self, population: usize, amount: usize) -> Vec<usize> {
        assert!(
            amount <= population,
            "cannot sample {} items from a population of {}",
            amount,
            population
        );

        let mut pool: Vec<usize> = (0..population).collect();
        for i in 0..amount {
            let j = self.range(i as i64, population as i64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(amount);
        pool
    }
}
