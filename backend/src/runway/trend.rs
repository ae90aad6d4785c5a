//! N-runway trend rebalance
//!
//! Flights are spread uniformly over `RW1..RWn`. The least-occupied runways
//! of that initial spread form a fixed candidate set; each flight then has a
//! 30% chance of moving to a uniformly chosen candidate.
//!
//! The candidate set is computed once from the before distribution and not
//! updated as flights move. It holds the `min(5, n)` emptiest runways, ties
//! broken by label order, so fewer than five runways simply shrink the set.

use tracing::debug;

use super::{assign_uniform, occupancy, runway_labels, RunwayAssignment, RunwayPolicy};
use crate::config::RunwayStrategy;
use crate::models::Flight;
use crate::rng::RandomSource;

/// Size of the least-occupied candidate set
pub const CANDIDATE_COUNT: usize = 5;

/// Per-flight chance of moving to a candidate runway
pub const REASSIGN_PROBABILITY: f64 = 0.3;

/// Trend rebalance over N runways
#[derive(Debug, Clone)]
pub struct TrendRebalance {
    runways: Vec<String>,
}

impl TrendRebalance {
    pub fn new(runway_count: usize) -> Self {
        Self {
            runways: runway_labels(runway_count),
        }
    }

    /// Indices of the `min(CANDIDATE_COUNT, n)` least-occupied runways,
    /// ordered by occupancy then label.
    pub fn least_occupied(counts: &[usize]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..counts.len()).collect();
        order.sort_by_key(|idx| (counts[*idx], *idx));
        order.truncate(CANDIDATE_COUNT.min(counts.len()));
        order
    }
}

impl RunwayPolicy for TrendRebalance {
    fn strategy(&self) -> RunwayStrategy {
        RunwayStrategy::Trend
    }

    fn runways(&self) -> &[String] {
        &self.runways
    }

    fn assign(&self, flights: &mut [Flight], rng: &mut dyn RandomSource) -> RunwayAssignment {
        let before = assign_uniform(flights, &self.runways, rng);

        let mut counts = vec![0usize; self.runways.len()];
        for idx in &before {
            counts[*idx] += 1;
        }
        let candidates = Self::least_occupied(&counts);

        let mut moved = 0usize;
        for (flight, runway_idx) in flights.iter_mut().zip(before) {
            let after_idx = if rng.bernoulli(REASSIGN_PROBABILITY) {
                candidates[rng.choose_index(candidates.len())]
            } else {
                runway_idx
            };
            if after_idx != runway_idx {
                moved += 1;
            }
            flight.assign_runway_after(self.runways[after_idx].clone());
        }

        debug!(
            runways = self.runways.len(),
            candidates = candidates.len(),
            moved,
            "trend assignment done"
        );

        RunwayAssignment {
            occupancy: occupancy(flights, &self.runways),
            rebalanced: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_least_occupied_breaks_ties_by_label() {
        let counts = [3, 0, 2, 0, 5, 1, 2];
        assert_eq!(TrendRebalance::least_occupied(&counts), vec![1, 3, 5, 2, 6]);
    }

    #[test]
    fn test_least_occupied_shrinks_below_five_runways() {
        assert_eq!(TrendRebalance::least_occupied(&[4, 1, 2]), vec![1, 2, 0]);
        assert_eq!(TrendRebalance::least_occupied(&[9]), vec![0]);
    }
}
