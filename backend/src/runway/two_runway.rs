//! Two-runway rebalance
//!
//! Flights are spread uniformly over RW1 and RW2. If RW1 ends up with more
//! than 60% of the fleet, every RW1 flight is redrawn with weights
//! RW1: 0.4, RW2: 0.6. RW2 flights are never touched, and a balanced split
//! is left as is.

use tracing::debug;

use super::{assign_uniform, occupancy, runway_labels, RunwayAssignment, RunwayPolicy};
use crate::config::RunwayStrategy;
use crate::models::Flight;
use crate::rng::RandomSource;

/// RW1 share above which the rebalance runs
pub const OVERLOAD_SHARE: f64 = 0.6;

/// Redraw weights for overloaded RW1 flights (RW1, RW2)
pub const REBALANCE_WEIGHTS: [f64; 2] = [0.4, 0.6];

/// Two-runway rebalance policy
///
/// # Example
///
/// ```
/// use runway_simulator_core_rs::runway::{RunwayPolicy, TwoRunwayRebalance};
/// use runway_simulator_core_rs::fleet::FlightGenerator;
/// use runway_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(3);
/// let mut flights = FlightGenerator::new(10).generate(&mut rng);
///
/// let assignment = TwoRunwayRebalance::new().assign(&mut flights, &mut rng);
/// let total: usize = assignment.occupancy.iter().map(|o| o.after).sum();
/// assert_eq!(total, 10);
/// ```
#[derive(Debug, Clone)]
pub struct TwoRunwayRebalance {
    runways: Vec<String>,
}

impl TwoRunwayRebalance {
    pub fn new() -> Self {
        Self {
            runways: runway_labels(2),
        }
    }

    /// Whether `rw1_count` of `total` flights overloads RW1
    pub fn is_overloaded(rw1_count: usize, total: usize) -> bool {
        total > 0 && rw1_count as f64 / total as f64 > OVERLOAD_SHARE
    }
}

impl Default for TwoRunwayRebalance {
    fn default() -> Self {
        Self::new()
    }
}

impl RunwayPolicy for TwoRunwayRebalance {
    fn strategy(&self) -> RunwayStrategy {
        RunwayStrategy::TwoRunway
    }

    fn runways(&self) -> &[String] {
        &self.runways
    }

    fn assign(&self, flights: &mut [Flight], rng: &mut dyn RandomSource) -> RunwayAssignment {
        let before = assign_uniform(flights, &self.runways, rng);
        let rw1_count = before.iter().filter(|idx| **idx == 0).count();
        let rebalanced = Self::is_overloaded(rw1_count, flights.len());

        for (flight, runway_idx) in flights.iter_mut().zip(before) {
            let after_idx = if rebalanced && runway_idx == 0 {
                rng.weighted_index(&REBALANCE_WEIGHTS)
            } else {
                runway_idx
            };
            flight.assign_runway_after(self.runways[after_idx].clone());
        }

        debug!(rw1_count, rebalanced, "two-runway assignment done");

        RunwayAssignment {
            occupancy: occupancy(flights, &self.runways),
            rebalanced,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overload_threshold_is_exclusive() {
        assert!(!TwoRunwayRebalance::is_overloaded(6, 10));
        assert!(TwoRunwayRebalance::is_overloaded(7, 10));
        assert!(!TwoRunwayRebalance::is_overloaded(12, 20));
        assert!(TwoRunwayRebalance::is_overloaded(13, 20));
        assert!(!TwoRunwayRebalance::is_overloaded(0, 0));
    }
}
