//! Runway Assignment Module
//!
//! Assigns each flight a runway before optimization and a (possibly
//! different) runway after the optimizer rebalances load.
//!
//! # Policy Interface
//!
//! All strategies implement the `RunwayPolicy` trait:
//! ```rust
//! use runway_simulator_core_rs::runway::{RunwayAssignment, RunwayPolicy};
//! use runway_simulator_core_rs::{Flight, RandomSource, RunwayStrategy};
//!
//! struct KeepEverything {
//!     runways: Vec<String>,
//! }
//!
//! impl RunwayPolicy for KeepEverything {
//!     fn strategy(&self) -> RunwayStrategy {
//!         RunwayStrategy::Trend
//!     }
//!
//!     fn runways(&self) -> &[String] {
//!         &self.runways
//!     }
//!
//!     fn assign(&self, _flights: &mut [Flight], _rng: &mut dyn RandomSource) -> RunwayAssignment {
//!         // Assignment logic here
//!         RunwayAssignment::default()
//!     }
//! }
//! ```
//!
//! Available strategies:
//! 1. **TwoRunway**: RW1/RW2, rebalanced only when RW1 is overloaded
//! 2. **Trend**: N runways, a share of flights drift to the least-occupied ones
//!
//! Strategies are built from configuration by [`policy_for`].

use serde::{Deserialize, Serialize};

use crate::config::{RunwayStrategy, ScenarioConfig, MAX_RUNWAY_COUNT};
use crate::models::Flight;
use crate::orchestrator::SimulationError;
use crate::rng::RandomSource;

pub mod trend;
pub mod two_runway;

pub use trend::TrendRebalance;
pub use two_runway::TwoRunwayRebalance;

/// Flight counts on one runway before and after rebalancing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunwayOccupancy {
    pub runway: String,
    pub before: usize,
    pub after: usize,
}

/// Result of a runway assignment pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunwayAssignment {
    /// One entry per runway label, in label order
    pub occupancy: Vec<RunwayOccupancy>,
    /// Whether the strategy's rebalance step ran at all
    pub rebalanced: bool,
}

/// Runway assignment strategy
pub trait RunwayPolicy: Send + Sync {
    /// Which configured strategy this is
    fn strategy(&self) -> RunwayStrategy;

    /// Runway labels in label order
    fn runways(&self) -> &[String];

    /// Set `runway_before` and `runway_after` on every flight.
    fn assign(&self, flights: &mut [Flight], rng: &mut dyn RandomSource) -> RunwayAssignment;
}

/// Labels `RW1..RWn`
pub fn runway_labels(runway_count: usize) -> Vec<String> {
    (1..=runway_count).map(|n| format!("RW{}", n)).collect()
}

/// Build the runway policy for a configuration
///
/// # Errors
/// Returns `InvalidConfiguration` if the runway count is out of range or
/// cannot support the requested strategy.
pub fn policy_for(config: &ScenarioConfig) -> Result<Box<dyn RunwayPolicy>, SimulationError> {
    if !(1..=MAX_RUNWAY_COUNT).contains(&config.runway_count) {
        return Err(SimulationError::InvalidConfiguration(format!(
            "runway_count must be in 1..={}, got {}",
            MAX_RUNWAY_COUNT, config.runway_count
        )));
    }

    let policy: Box<dyn RunwayPolicy> = match config.resolved_strategy() {
        RunwayStrategy::TwoRunway => {
            if config.runway_count != 2 {
                return Err(SimulationError::InvalidConfiguration(format!(
                    "two_runway strategy needs exactly 2 runways, got {}",
                    config.runway_count
                )));
            }
            Box::new(TwoRunwayRebalance::new())
        }
        RunwayStrategy::Trend => Box::new(TrendRebalance::new(config.runway_count)),
    };

    Ok(policy)
}

/// Uniform `runway_before` draw per flight. Returns runway indices.
pub(crate) fn assign_uniform(
    flights: &mut [Flight],
    runways: &[String],
    rng: &mut dyn RandomSource,
) -> Vec<usize> {
    flights
        .iter_mut()
        .map(|flight| {
            let idx = rng.choose_index(runways.len());
            flight.assign_runway_before(runways[idx].clone());
            idx
        })
        .collect()
}

/// Per-runway counts for the current before/after assignment
pub fn occupancy(flights: &[Flight], runways: &[String]) -> Vec<RunwayOccupancy> {
    runways
        .iter()
        .map(|runway| RunwayOccupancy {
            runway: runway.clone(),
            before: flights.iter().filter(|f| f.runway_before() == runway).count(),
            after: flights.iter().filter(|f| f.runway_after() == runway).count(),
        })
        .collect()
}
