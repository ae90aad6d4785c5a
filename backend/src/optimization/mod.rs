//! Post-optimization delay model
//!
//! Simulates the scheduling optimizer's effect on each flight:
//!
//! ```text
//! For each flight:
//! 1. delay_before == 0          -> delay_after = 0 (no draw)
//! 2. Bernoulli(0.1) succeeds    -> delay_after = 0 (full recovery)
//! 3. reduction = delay_before * tier_factor * (1 - weather_impact)
//! 4. delay_after = round(max(delay_before - reduction, 0))
//! ```
//!
//! Worse weather dampens the optimizer. Because the reduction is never
//! negative, `delay_after <= delay_before` holds for every flight.

use tracing::debug;

use crate::config::{PerformanceTier, WeatherCondition};
use crate::models::Flight;
use crate::rng::RandomSource;

/// Chance that a delayed flight recovers completely
pub const FULL_RECOVERY_PROBABILITY: f64 = 0.1;

/// What the optimizer did to the fleet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptimizationOutcome {
    /// Flights that had a delay and went through the optimizer
    pub optimized_count: usize,
    /// Indices of flights that recovered fully, in flight order
    pub full_recoveries: Vec<usize>,
}

/// Optimizer for one performance tier and weather
///
/// # Example
/// ```
/// use runway_simulator_core_rs::optimization::OptimizationModel;
/// use runway_simulator_core_rs::{PerformanceTier, WeatherCondition};
///
/// let model = OptimizationModel::new(PerformanceTier::Excellent, WeatherCondition::Clear);
/// assert_eq!(model.reduced_delay(300), 240);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OptimizationModel {
    factor: f64,
    weather_impact: f64,
}

impl OptimizationModel {
    pub fn new(tier: PerformanceTier, weather: WeatherCondition) -> Self {
        Self {
            factor: tier.reduction_factor(),
            weather_impact: weather.impact(),
        }
    }

    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Minutes removed from a delay when there is no full recovery
    pub fn reduction(&self, delay_before_min: u32) -> f64 {
        delay_before_min as f64 * self.factor * (1.0 - self.weather_impact)
    }

    /// Delay left after the optimizer, without the full-recovery draw
    pub fn reduced_delay(&self, delay_before_min: u32) -> u32 {
        let remaining = (delay_before_min as f64 - self.reduction(delay_before_min)).max(0.0);
        remaining.round_ties_even() as u32
    }

    /// Set `delay_after_min` on every flight.
    pub fn optimize(&self, flights: &mut [Flight], rng: &mut dyn RandomSource) -> OptimizationOutcome {
        let mut outcome = OptimizationOutcome::default();

        for (idx, flight) in flights.iter_mut().enumerate() {
            let before = flight.delay_before_min();
            if before == 0 {
                flight.set_delay_after(0);
                continue;
            }

            outcome.optimized_count += 1;
            if rng.bernoulli(FULL_RECOVERY_PROBABILITY) {
                flight.set_delay_after(0);
                outcome.full_recoveries.push(idx);
            } else {
                flight.set_delay_after(self.reduced_delay(before));
            }
        }

        debug!(
            optimized = outcome.optimized_count,
            full_recoveries = outcome.full_recoveries.len(),
            "optimization applied"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduced_delay_never_exceeds_original() {
        for tier in PerformanceTier::ALL {
            for weather in WeatherCondition::ALL {
                let model = OptimizationModel::new(tier, weather);
                for before in [0u32, 1, 5, 7, 29, 42, 250, 359] {
                    assert!(model.reduced_delay(before) <= before);
                }
            }
        }
    }

    #[test]
    fn test_bad_thunderstorm_reduction() {
        let model = OptimizationModel::new(PerformanceTier::Bad, WeatherCondition::Thunderstorm);
        assert_eq!(model.factor(), 0.65);
        assert!((model.reduction(100) - 39.0).abs() < 1e-9);
        assert_eq!(model.reduced_delay(100), 61);
    }
}
