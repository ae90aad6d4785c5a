//! Pre-optimization delay model
//!
//! Two layers of delay are applied to a freshly generated fleet:
//!
//! 1. **Baseline delays**: each flight is independently delayed with the
//!    tier's delay chance. A delayed flight gets
//!    `round(uniform[5, 30) * (1 + weather_impact))` minutes.
//! 2. **Long-delay injection**: `max(1, round(0.1 * flight_count))` flights,
//!    picked uniformly without replacement from the whole fleet, get their
//!    delay overwritten with uniform[250, 360) minutes. This ignores the
//!    baseline outcome: an on-time flight can become severely delayed and a
//!    moderate delay can be replaced. The `delayed_before` flag keeps the
//!    baseline trial's result.
//!
//! # Draw Order
//!
//! - `n` Bernoulli draws, then `n` magnitude draws (one per flight, delayed
//!   or not, so the stream does not depend on the trial outcomes)
//! - `k` sampled indices, then `k` long-delay magnitudes
//!
//! Rounding is half-to-even.

use tracing::debug;

use crate::config::{PerformanceTier, WeatherCondition};
use crate::models::Flight;
use crate::rng::RandomSource;

/// Baseline delay magnitude range [min, max) before weather scaling
pub const BASE_DELAY_RANGE: (i64, i64) = (5, 30);

/// Long-delay magnitude range [min, max)
pub const LONG_DELAY_RANGE: (i64, i64) = (250, 360);

/// Share of the fleet hit by long delays
pub const LONG_DELAY_SHARE: f64 = 0.1;

/// Number of flights that receive a long delay: `max(1, round(0.1 * n))`
///
/// # Example
/// ```
/// use runway_simulator_core_rs::delay::long_delay_count;
///
/// assert_eq!(long_delay_count(20), 2);
/// assert_eq!(long_delay_count(4), 1);
/// ```
pub fn long_delay_count(flight_count: usize) -> usize {
    let scaled = (LONG_DELAY_SHARE * flight_count as f64).round_ties_even() as usize;
    scaled.max(1).min(flight_count)
}

/// One overwritten delay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LongDelayInjection {
    /// Index of the flight in the fleet
    pub flight_index: usize,
    pub previous_delay_min: u32,
    pub delay_min: u32,
}

/// What the delay model did to the fleet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayOutcome {
    /// Flights whose baseline trial came up delayed
    pub delayed_count: usize,
    /// Long-delay injections in sample order
    pub injections: Vec<LongDelayInjection>,
}

/// Pre-optimization delay model for one performance tier and weather
#[derive(Debug, Clone, Copy)]
pub struct DelayModel {
    delay_chance: f64,
    weather_impact: f64,
}

impl DelayModel {
    pub fn new(tier: PerformanceTier, weather: WeatherCondition) -> Self {
        Self {
            delay_chance: tier.delay_chance(),
            weather_impact: weather.impact(),
        }
    }

    pub fn delay_chance(&self) -> f64 {
        self.delay_chance
    }

    pub fn weather_impact(&self) -> f64 {
        self.weather_impact
    }

    /// Weather-scaled baseline delay for a raw magnitude draw
    pub fn scaled_delay(&self, raw_minutes: i64) -> u32 {
        (raw_minutes as f64 * (1.0 + self.weather_impact)).round_ties_even() as u32
    }

    /// Apply baseline delays, then long-delay injection.
    pub fn apply(&self, flights: &mut [Flight], rng: &mut dyn RandomSource) -> DelayOutcome {
        let delayed_count = self.apply_base_delays(flights, rng);
        let injections = self.inject_long_delays(flights, rng);

        debug!(
            delayed = delayed_count,
            long_delays = injections.len(),
            "pre-optimization delays applied"
        );

        DelayOutcome {
            delayed_count,
            injections,
        }
    }

    /// Baseline Bernoulli delays. Returns the number of delayed flights.
    pub fn apply_base_delays(&self, flights: &mut [Flight], rng: &mut dyn RandomSource) -> usize {
        let trials: Vec<bool> = (0..flights.len())
            .map(|_| rng.bernoulli(self.delay_chance))
            .collect();
        let magnitudes: Vec<i64> = (0..flights.len())
            .map(|_| rng.range(BASE_DELAY_RANGE.0, BASE_DELAY_RANGE.1))
            .collect();

        for ((flight, delayed), raw) in flights.iter_mut().zip(&trials).zip(magnitudes) {
            let delay = if *delayed { self.scaled_delay(raw) } else { 0 };
            flight.set_delay_before(*delayed, delay);
        }

        trials.iter().filter(|d| **d).count()
    }

    /// Overwrite the delay of a random subset with a long delay.
    pub fn inject_long_delays(
        &self,
        flights: &mut [Flight],
        rng: &mut dyn RandomSource,
    ) -> Vec<LongDelayInjection> {
        if flights.is_empty() {
            return Vec::new();
        }

        let picked = rng.sample_without_replacement(flights.len(), long_delay_count(flights.len()));

        picked
            .into_iter()
            .map(|idx| {
                let delay_min = rng.range(LONG_DELAY_RANGE.0, LONG_DELAY_RANGE.1) as u32;
                let flight = &mut flights[idx];
                let previous_delay_min = flight.delay_before_min();
                flight.override_delay_before(delay_min);
                LongDelayInjection {
                    flight_index: idx,
                    previous_delay_min,
                    delay_min,
                }
            })
            .collect()
    }
}
