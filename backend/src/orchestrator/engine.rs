//! Orchestrator Engine
//!
//! Runs the whole scenario pipeline as one synchronous batch:
//!
//! ```text
//! For each run:
//! 1. Generate fleet (kinds, sorted scheduled times)
//! 2. Apply baseline delays (Bernoulli per flight)
//! 3. Inject long delays (random subset, 250-360 min)
//! 4. Optimize delays (full recovery or tier/weather reduction)
//! 5. Assign runways (strategy picked from configuration)
//! 6. Summarize KPIs and feedback
//! 7. Log events
//! ```
//!
//! Every run seeds a fresh generator from the configuration, so calling
//! `run()` twice returns identical reports and separate orchestrators never
//! share random state.
//!
//! # Example
//!
//! ```rust
//! use runway_simulator_core_rs::{Orchestrator, PerformanceTier, ScenarioConfig, WeatherCondition};
//!
//! let config = ScenarioConfig {
//!     performance_tier: PerformanceTier::Bad,
//!     weather_condition: WeatherCondition::Thunderstorm,
//!     flight_count: 30,
//!     runway_count: 2,
//!     rng_seed: 12345,
//!     runway_strategy: None,
//! };
//!
//! let orchestrator = Orchestrator::new(config).unwrap();
//! let report = orchestrator.run().unwrap();
//!
//! assert_eq!(report.flights.len(), 30);
//! println!("{}: {}", report.profile.describe(), report.summary.feedback);
//! ```

use thiserror::Error;
use tracing::{info, info_span};

use crate::config::ScenarioConfig;
use crate::delay::DelayModel;
use crate::fleet::FlightGenerator;
use crate::models::event::{Event, EventLog};
use crate::optimization::OptimizationModel;
use crate::rng::RngManager;
use crate::runway::{policy_for, RunwayPolicy};
use crate::summary::SummaryCalculator;

use super::report::{ScenarioProfile, SimulationReport};

// ============================================================================
// Errors
// ============================================================================

/// Simulation errors
///
/// The engine is pure computation, so the only failures are bad input and
/// report serialization. Errors are returned, never swallowed or retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    /// Configuration validation error
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Report or config could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ============================================================================
// Orchestrator
// ============================================================================

/// Validated scenario plus its runway policy, ready to run
pub struct Orchestrator {
    config: ScenarioConfig,
    runway_policy: Box<dyn RunwayPolicy>,
}

impl Orchestrator {
    /// Validate the configuration and build the runway policy
    ///
    /// # Errors
    /// Returns `InvalidConfiguration` for out-of-range counts or a strategy
    /// the runway count cannot support.
    pub fn new(config: ScenarioConfig) -> Result<Self, SimulationError> {
        config.validate()?;
        let runway_policy = policy_for(&config)?;

        Ok(Self {
            config,
            runway_policy,
        })
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    /// Execute the full pipeline with a freshly seeded generator
    pub fn run(&self) -> Result<SimulationReport, SimulationError> {
        let config = &self.config;
        let _span = info_span!(
            "simulation_run",
            seed = config.rng_seed,
            tier = %config.performance_tier,
            weather = %config.weather_condition,
            flights = config.flight_count,
        )
        .entered();

        let mut rng = RngManager::new(config.rng_seed);
        let mut events = EventLog::new();

        // STEP 1: FLEET
        let mut flights = FlightGenerator::new(config.flight_count).generate(&mut rng);
        for flight in &flights {
            events.log(Event::FlightScheduled {
                flight_id: flight.id().to_string(),
                kind: flight.kind(),
                scheduled_time: flight.scheduled_time(),
            });
        }

        // STEP 2-3: BASELINE DELAYS + LONG-DELAY INJECTION
        let delay_model = DelayModel::new(config.performance_tier, config.weather_condition);
        let delays = delay_model.apply(&mut flights, &mut rng);

        // Injection overwrote some baseline delays; recover them for the log
        let mut base_delays: Vec<u32> = flights.iter().map(|f| f.delay_before_min()).collect();
        for injection in &delays.injections {
            base_delays[injection.flight_index] = injection.previous_delay_min;
        }
        for (flight, delay_min) in flights.iter().zip(base_delays) {
            if flight.delayed_before() {
                events.log(Event::BaseDelay {
                    flight_id: flight.id().to_string(),
                    delay_min,
                });
            }
        }
        for injection in &delays.injections {
            events.log(Event::LongDelayInjected {
                flight_id: flights[injection.flight_index].id().to_string(),
                previous_delay_min: injection.previous_delay_min,
                delay_min: injection.delay_min,
            });
        }

        // STEP 4: OPTIMIZATION
        let optimizer = OptimizationModel::new(config.performance_tier, config.weather_condition);
        let optimization = optimizer.optimize(&mut flights, &mut rng);
        let mut recovered = vec![false; flights.len()];
        for idx in &optimization.full_recoveries {
            recovered[*idx] = true;
        }
        for (flight, full_recovery) in flights.iter().zip(recovered) {
            if flight.delay_before_min() > 0 {
                events.log(Event::DelayOptimized {
                    flight_id: flight.id().to_string(),
                    delay_before_min: flight.delay_before_min(),
                    delay_after_min: flight.delay_after_min(),
                    full_recovery,
                });
            }
        }

        // STEP 5: RUNWAYS
        let assignment = self.runway_policy.assign(&mut flights, &mut rng);
        for flight in flights
            .iter()
            .filter(|f| f.runway_before() != f.runway_after())
        {
            events.log(Event::RunwayReassigned {
                flight_id: flight.id().to_string(),
                from: flight.runway_before().to_string(),
                to: flight.runway_after().to_string(),
            });
        }

        // STEP 6: SUMMARY
        let summary = SummaryCalculator::summarize(&flights);
        events.log(Event::SummaryComputed {
            avg_delay_before: summary.avg_delay_before,
            avg_delay_after: summary.avg_delay_after,
            improvement_pct: summary.improvement_pct,
            feedback: summary.feedback_message.clone(),
        });

        info!(
            avg_delay_before = summary.avg_delay_before,
            avg_delay_after = summary.avg_delay_after,
            improvement_pct = summary.improvement_pct,
            savings = summary.estimated_savings,
            feedback = %summary.feedback,
            "simulation complete"
        );

        SimulationReport::new(
            config.clone(),
            ScenarioProfile::new(config, self.runway_policy.strategy()),
            flights,
            assignment,
            summary,
            events,
        )
    }
}

/// Validate, build and run a scenario in one call
pub fn simulate(config: ScenarioConfig) -> Result<SimulationReport, SimulationError> {
    Orchestrator::new(config)?.run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{PerformanceTier, WeatherCondition};

    #[test]
    fn test_new_rejects_zero_flights() {
        let config = ScenarioConfig {
            flight_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            Orchestrator::new(config),
            Err(SimulationError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_run_is_repeatable_on_same_orchestrator() {
        let orchestrator = Orchestrator::new(ScenarioConfig {
            performance_tier: PerformanceTier::Bad,
            weather_condition: WeatherCondition::Fog,
            ..Default::default()
        })
        .unwrap();

        let first = orchestrator.run().unwrap();
        let second = orchestrator.run().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_base_delay_events_keep_baseline_magnitude() {
        // Clear weather: baseline delays stay in [5, 30) even when a long
        // delay later overwrites the flight
        let report = simulate(ScenarioConfig {
            performance_tier: PerformanceTier::Bad,
            flight_count: 60,
            rng_seed: 31,
            ..Default::default()
        })
        .unwrap();

        let base = report.events.events_of_type("BaseDelay");
        assert_eq!(base.len(), report.summary.delayed_before_count);
        for event in base {
            match event {
                Event::BaseDelay { delay_min, .. } => assert!((5..30).contains(delay_min)),
                other => panic!("unexpected event {:?}", other),
            }
        }
    }

    #[test]
    fn test_event_log_covers_every_stage() {
        let report = simulate(ScenarioConfig::default()).unwrap();
        let flights = report.flights.len();

        assert_eq!(report.events.events_of_type("FlightScheduled").len(), flights);
        assert_eq!(report.events.events_of_type("SummaryComputed").len(), 1);
        assert_eq!(
            report.events.events_of_type("LongDelayInjected").len(),
            crate::delay::long_delay_count(flights)
        );
    }
}
