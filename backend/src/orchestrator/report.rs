//! Simulation Report
//!
//! Everything a run produces, handed to the presentation layer as one value:
//! the annotated flight table, runway occupancy, KPIs and the event log.
//!
//! # Critical Invariants
//!
//! - **Determinism**: Same seed + config produces an identical report,
//!   down to its JSON bytes
//! - **Config Matching**: `config_hash` identifies the exact configuration
//!   that produced the report

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::config::{PerformanceTier, RunwayStrategy, ScenarioConfig, WeatherCondition};
use crate::models::event::EventLog;
use crate::models::flight::Flight;
use crate::orchestrator::SimulationError;
use crate::runway::{RunwayAssignment, RunwayOccupancy};
use crate::summary::Summary;

// ============================================================================
// Scenario Profile
// ============================================================================

/// Resolved parameters of a scenario, for display next to the results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioProfile {
    pub performance_tier: PerformanceTier,
    pub weather_condition: WeatherCondition,
    pub delay_chance: f64,
    /// Delay chance as a whole percentage (truncated)
    pub delay_chance_pct: u32,
    pub weather_impact: f64,
    pub reduction_factor: f64,
    pub runway_strategy: RunwayStrategy,
    pub runway_count: usize,
}

impl ScenarioProfile {
    pub fn new(config: &ScenarioConfig, runway_strategy: RunwayStrategy) -> Self {
        let delay_chance = config.performance_tier.delay_chance();
        Self {
            performance_tier: config.performance_tier,
            weather_condition: config.weather_condition,
            delay_chance,
            delay_chance_pct: (delay_chance * 100.0) as u32,
            weather_impact: config.weather_condition.impact(),
            reduction_factor: config.performance_tier.reduction_factor(),
            runway_strategy,
            runway_count: config.runway_count,
        }
    }

    /// One-line scenario banner
    ///
    /// # Example
    /// ```
    /// use runway_simulator_core_rs::{RunwayStrategy, ScenarioConfig, ScenarioProfile};
    ///
    /// let profile = ScenarioProfile::new(&ScenarioConfig::default(), RunwayStrategy::TwoRunway);
    /// assert_eq!(
    ///     profile.describe(),
    ///     "Scenario: Medium | Weather: Clear | Delay chance: 30% | Weather impact factor: 0"
    /// );
    /// ```
    pub fn describe(&self) -> String {
        format!(
            "Scenario: {} | Weather: {} | Delay chance: {}% | Weather impact factor: {}",
            self.performance_tier, self.weather_condition, self.delay_chance_pct, self.weather_impact
        )
    }
}

// ============================================================================
// Report
// ============================================================================

/// Complete output of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub config: ScenarioConfig,

    /// SHA256 of the canonical config JSON
    pub config_hash: String,

    pub profile: ScenarioProfile,

    /// Flight table in generation order
    pub flights: Vec<Flight>,

    /// One entry per runway, in label order
    pub runway_occupancy: Vec<RunwayOccupancy>,

    /// Whether the runway strategy's rebalance step ran
    pub rebalanced: bool,

    pub summary: Summary,

    pub events: EventLog,
}

impl SimulationReport {
    pub fn new(
        config: ScenarioConfig,
        profile: ScenarioProfile,
        flights: Vec<Flight>,
        assignment: RunwayAssignment,
        summary: Summary,
        events: EventLog,
    ) -> Result<Self, SimulationError> {
        let config_hash = compute_config_hash(&config)?;
        Ok(Self {
            config,
            config_hash,
            profile,
            flights,
            runway_occupancy: assignment.occupancy,
            rebalanced: assignment.rebalanced,
            summary,
            events,
        })
    }

    /// Look up a flight by ID
    pub fn flight(&self, flight_id: &str) -> Option<&Flight> {
        self.flights.iter().find(|f| f.id() == flight_id)
    }

    /// Serialize the whole report
    pub fn to_json(&self) -> Result<String, SimulationError> {
        serde_json::to_string(self)
            .map_err(|e| SimulationError::Serialization(format!("Report serialization failed: {}", e)))
    }

    /// Serialize the whole report, indented
    pub fn to_json_pretty(&self) -> Result<String, SimulationError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SimulationError::Serialization(format!("Report serialization failed: {}", e)))
    }
}

/// Compute SHA256 hash of a configuration
///
/// Uses canonical JSON serialization with sorted keys so the hash does not
/// depend on field order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, SimulationError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    // Recursively sort all object keys for canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_hash_stable_and_sensitive() {
        let config = ScenarioConfig::default();
        let hash1 = compute_config_hash(&config).unwrap();
        let hash2 = compute_config_hash(&config.clone()).unwrap();
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64);

        let reseeded = ScenarioConfig {
            rng_seed: 2,
            ..Default::default()
        };
        assert_ne!(hash1, compute_config_hash(&reseeded).unwrap());
    }

    #[test]
    fn test_profile_truncates_delay_percent() {
        let config = ScenarioConfig {
            performance_tier: PerformanceTier::Good,
            weather_condition: WeatherCondition::Fog,
            ..Default::default()
        };
        let profile = ScenarioProfile::new(&config, RunwayStrategy::TwoRunway);
        assert_eq!(profile.delay_chance_pct, 20);
        assert_eq!(profile.weather_impact, 0.3);
        assert_eq!(profile.reduction_factor, 0.4);
    }
}
