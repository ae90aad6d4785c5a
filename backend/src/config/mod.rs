//! Scenario configuration
//!
//! Operator-selected conditions for one simulation run. A configuration is
//! immutable once handed to the orchestrator; changing any field means a new
//! run from scratch.
//!
//! Labels parse leniently (case, spacing, punctuation and emoji are ignored)
//! so both `"Thunderstorm ⛈️"` and `"thunderstorm"` are accepted, but an
//! unknown label is always an error, never a silent default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::orchestrator::SimulationError;

/// Largest fleet a single run accepts.
pub const MAX_FLIGHT_COUNT: usize = 10_000;

/// Largest runway count a single run accepts.
pub const MAX_RUNWAY_COUNT: usize = 1_000;

/// Lowercase alphanumeric form of a label, used for lenient matching.
fn normalize_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

// ============================================================================
// Performance Tier
// ============================================================================

/// Overall operational performance, driving baseline delay probability and
/// how much delay the optimizer removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PerformanceTier {
    Bad,
    Medium,
    Good,
    Excellent,
}

impl PerformanceTier {
    pub const ALL: [PerformanceTier; 4] = [
        PerformanceTier::Bad,
        PerformanceTier::Medium,
        PerformanceTier::Good,
        PerformanceTier::Excellent,
    ];

    /// Probability that a flight is delayed before optimization
    pub fn delay_chance(self) -> f64 {
        match self {
            PerformanceTier::Bad => 0.5,
            PerformanceTier::Medium => 0.3,
            PerformanceTier::Good => 0.2,
            PerformanceTier::Excellent => 0.0,
        }
    }

    /// Fraction of a delay the optimizer removes in clear weather
    pub fn reduction_factor(self) -> f64 {
        match self {
            PerformanceTier::Bad => 0.65,
            PerformanceTier::Medium => 0.5,
            PerformanceTier::Good => 0.4,
            PerformanceTier::Excellent => 0.2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceTier::Bad => "Bad",
            PerformanceTier::Medium => "Medium",
            PerformanceTier::Good => "Good",
            PerformanceTier::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for PerformanceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PerformanceTier {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        PerformanceTier::ALL
            .into_iter()
            .find(|tier| normalize_label(tier.label()) == key)
            .ok_or_else(|| {
                SimulationError::InvalidConfiguration(format!(
                    "unknown performance tier '{}'",
                    s
                ))
            })
    }
}

impl TryFrom<String> for PerformanceTier {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PerformanceTier> for String {
    fn from(tier: PerformanceTier) -> Self {
        tier.label().to_string()
    }
}

// ============================================================================
// Weather Condition
// ============================================================================

/// Weather severity, scaling delay magnitude and dampening the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WeatherCondition {
    Clear,
    LightRain,
    Thunderstorm,
    Fog,
}

impl WeatherCondition {
    pub const ALL: [WeatherCondition; 4] = [
        WeatherCondition::Clear,
        WeatherCondition::LightRain,
        WeatherCondition::Thunderstorm,
        WeatherCondition::Fog,
    ];

    /// Severity factor in [0, 1)
    pub fn impact(self) -> f64 {
        match self {
            WeatherCondition::Clear => 0.0,
            WeatherCondition::LightRain => 0.2,
            WeatherCondition::Thunderstorm => 0.4,
            WeatherCondition::Fog => 0.3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            WeatherCondition::Clear => "Clear",
            WeatherCondition::LightRain => "Light Rain",
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Fog => "Fog",
        }
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeatherCondition {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = normalize_label(s);
        WeatherCondition::ALL
            .into_iter()
            .find(|weather| normalize_label(weather.label()) == key)
            .ok_or_else(|| {
                SimulationError::InvalidConfiguration(format!(
                    "unknown weather condition '{}'",
                    s
                ))
            })
    }
}

impl TryFrom<String> for WeatherCondition {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeatherCondition> for String {
    fn from(weather: WeatherCondition) -> Self {
        weather.label().to_string()
    }
}

// ============================================================================
// Runway Strategy
// ============================================================================

/// Runway rebalancing strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RunwayStrategy {
    /// RW1/RW2 split, rebalanced only when RW1 carries more than 60%
    TwoRunway,
    /// N runways, a share of flights drift toward the least-occupied ones
    Trend,
}

impl RunwayStrategy {
    pub fn label(self) -> &'static str {
        match self {
            RunwayStrategy::TwoRunway => "two_runway",
            RunwayStrategy::Trend => "trend",
        }
    }

    /// Default strategy for a runway count
    pub fn for_runway_count(runway_count: usize) -> Self {
        if runway_count == 2 {
            RunwayStrategy::TwoRunway
        } else {
            RunwayStrategy::Trend
        }
    }
}

impl fmt::Display for RunwayStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RunwayStrategy {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_label(s).as_str() {
            "tworunway" => Ok(RunwayStrategy::TwoRunway),
            "trend" => Ok(RunwayStrategy::Trend),
            _ => Err(SimulationError::InvalidConfiguration(format!(
                "unknown runway strategy '{}'",
                s
            ))),
        }
    }
}

impl TryFrom<String> for RunwayStrategy {
    type Error = SimulationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RunwayStrategy> for String {
    fn from(strategy: RunwayStrategy) -> Self {
        strategy.label().to_string()
    }
}

// ============================================================================
// Scenario Configuration
// ============================================================================

/// Complete configuration for one simulation run
///
/// Missing fields fall back to [`ScenarioConfig::default`] when deserialized,
/// so a config file only needs the values it changes.
///
/// # Example
/// ```
/// use runway_simulator_core_rs::{PerformanceTier, ScenarioConfig, WeatherCondition};
///
/// let config = ScenarioConfig {
///     performance_tier: PerformanceTier::Bad,
///     weather_condition: WeatherCondition::Thunderstorm,
///     flight_count: 50,
///     ..Default::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub performance_tier: PerformanceTier,

    pub weather_condition: WeatherCondition,

    /// Number of flights to synthesize (1..=MAX_FLIGHT_COUNT)
    pub flight_count: usize,

    /// Number of runways, labels RW1..RWn (1..=MAX_RUNWAY_COUNT)
    pub runway_count: usize,

    /// Seed for every random draw in the run
    pub rng_seed: u64,

    /// Explicit strategy; `None` picks one from `runway_count`
    pub runway_strategy: Option<RunwayStrategy>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            performance_tier: PerformanceTier::Medium,
            weather_condition: WeatherCondition::Clear,
            flight_count: 20,
            runway_count: 2,
            rng_seed: 1,
            runway_strategy: None,
        }
    }
}

impl ScenarioConfig {
    /// Check bounds and strategy/runway-count consistency
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.flight_count == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "flight_count must be >= 1".to_string(),
            ));
        }

        if self.flight_count > MAX_FLIGHT_COUNT {
            return Err(SimulationError::InvalidConfiguration(format!(
                "flight_count must be <= {}, got {}",
                MAX_FLIGHT_COUNT, self.flight_count
            )));
        }

        if self.runway_count == 0 {
            return Err(SimulationError::InvalidConfiguration(
                "runway_count must be >= 1".to_string(),
            ));
        }

        if self.runway_count > MAX_RUNWAY_COUNT {
            return Err(SimulationError::InvalidConfiguration(format!(
                "runway_count must be <= {}, got {}",
                MAX_RUNWAY_COUNT, self.runway_count
            )));
        }

        if self.runway_strategy == Some(RunwayStrategy::TwoRunway) && self.runway_count != 2 {
            return Err(SimulationError::InvalidConfiguration(format!(
                "two_runway strategy needs exactly 2 runways, got {}",
                self.runway_count
            )));
        }

        Ok(())
    }

    /// Strategy actually used for this configuration
    pub fn resolved_strategy(&self) -> RunwayStrategy {
        self.runway_strategy
            .unwrap_or_else(|| RunwayStrategy::for_runway_count(self.runway_count))
    }
}
