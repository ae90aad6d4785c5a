//! Type conversion utilities for FFI boundary
//!
//! Converts between Rust types and PyO3-compatible types (PyDict, PyList, etc.)

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use crate::config::{PerformanceTier, RunwayStrategy, ScenarioConfig, WeatherCondition};
use crate::models::Flight;
use crate::orchestrator::{ScenarioProfile, SimulationError, SimulationReport};
use crate::runway::RunwayOccupancy;
use crate::summary::Summary;

/// Convert an engine error into a Python `ValueError`
pub fn to_py_err(err: SimulationError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

// ========================================================================
// PyDict Extraction Helpers
// ========================================================================

/// Extract an optional field from a Python dict.
///
/// # Returns
/// `Some(value)` if field exists, `None` if missing
///
/// # Errors
/// Returns error only if type conversion fails (not if field is missing)
fn extract_optional<'py, T>(dict: &Bound<'py, PyDict>, key: &str) -> PyResult<Option<T>>
where
    T: FromPyObject<'py>,
{
    match dict.get_item(key)? {
        Some(value) => Ok(Some(value.extract()?)),
        None => Ok(None),
    }
}

// ========================================================================
// Configuration Parser
// ========================================================================

/// Convert Python dict to ScenarioConfig
///
/// Missing keys keep their `ScenarioConfig::default()` values.
///
/// # Errors
///
/// Returns PyErr if:
/// - Type conversions fail
/// - A tier, weather or strategy label is unknown
/// - Values out of valid range
pub fn parse_scenario_config(py_config: &Bound<'_, PyDict>) -> PyResult<ScenarioConfig> {
    let mut config = ScenarioConfig::default();

    if let Some(tier) = extract_optional::<String>(py_config, "performance_tier")? {
        config.performance_tier = tier.parse::<PerformanceTier>().map_err(to_py_err)?;
    }
    if let Some(weather) = extract_optional::<String>(py_config, "weather_condition")? {
        config.weather_condition = weather.parse::<WeatherCondition>().map_err(to_py_err)?;
    }
    if let Some(flight_count) = extract_optional::<usize>(py_config, "flight_count")? {
        config.flight_count = flight_count;
    }
    if let Some(runway_count) = extract_optional::<usize>(py_config, "runway_count")? {
        config.runway_count = runway_count;
    }
    if let Some(rng_seed) = extract_optional::<u64>(py_config, "rng_seed")? {
        config.rng_seed = rng_seed;
    }
    if let Some(strategy) = extract_optional::<String>(py_config, "runway_strategy")? {
        config.runway_strategy = Some(strategy.parse::<RunwayStrategy>().map_err(to_py_err)?);
    }

    config.validate().map_err(to_py_err)?;
    Ok(config)
}

// ========================================================================
// Result Converters
// ========================================================================

/// Convert a flight row to a Python dict
pub fn flight_to_py<'py>(py: Python<'py>, flight: &Flight) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("id", flight.id())?;
    dict.set_item("kind", flight.kind().to_string())?;
    dict.set_item("scheduled_time", flight.scheduled_time())?;
    dict.set_item("delayed_before", flight.delayed_before())?;
    dict.set_item("delay_before_min", flight.delay_before_min())?;
    dict.set_item("new_time_before", flight.new_time_before())?;
    dict.set_item("delay_after_min", flight.delay_after_min())?;
    dict.set_item("new_time_after", flight.new_time_after())?;
    dict.set_item("delayed_after", flight.delayed_after())?;
    dict.set_item("improved", flight.improved())?;
    dict.set_item("runway_before", flight.runway_before())?;
    dict.set_item("runway_after", flight.runway_after())?;
    Ok(dict)
}

fn summary_to_py<'py>(py: Python<'py>, summary: &Summary) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("avg_delay_before", summary.avg_delay_before)?;
    dict.set_item("avg_delay_after", summary.avg_delay_after)?;
    dict.set_item("delayed_before_count", summary.delayed_before_count)?;
    dict.set_item("delayed_after_count", summary.delayed_after_count)?;
    dict.set_item("improved_count", summary.improved_count)?;
    dict.set_item("improvement_pct", summary.improvement_pct)?;
    dict.set_item("savings_count", summary.savings_count)?;
    dict.set_item("estimated_savings", summary.estimated_savings)?;
    dict.set_item("feedback", summary.feedback.message())?;
    Ok(dict)
}

fn profile_to_py<'py>(py: Python<'py>, profile: &ScenarioProfile) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("performance_tier", profile.performance_tier.label())?;
    dict.set_item("weather_condition", profile.weather_condition.label())?;
    dict.set_item("delay_chance", profile.delay_chance)?;
    dict.set_item("delay_chance_pct", profile.delay_chance_pct)?;
    dict.set_item("weather_impact", profile.weather_impact)?;
    dict.set_item("reduction_factor", profile.reduction_factor)?;
    dict.set_item("runway_strategy", profile.runway_strategy.label())?;
    dict.set_item("runway_count", profile.runway_count)?;
    dict.set_item("description", profile.describe())?;
    Ok(dict)
}

fn occupancy_to_py<'py>(py: Python<'py>, entry: &RunwayOccupancy) -> PyResult<Bound<'py, PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("runway", &entry.runway)?;
    dict.set_item("before", entry.before)?;
    dict.set_item("after", entry.after)?;
    Ok(dict)
}

/// Convert a full report to a Python dict
///
/// Keys: `config_hash`, `profile`, `flights`, `runway_occupancy`,
/// `rebalanced`, `summary`, `event_count`.
pub fn report_to_py(py: Python<'_>, report: &SimulationReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("config_hash", &report.config_hash)?;
    dict.set_item("profile", profile_to_py(py, &report.profile)?)?;

    let flights = PyList::empty_bound(py);
    for flight in &report.flights {
        flights.append(flight_to_py(py, flight)?)?;
    }
    dict.set_item("flights", flights)?;

    let occupancy = PyList::empty_bound(py);
    for entry in &report.runway_occupancy {
        occupancy.append(occupancy_to_py(py, entry)?)?;
    }
    dict.set_item("runway_occupancy", occupancy)?;

    dict.set_item("rebalanced", report.rebalanced)?;
    dict.set_item("summary", summary_to_py(py, &report.summary)?)?;
    dict.set_item("event_count", report.events.len())?;

    Ok(dict.unbind())
}
