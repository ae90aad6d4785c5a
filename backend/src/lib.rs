//! Runway Simulator Core - Rust Engine
//!
//! Scenario simulator for runway scheduling with deterministic execution.
//!
//! # Architecture
//!
//! - **config**: Scenario configuration (tier, weather, counts, seed)
//! - **models**: Domain types (Flight, Event)
//! - **fleet**: Base fleet generation
//! - **delay**: Pre-optimization delays and long-delay injection
//! - **optimization**: Post-optimization delay reduction
//! - **runway**: Runway assignment strategies
//! - **summary**: KPIs and feedback classification
//! - **orchestrator**: Pipeline, report and session
//! - **rng**: Deterministic random number generation
//!
//! # Critical Invariants
//!
//! 1. All times and delays are whole minutes (u32)
//! 2. All randomness is deterministic (seeded RNG, one per run)
//! 3. `delay_after_min <= delay_before_min` for every flight
//! 4. FFI boundary is minimal and safe

// Module declarations
pub mod config;
pub mod delay;
pub mod fleet;
pub mod models;
pub mod optimization;
pub mod orchestrator;
pub mod rng;
pub mod runway;
pub mod summary;

// Re-exports for convenience
pub use config::{PerformanceTier, RunwayStrategy, ScenarioConfig, WeatherCondition};
pub use models::{
    event::{Event, EventLog, PipelineStage},
    flight::{Flight, FlightKind},
};
pub use orchestrator::{
    simulate, Orchestrator, ScenarioProfile, SimulationError, SimulationReport, SimulationSession,
};
pub use rng::{RandomSource, RngManager};
pub use runway::{RunwayOccupancy, RunwayPolicy};
pub use summary::{Feedback, Summary, SummaryCalculator};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn runway_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulation::PyRunwaySimulation>()?;
    m.add_function(wrap_pyfunction!(ffi::simulation::run_scenario, m)?)?;
    Ok(())
}
