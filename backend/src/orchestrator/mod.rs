//! Orchestrator - scenario pipeline
//!
//! Runs generation, delays, optimization, runway assignment and summary as
//! one batch per configuration.
//!
//! See `engine.rs` for full implementation.

pub mod engine;
pub mod report;
pub mod session;

// Re-export main types for convenience
pub use engine::{simulate, Orchestrator, SimulationError};
pub use report::{compute_config_hash, ScenarioProfile, SimulationReport};
pub use session::SimulationSession;
