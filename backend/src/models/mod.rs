//! Domain models for the runway simulator

pub mod event;
pub mod flight;

// Re-exports
pub use event::{Event, EventLog, PipelineStage};
pub use flight::{Flight, FlightKind};
