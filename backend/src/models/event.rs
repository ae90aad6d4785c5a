//! Event logging for simulation replay and auditing.
//!
//! This module defines the Event enum which captures every significant
//! mutation of the flight table during a run. Events enable:
//! - Debugging (understand which stage changed which flight)
//! - Auditing (verify the optimizer never worsened a delay)
//! - Analysis (count disruptions, recoveries and reassignments)
//!
//! # Event Types
//!
//! Events are categorized by pipeline stage:
//! - **Generation**: Flight created with its scheduled slot
//! - **Delay**: Baseline delay applied, long delay injected
//! - **Optimization**: Post-optimization delay computed
//! - **Runway**: Flight moved to another runway
//! - **Summary**: KPIs derived for the run
//!
//! # Example
//!
//! ```rust
//! use runway_simulator_core_rs::models::{Event, EventLog, PipelineStage};
//!
//! let mut log = EventLog::new();
//! log.log(Event::LongDelayInjected {
//!     flight_id: "F1003".to_string(),
//!     previous_delay_min: 12,
//!     delay_min: 275,
//! });
//!
//! assert_eq!(log.events_at_stage(PipelineStage::Delay).len(), 1);
//! ```

use serde::Serialize;

use super::flight::FlightKind;

/// Pipeline stage an event belongs to, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PipelineStage {
    Generation,
    Delay,
    Optimization,
    Runway,
    Summary,
}

/// Simulation event capturing a change to the flight table.
///
/// Events are logged in the order they occur, which is also the order in
/// which random draws were consumed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type")]
pub enum Event {
    /// Flight created by the fleet generator
    FlightScheduled {
        flight_id: String,
        kind: FlightKind,
        scheduled_time: u32,
    },

    /// Baseline delay trial came up delayed
    BaseDelay {
        flight_id: String,
        delay_min: u32,
    },

    /// Severe disruption overwrote the flight's delay
    LongDelayInjected {
        flight_id: String,
        previous_delay_min: u32,
        delay_min: u32,
    },

    /// Optimizer produced the post-optimization delay of a delayed flight
    DelayOptimized {
        flight_id: String,
        delay_before_min: u32,
        delay_after_min: u32,
        full_recovery: bool,
    },

    /// Runway policy moved the flight
    RunwayReassigned {
        flight_id: String,
        from: String,
        to: String,
    },

    /// KPIs derived for the run
    SummaryComputed {
        avg_delay_before: f64,
        avg_delay_after: f64,
        improvement_pct: f64,
        feedback: String,
    },
}

impl Event {
    /// Stage that emitted this event
    pub fn stage(&self) -> PipelineStage {
        match self {
            Event::FlightScheduled { .. } => PipelineStage::Generation,
            Event::BaseDelay { .. } => PipelineStage::Delay,
            Event::LongDelayInjected { .. } => PipelineStage::Delay,
            Event::DelayOptimized { .. } => PipelineStage::Optimization,
            Event::RunwayReassigned { .. } => PipelineStage::Runway,
            Event::SummaryComputed { .. } => PipelineStage::Summary,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::FlightScheduled { .. } => "FlightScheduled",
            Event::BaseDelay { .. } => "BaseDelay",
            Event::LongDelayInjected { .. } => "LongDelayInjected",
            Event::DelayOptimized { .. } => "DelayOptimized",
            Event::RunwayReassigned { .. } => "RunwayReassigned",
            Event::SummaryComputed { .. } => "SummaryComputed",
        }
    }

    /// Get flight ID if event relates to a specific flight
    pub fn flight_id(&self) -> Option<&str> {
        match self {
            Event::FlightScheduled { flight_id, .. } => Some(flight_id),
            Event::BaseDelay { flight_id, .. } => Some(flight_id),
            Event::LongDelayInjected { flight_id, .. } => Some(flight_id),
            Event::DelayOptimized { flight_id, .. } => Some(flight_id),
            Event::RunwayReassigned { flight_id, .. } => Some(flight_id),
            Event::SummaryComputed { .. } => None,
        }
    }
}

/// Event log for storing and querying simulation events.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events emitted by a specific stage
    pub fn events_at_stage(&self, stage: PipelineStage) -> Vec<&Event> {
        self.events.iter().filter(|e| e.stage() == stage).collect()
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific flight
    pub fn events_for_flight(&self, flight_id: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.flight_id() == Some(flight_id))
            .collect()
    }
}
