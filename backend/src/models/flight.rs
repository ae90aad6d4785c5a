//! Flight model
//!
//! One row of the simulated flight table. A flight is created by the fleet
//! generator and then annotated by each pipeline stage in turn:
//! - Delay model: pre-optimization delay
//! - Optimization model: post-optimization delay
//! - Runway policy: runway before/after rebalancing
//!
//! Derived fields (`new_time_*`, `delayed_after`, `improved`) are kept in
//! sync by the mutators, never set directly.
//!
//! CRITICAL: All times and delays are whole minutes (u32)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Arrival or departure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlightKind {
    Arrival,
    Departure,
}

impl FlightKind {
    /// Kind for a uniform draw index (0 = Arrival, 1 = Departure)
    pub fn from_index(idx: usize) -> Self {
        if idx == 0 {
            FlightKind::Arrival
        } else {
            FlightKind::Departure
        }
    }
}

impl fmt::Display for FlightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightKind::Arrival => f.write_str("Arrival"),
            FlightKind::Departure => f.write_str("Departure"),
        }
    }
}

/// A simulated flight with its before/after optimization state
///
/// # Example
/// ```
/// use runway_simulator_core_rs::{Flight, FlightKind};
///
/// let mut flight = Flight::new("F1000".to_string(), FlightKind::Arrival, 42);
/// flight.set_delay_before(true, 18);
/// flight.set_delay_after(7);
///
/// assert_eq!(flight.new_time_before(), 60);
/// assert_eq!(flight.new_time_after(), 49);
/// assert!(flight.improved());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flight {
    /// Unique flight identifier ("F1000", "F1001", ...)
    id: String,

    kind: FlightKind,

    /// Scheduled time in minutes from the start of the window
    scheduled_time: u32,

    /// Outcome of the baseline delay trial (not touched by long-delay injection)
    delayed_before: bool,

    delay_before_min: u32,

    new_time_before: u32,

    delay_after_min: u32,

    new_time_after: u32,

    delayed_after: bool,

    /// delay_before_min > delay_after_min
    improved: bool,

    runway_before: String,

    runway_after: String,
}

impl Flight {
    /// Create an on-time flight with no runway assigned yet
    pub fn new(id: String, kind: FlightKind, scheduled_time: u32) -> Self {
        Self {
            id,
            kind,
            scheduled_time,
            delayed_before: false,
            delay_before_min: 0,
            new_time_before: scheduled_time,
            delay_after_min: 0,
            new_time_after: scheduled_time,
            delayed_after: false,
            improved: false,
            runway_before: String::new(),
            runway_after: String::new(),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> FlightKind {
        self.kind
    }

    pub fn scheduled_time(&self) -> u32 {
        self.scheduled_time
    }

    pub fn delayed_before(&self) -> bool {
        self.delayed_before
    }

    pub fn delay_before_min(&self) -> u32 {
        self.delay_before_min
    }

    pub fn new_time_before(&self) -> u32 {
        self.new_time_before
    }

    pub fn delay_after_min(&self) -> u32 {
        self.delay_after_min
    }

    pub fn new_time_after(&self) -> u32 {
        self.new_time_after
    }

    pub fn delayed_after(&self) -> bool {
        self.delayed_after
    }

    pub fn improved(&self) -> bool {
        self.improved
    }

    pub fn runway_before(&self) -> &str {
        &self.runway_before
    }

    pub fn runway_after(&self) -> &str {
        &self.runway_after
    }

    // ========================================================================
    // Mutators
    // ========================================================================

    /// Record the baseline delay trial and its delay.
    pub fn set_delay_before(&mut self, delayed: bool, delay_min: u32) {
        self.delayed_before = delayed;
        self.override_delay_before(delay_min);
    }

    /// Replace the pre-optimization delay, keeping the `delayed_before` flag.
    ///
    /// Used by long-delay injection, which models disruptions independent of
    /// the baseline trial.
    pub fn override_delay_before(&mut self, delay_min: u32) {
        self.delay_before_min = delay_min;
        self.new_time_before = self.scheduled_time + delay_min;
        self.refresh_improved();
    }

    /// Record the post-optimization delay
    pub fn set_delay_after(&mut self, delay_min: u32) {
        self.delay_after_min = delay_min;
        self.new_time_after = self.scheduled_time + delay_min;
        self.delayed_after = delay_min > 0;
        self.refresh_improved();
    }

    pub fn assign_runway_before(&mut self, runway: String) {
        self.runway_before = runway;
    }

    pub fn assign_runway_after(&mut self, runway: String) {
        self.runway_after = runway;
    }

    fn refresh_improved(&mut self) {
        self.improved = self.delay_before_min > self.delay_after_min;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_flight_is_on_time() {
        let flight = Flight::new("F1000".to_string(), FlightKind::Departure, 30);
        assert_eq!(flight.new_time_before(), 30);
        assert_eq!(flight.new_time_after(), 30);
        assert!(!flight.delayed_before());
        assert!(!flight.delayed_after());
        assert!(!flight.improved());
    }

    #[test]
    fn test_override_keeps_delayed_flag() {
        let mut flight = Flight::new("F1000".to_string(), FlightKind::Arrival, 10);
        flight.set_delay_before(false, 0);
        flight.override_delay_before(300);

        assert!(!flight.delayed_before());
        assert_eq!(flight.delay_before_min(), 300);
        assert_eq!(flight.new_time_before(), 310);
    }

    #[test]
    fn test_full_recovery_marks_improved() {
        let mut flight = Flight::new("F1000".to_string(), FlightKind::Arrival, 0);
        flight.set_delay_before(true, 12);
        flight.set_delay_after(0);

        assert!(flight.improved());
        assert!(!flight.delayed_after());
    }
}
