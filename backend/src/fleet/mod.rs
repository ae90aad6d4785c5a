//! Fleet generation module for deterministic flight creation.
//!
//! Creates the base flight table for a run. All generation is deterministic
//! based on the RNG stream it is handed.
//!
//! # Draw Order
//!
//! 1. One kind draw per flight (Arrival or Departure, uniform)
//! 2. One scheduled-time draw per flight in [0, 120)
//! 3. The time column is sorted ascending and assigned in flight order
//!
//! Sorting is a post-process over the drawn column: the kind a flight drew
//! stays with its index, not with its time.
//!
//! # Example
//!
//! ```
//! use runway_simulator_core_rs::fleet::FlightGenerator;
//! use runway_simulator_core_rs::rng::RngManager;
//!
//! let mut rng = RngManager::new(1);
//! let flights = FlightGenerator::new(20).generate(&mut rng);
//!
//! assert_eq!(flights.len(), 20);
//! assert_eq!(flights[0].id(), "F1000");
//! ```

use tracing::debug;

use crate::models::{Flight, FlightKind};
use crate::rng::RandomSource;

/// First flight number; IDs are `F{FIRST_FLIGHT_NUMBER + index}`
pub const FIRST_FLIGHT_NUMBER: usize = 1000;

/// Scheduled times are drawn from [0, SCHEDULE_WINDOW_MIN)
pub const SCHEDULE_WINDOW_MIN: i64 = 120;

/// Generator for the base fleet of a run
#[derive(Debug, Clone)]
pub struct FlightGenerator {
    flight_count: usize,
}

impl FlightGenerator {
    /// Create a generator for `flight_count` flights.
    ///
    /// The orchestrator validates `flight_count >= 1` before building one.
    pub fn new(flight_count: usize) -> Self {
        Self { flight_count }
    }

    /// Generate the fleet, consuming `2 * flight_count` draws.
    pub fn generate(&self, rng: &mut dyn RandomSource) -> Vec<Flight> {
        let kinds: Vec<FlightKind> = (0..self.flight_count)
            .map(|_| FlightKind::from_index(rng.choose_index(2)))
            .collect();

        let mut times: Vec<u32> = (0..self.flight_count)
            .map(|_| rng.range(0, SCHEDULE_WINDOW_MIN) as u32)
            .collect();
        times.sort_unstable();

        let flights: Vec<Flight> = kinds
            .into_iter()
            .zip(times)
            .enumerate()
            .map(|(idx, (kind, time))| Flight::new(flight_id(idx), kind, time))
            .collect();

        debug!(flights = flights.len(), "fleet generated");
        flights
    }
}

/// Flight ID for a fleet index
pub fn flight_id(index: usize) -> String {
    format!("F{}", FIRST_FLIGHT_NUMBER + index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::RngManager;

    #[test]
    fn test_flight_ids_are_sequential() {
        assert_eq!(flight_id(0), "F1000");
        assert_eq!(flight_id(49), "F1049");
    }

    #[test]
    fn test_generate_consumes_two_draws_per_flight() {
        let mut used = RngManager::new(9);
        FlightGenerator::new(15).generate(&mut used);

        let mut reference = RngManager::new(9);
        for _ in 0..30 {
            reference.next();
        }

        assert_eq!(used.get_state(), reference.get_state());
    }
}
