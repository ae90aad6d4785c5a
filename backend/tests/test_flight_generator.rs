//! Tests for fleet generation

use runway_simulator_core_rs::fleet::{FlightGenerator, SCHEDULE_WINDOW_MIN};
use runway_simulator_core_rs::{FlightKind, RngManager};

#[test]
fn test_generates_requested_count_with_sequential_ids() {
    let mut rng = RngManager::new(1);
    let flights = FlightGenerator::new(25).generate(&mut rng);

    assert_eq!(flights.len(), 25);
    for (idx, flight) in flights.iter().enumerate() {
        assert_eq!(flight.id(), format!("F{}", 1000 + idx));
    }
}

#[test]
fn test_scheduled_times_sorted_and_in_window() {
    let mut rng = RngManager::new(99);
    let flights = FlightGenerator::new(100).generate(&mut rng);

    for pair in flights.windows(2) {
        assert!(pair[0].scheduled_time() <= pair[1].scheduled_time());
    }
    assert!(flights
        .iter()
        .all(|f| (f.scheduled_time() as i64) < SCHEDULE_WINDOW_MIN));
}

#[test]
fn test_new_flights_are_undelayed() {
    let mut rng = RngManager::new(5);
    let flights = FlightGenerator::new(10).generate(&mut rng);

    for flight in &flights {
        assert_eq!(flight.delay_before_min(), 0);
        assert_eq!(flight.delay_after_min(), 0);
        assert_eq!(flight.new_time_before(), flight.scheduled_time());
        assert!(flight.runway_before().is_empty());
    }
}

#[test]
fn test_both_kinds_appear_in_a_large_fleet() {
    let mut rng = RngManager::new(17);
    let flights = FlightGenerator::new(100).generate(&mut rng);

    let arrivals = flights
        .iter()
        .filter(|f| f.kind() == FlightKind::Arrival)
        .count();
    assert!(arrivals > 0 && arrivals < 100);
}

#[test]
fn test_generation_is_deterministic() {
    let mut rng1 = RngManager::new(4242);
    let mut rng2 = RngManager::new(4242);

    let a = FlightGenerator::new(50).generate(&mut rng1);
    let b = FlightGenerator::new(50).generate(&mut rng2);

    assert_eq!(a, b);
}

#[test]
fn test_single_flight_fleet() {
    let mut rng = RngManager::new(3);
    let flights = FlightGenerator::new(1).generate(&mut rng);

    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].id(), "F1000");
}
