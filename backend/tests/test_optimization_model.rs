//! Tests for the post-optimization delay model

use runway_simulator_core_rs::optimization::OptimizationModel;
use runway_simulator_core_rs::{
    Flight, FlightKind, PerformanceTier, RandomSource, RngManager, WeatherCondition,
};

/// Flights with the given pre-optimization delays
fn delayed_fleet(delays: &[u32]) -> Vec<Flight> {
    delays
        .iter()
        .enumerate()
        .map(|(idx, delay)| {
            let mut flight = Flight::new(format!("F{}", 1000 + idx), FlightKind::Arrival, idx as u32);
            flight.set_delay_before(*delay > 0, *delay);
            flight
        })
        .collect()
}

/// Always returns the same raw value
struct Constant(u64);

impl RandomSource for Constant {
    fn next_u64(&mut self) -> u64 {
        self.0
    }
}

#[test]
fn test_tier_factors() {
    let factors: Vec<f64> = PerformanceTier::ALL
        .iter()
        .map(|tier| OptimizationModel::new(*tier, WeatherCondition::Clear).factor())
        .collect();

    assert_eq!(factors, vec![0.65, 0.5, 0.4, 0.2]);
}

#[test]
fn test_excellent_clear_keeps_eighty_percent() {
    let model = OptimizationModel::new(PerformanceTier::Excellent, WeatherCondition::Clear);

    assert_eq!(model.reduced_delay(250), 200);
    assert_eq!(model.reduced_delay(300), 240);
    assert_eq!(model.reduced_delay(355), 284);
}

#[test]
fn test_bad_thunderstorm_formula() {
    let model = OptimizationModel::new(PerformanceTier::Bad, WeatherCondition::Thunderstorm);

    // reduction = d * 0.65 * 0.6
    assert!((model.reduction(200) - 78.0).abs() < 1e-9);
    assert_eq!(model.reduced_delay(200), 122);
    assert_eq!(model.reduced_delay(100), 61);
}

#[test]
fn test_undelayed_flights_consume_no_draws() {
    let mut flights = delayed_fleet(&[0, 0, 0, 0]);
    let mut rng = RngManager::new(10);
    let state = rng.get_state();

    let model = OptimizationModel::new(PerformanceTier::Good, WeatherCondition::Fog);
    let outcome = model.optimize(&mut flights, &mut rng);

    assert_eq!(rng.get_state(), state);
    assert_eq!(outcome.optimized_count, 0);
    assert!(flights.iter().all(|f| f.delay_after_min() == 0 && !f.improved()));
}

#[test]
fn test_full_recovery_zeroes_delay() {
    // next_f64 of 0 is 0.0 < 0.1, so every delayed flight recovers
    let mut flights = delayed_fleet(&[12, 0, 300]);
    let model = OptimizationModel::new(PerformanceTier::Bad, WeatherCondition::Clear);
    let outcome = model.optimize(&mut flights, &mut Constant(0));

    assert_eq!(outcome.full_recoveries, vec![0, 2]);
    assert!(flights.iter().all(|f| f.delay_after_min() == 0));
    assert!(flights[0].improved() && flights[2].improved());
    assert!(!flights[1].improved());
}

#[test]
fn test_no_recovery_applies_reduction() {
    // next_f64 of u64::MAX is just below 1.0, so no flight recovers
    let mut flights = delayed_fleet(&[20, 300]);
    let model = OptimizationModel::new(PerformanceTier::Medium, WeatherCondition::Clear);
    let outcome = model.optimize(&mut flights, &mut Constant(u64::MAX));

    assert!(outcome.full_recoveries.is_empty());
    assert_eq!(flights[0].delay_after_min(), 10);
    assert_eq!(flights[1].delay_after_min(), 150);
    assert_eq!(flights[1].new_time_after(), 1 + 150);
    assert!(flights[1].delayed_after());
}

#[test]
fn test_optimizer_never_worsens_delays() {
    let delays: Vec<u32> = (0..400).collect();

    for tier in PerformanceTier::ALL {
        for weather in WeatherCondition::ALL {
            let mut flights = delayed_fleet(&delays);
            let mut rng = RngManager::new(1234);
            OptimizationModel::new(tier, weather).optimize(&mut flights, &mut rng);

            for flight in &flights {
                assert!(flight.delay_after_min() <= flight.delay_before_min());
                assert!(flight.new_time_after() >= flight.scheduled_time());
            }
        }
    }
}
