//! Property tests over random scenarios

use proptest::prelude::*;

use runway_simulator_core_rs::delay::long_delay_count;
use runway_simulator_core_rs::summary::{classify, COST_PER_PLANE, SAVINGS_THRESHOLD_MIN};
use runway_simulator_core_rs::{simulate, PerformanceTier, ScenarioConfig, WeatherCondition};

fn scenario() -> impl Strategy<Value = ScenarioConfig> {
    (any::<u64>(), 0usize..4, 0usize..4, 1usize..=100, 1usize..=25).prop_map(
        |(seed, tier, weather, flights, runways)| ScenarioConfig {
            performance_tier: PerformanceTier::ALL[tier],
            weather_condition: WeatherCondition::ALL[weather],
            flight_count: flights,
            runway_count: runways,
            rng_seed: seed,
            runway_strategy: None,
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_delays_never_worsen(config in scenario()) {
        let report = simulate(config.clone()).unwrap();

        prop_assert_eq!(report.flights.len(), config.flight_count);
        for flight in &report.flights {
            prop_assert!(flight.delay_after_min() <= flight.delay_before_min());
            prop_assert!(flight.new_time_before() >= flight.scheduled_time());
            prop_assert!(flight.new_time_after() >= flight.scheduled_time());
            prop_assert!(flight.scheduled_time() < 120);
        }
    }

    #[test]
    fn prop_schedule_sorted(config in scenario()) {
        let report = simulate(config).unwrap();

        for pair in report.flights.windows(2) {
            prop_assert!(pair[0].scheduled_time() <= pair[1].scheduled_time());
        }
    }

    #[test]
    fn prop_long_delay_floor(config in scenario()) {
        let report = simulate(config.clone()).unwrap();

        let long = report
            .flights
            .iter()
            .filter(|f| (250..360).contains(&f.delay_before_min()))
            .count();
        prop_assert!(long >= long_delay_count(config.flight_count));
    }

    #[test]
    fn prop_runways_within_configured_set(config in scenario()) {
        let report = simulate(config.clone()).unwrap();
        let labels: Vec<&str> = report
            .runway_occupancy
            .iter()
            .map(|o| o.runway.as_str())
            .collect();

        prop_assert_eq!(labels.len(), config.runway_count);
        for flight in &report.flights {
            prop_assert!(labels.contains(&flight.runway_before()));
            prop_assert!(labels.contains(&flight.runway_after()));
        }
    }

    #[test]
    fn prop_summary_consistent_with_table(config in scenario()) {
        let report = simulate(config).unwrap();
        let summary = &report.summary;

        let savings = report
            .flights
            .iter()
            .filter(|f| {
                f.delay_before_min() > SAVINGS_THRESHOLD_MIN
                    && f.delay_after_min() <= SAVINGS_THRESHOLD_MIN
            })
            .count();
        prop_assert_eq!(summary.savings_count, savings);
        prop_assert_eq!(summary.estimated_savings, savings as u64 * COST_PER_PLANE);
        prop_assert!(summary.avg_delay_after <= summary.avg_delay_before);
        prop_assert_eq!(
            summary.feedback,
            classify(summary.avg_delay_before, summary.improvement_pct)
        );
    }

    #[test]
    fn prop_reproducible(config in scenario()) {
        let a = simulate(config.clone()).unwrap();
        let b = simulate(config).unwrap();

        prop_assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }
}
