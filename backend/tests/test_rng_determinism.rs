//! Tests for deterministic RNG
//!
//! CRITICAL: Determinism is sacred. Same seed MUST produce same sequence.

use runway_simulator_core_rs::{RandomSource, RngManager};

#[test]
fn test_rng_new_with_seed() {
    let rng = RngManager::new(12345);
    assert_eq!(rng.get_state(), 12345);
}

#[test]
fn test_rng_next_deterministic() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(12345);

    // Same seed should produce same sequence
    for _ in 0..100 {
        assert_eq!(rng1.next(), rng2.next(), "RNG not deterministic!");
    }
}

#[test]
fn test_rng_different_seeds_different_sequences() {
    let mut rng1 = RngManager::new(12345);
    let mut rng2 = RngManager::new(54321);

    assert_ne!(
        rng1.next(),
        rng2.next(),
        "Different seeds should produce different values"
    );
}

#[test]
fn test_rng_range() {
    let mut rng = RngManager::new(12345);

    for _ in 0..100 {
        let val = rng.range(250, 360);
        assert!((250..360).contains(&val), "Value {} out of range [250, 360)", val);
    }
}

#[test]
fn test_rng_range_single_value() {
    let mut rng = RngManager::new(12345);

    // Range [5, 6) should always return 5
    assert_eq!(rng.range(5, 6), 5);
}

#[test]
fn test_rng_replay_from_state() {
    let mut rng1 = RngManager::new(12345);

    for _ in 0..10 {
        rng1.next();
    }

    let checkpoint_state = rng1.get_state();
    let val1_a = rng1.next();
    let val1_b = rng1.next();

    // Create new RNG from checkpoint
    let mut rng2 = RngManager::new(checkpoint_state);
    assert_eq!(rng2.next(), val1_a);
    assert_eq!(rng2.next(), val1_b);
}

#[test]
fn test_bernoulli_extremes() {
    let mut rng = RngManager::new(777);

    for _ in 0..200 {
        assert!(!rng.bernoulli(0.0));
        assert!(rng.bernoulli(1.0));
    }
}

#[test]
fn test_bernoulli_rate_roughly_matches_probability() {
    let mut rng = RngManager::new(2024);
    let hits = (0..10_000).filter(|_| rng.bernoulli(0.3)).count();

    assert!((2_700..3_300).contains(&hits), "got {} hits for p=0.3", hits);
}

#[test]
fn test_sample_without_replacement_is_distinct_and_in_range() {
    let mut rng = RngManager::new(31);

    for _ in 0..50 {
        let mut picked = rng.sample_without_replacement(40, 4);
        assert_eq!(picked.len(), 4);
        assert!(picked.iter().all(|idx| *idx < 40));

        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 4, "sample contained duplicates");
    }
}

#[test]
fn test_sample_without_replacement_deterministic() {
    let mut rng1 = RngManager::new(404);
    let mut rng2 = RngManager::new(404);

    assert_eq!(
        rng1.sample_without_replacement(100, 10),
        rng2.sample_without_replacement(100, 10)
    );
}

#[test]
fn test_weighted_index_follows_weights() {
    let mut rng = RngManager::new(55);
    let mut counts = [0usize; 2];

    for _ in 0..10_000 {
        counts[rng.weighted_index(&[0.4, 0.6])] += 1;
    }

    assert!((3_700..4_300).contains(&counts[0]), "RW1 drawn {} times", counts[0]);
    assert_eq!(counts[0] + counts[1], 10_000);
}

#[test]
fn test_choose_index_covers_all_slots() {
    let mut rng = RngManager::new(8);
    let mut seen = [false; 20];

    for _ in 0..2_000 {
        seen[rng.choose_index(20)] = true;
    }

    assert!(seen.iter().all(|s| *s));
}
