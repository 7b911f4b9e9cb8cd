use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::sampling::{
    MAX_METALLICITY, MIN_METALLICITY, sample_log_uniform, sample_main_sequence_star,
    sample_metallicity,
};

#[test]
fn log_uniform_respects_bounds() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..1000 {
        let sample = sample_log_uniform(&mut rng, 0.8, 100.0);
        assert!((0.8..=100.0).contains(&sample), "Sample {} out of range", sample);
    }
}

#[test]
fn log_uniform_is_balanced_in_log_space() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    // Geometric midpoint of [1, 100] is 10
    let below = (0..2000)
        .filter(|_| sample_log_uniform(&mut rng, 1.0, 100.0) < 10.0)
        .count();
    let fraction = below as f64 / 2000.0;
    assert!((fraction - 0.5).abs() < 0.05, "Fraction below midpoint {}", fraction);
}

#[test]
fn metallicity_stays_in_calibrated_range() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..1000 {
        let z = sample_metallicity(&mut rng);
        assert!(z >= MIN_METALLICITY * (1.0 - 1e-12) && z <= MAX_METALLICITY * (1.0 + 1e-12));
    }
}

#[test]
fn sampled_stars_are_on_the_main_sequence() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..100 {
        let star = sample_main_sequence_star(&mut rng, 0.8, 100.0).unwrap();
        let track = star.track().unwrap();
        assert!(star.age.to_myr() <= track.lifetime());
    }
}

#[test]
fn same_seed_same_star() {
    let a = sample_main_sequence_star(&mut ChaChaRng::seed_from_u64(3), 1.0, 10.0).unwrap();
    let b = sample_main_sequence_star(&mut ChaChaRng::seed_from_u64(3), 1.0, 10.0).unwrap();
    assert_eq!(a, b);
}
