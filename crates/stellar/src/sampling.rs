//! Random stellar parameters for population studies and sampled checks.

use rand::Rng;
use rand_chacha::ChaChaRng;

use crate::error::Result;
use crate::main_sequence::{MainSequenceTrack, StellarParameters};

/// Lowest metallicity the fits were calibrated on.
pub const MIN_METALLICITY: f64 = 1e-4;

/// Highest metallicity the fits were calibrated on.
pub const MAX_METALLICITY: f64 = 0.03;

/// Sample uniformly in log space between `min` and `max` (both > 0).
pub fn sample_log_uniform(rng: &mut ChaChaRng, min: f64, max: f64) -> f64 {
    let u: f64 = rng.random();
    (min.ln() + u * (max.ln() - min.ln())).exp().clamp(min, max)
}

/// Metallicity Z, log-uniform over the calibrated range.
pub fn sample_metallicity(rng: &mut ChaChaRng) -> f64 {
    sample_log_uniform(rng, MIN_METALLICITY, MAX_METALLICITY)
}

/// A main-sequence star with log-uniform mass in `[min_mass, max_mass]` M☉,
/// log-uniform metallicity, and an age drawn uniformly over its main-sequence
/// lifetime.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
/// use stellar::sampling::sample_main_sequence_star;
///
/// let mut rng = ChaChaRng::seed_from_u64(7);
/// let star = sample_main_sequence_star(&mut rng, 0.8, 100.0).unwrap();
/// assert!(star.mass.to_solar_masses() >= 0.8);
/// ```
pub fn sample_main_sequence_star(
    rng: &mut ChaChaRng,
    min_mass: f64,
    max_mass: f64,
) -> Result<StellarParameters> {
    let mass = sample_log_uniform(rng, min_mass, max_mass);
    let metallicity = sample_metallicity(rng);
    let lifetime = MainSequenceTrack::new(mass, metallicity)?.lifetime();
    let fraction: f64 = rng.random();
    StellarParameters::new(mass, metallicity, fraction * lifetime)
}
