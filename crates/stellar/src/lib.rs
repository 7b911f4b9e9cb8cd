//! Main-sequence stellar structure and stellar wind models.
//!
//! Radius and luminosity follow the analytic main-sequence fits of
//! Tout et al. (1996) and Hurley, Pols & Tout (2000): zero-age and
//! terminal-age values joined by a time-dependent exponent built from
//! mass- and metallicity-dependent shape parameters. The wind model turns
//! a mass and radius into a coronal base temperature, an outflow speed
//! profile, a spin-down driven mass-loss rate and a ram pressure.

pub mod error;
pub mod fit;
pub mod luminosity_shape;
pub mod main_sequence;
pub mod metallicity;
pub mod radius_shape;
pub mod sampling;
pub mod terminal;
pub mod timescales;
pub mod wind;
pub mod zero_age;

#[cfg(test)]
mod main_sequence_test;
#[cfg(test)]
mod metallicity_test;
#[cfg(test)]
mod sampling_test;
#[cfg(test)]
mod terminal_test;
#[cfg(test)]
mod wind_test;

pub use error::{Result, StellarError};
pub use fit::PiecewiseFit;
pub use main_sequence::{
    MainSequenceTrack, StellarParameters, StellarState, evaluate, luminosity, radius,
};
pub use metallicity::{Metallicity, SOLAR_METALLICITY, metallicity_index};
pub use wind::{StellarWind, WindParameters, WindRegime, WindState, wind_pressure};
