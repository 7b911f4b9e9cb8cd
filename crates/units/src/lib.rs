//! Typed physical quantities for stellar wind and supernova remnant calculations.
//!
//! Every quantity is a thin `f64` newtype with a base unit chosen for the
//! scale it is usually met at (AU for distances around a star, solar masses,
//! years, km/s for flow speeds, pascals for pressures).

pub mod energy;
pub mod length;
pub mod mass;
pub mod mass_rate;
pub mod pressure;
pub mod temperature;
pub mod time;
pub mod velocity;
pub mod volume_density;

#[cfg(test)]
mod energy_test;
#[cfg(test)]
mod pressure_test;
#[cfg(test)]
mod time_test;

pub use energy::Energy;
pub use length::Length;
pub use mass::{Mass, SOLAR_MASS_KG};
pub use mass_rate::MassRate;
pub use pressure::Pressure;
pub use temperature::Temperature;
pub use time::Time;
pub use velocity::Velocity;
pub use volume_density::VolumeDensity;
