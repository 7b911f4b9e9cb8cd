//! Supernova remnants in the adiabatic (Sedov-Taylor) expansion phase.
//!
//! Given the explosion energy, the distance from the explosion and the
//! ambient interstellar density, the model yields the swept-up shell's
//! thickness, density and shock speed, and the pressure the shell exerts on
//! anything it overruns.

pub mod error;
pub mod remnant;


pub use error::{RemnantError, Result};
pub use remnant::{
    DEFAULT_AMBIENT_DENSITY, RemnantParameters, RemnantState, SupernovaRemnant, SupernovaType, remnant_pressure,
    shell_density, shell_thickness, shock_speed,
};
