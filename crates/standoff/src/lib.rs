//! Stand-off distance between a star and a passing supernova remnant.
//!
//! The stellar wind's ram pressure falls with distance from the star while
//! the remnant pressure is uniform on stellar scales. The stand-off radius is
//! where the two balance, found with a bracketed Brent search.

pub mod brent;
pub mod config;
pub mod equilibrium;
pub mod error;

#[cfg(test)]
mod brent_test;

pub use brent::{Root, RootFindError, Tolerance, brent};
pub use config::{Bracket, SolverSettings};
pub use equilibrium::{
    EquilibriumResult, equilibrium_radius, equilibrium_radius_from_mass, find_equilibrium_radius,
};
pub use error::{EquilibriumError, Result};
