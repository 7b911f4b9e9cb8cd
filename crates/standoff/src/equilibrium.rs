//! Pressure balance between a stellar wind and a supernova remnant.
//!
//! f(r) = P_wind(r) − P_remnant is positive close to the star, where the wind
//! is dense, and negative far out. Its root is the stand-off radius: the
//! closest approach of the remnant shell to the star.

use serde::{Deserialize, Serialize};
use stellar::{StellarError, StellarWind};
use supernova::{SupernovaRemnant, SupernovaType};
use units::{Length, Pressure};

use crate::brent::{RootFindError, brent};
use crate::config::{Bracket, SolverSettings};
use crate::error::{EquilibriumError, Result};

/// Converged stand-off search.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EquilibriumResult {
    /// Stand-off radius
    pub radius: Length,
    /// Pressure of the remnant, balanced by the wind at `radius`
    pub pressure: Pressure,
    /// P_wind − P_remnant at `radius` (Pa)
    pub residual: f64,
    pub iterations: usize,
    pub function_calls: usize,
}

/// Searches `settings`' bracket for the radius where the wind holds off the remnant.
///
/// Fails with [`EquilibriumError::RootBracket`] when the bracket does not
/// straddle the balance point. The bracket is never widened.
pub fn find_equilibrium_radius(
    wind: &StellarWind,
    remnant: &SupernovaRemnant,
    settings: &SolverSettings,
) -> Result<EquilibriumResult> {
    let bracket = settings.bracket()?;
    let remnant_pressure = remnant.pressure().to_pascals();

    let mut wind_failure: Option<StellarError> = None;
    let balance = |r: f64| match wind.pressure_at(Length::from_au(r)) {
        Ok(pressure) => pressure.to_pascals() - remnant_pressure,
        Err(e) => {
            wind_failure.get_or_insert(e);
            f64::NAN
        }
    };

    let outcome = brent(balance, bracket.lower_au(), bracket.upper_au(), &settings.tolerance());
    if let Some(e) = wind_failure {
        return Err(e.into());
    }

    match outcome {
        Ok(root) => {
            log::debug!(
                "stand-off radius {} AU after {} iterations (residual {:e} Pa)",
                root.root,
                root.iterations,
                root.residual
            );
            Ok(EquilibriumResult {
                radius: Length::from_au(root.root),
                pressure: Pressure::from_pascals(remnant_pressure),
                residual: root.residual,
                iterations: root.iterations,
                function_calls: root.function_calls,
            })
        }
        Err(RootFindError::NoSignChange { lower, upper, .. }) => {
            let wind_lower = wind.pressure_at(Length::from_au(lower))?.to_pascals();
            let wind_upper = wind.pressure_at(Length::from_au(upper))?.to_pascals();
            log::warn!(
                "no pressure balance in [{}, {}] AU: wind {:e} to {:e} Pa against remnant {:e} Pa",
                lower,
                upper,
                wind_lower,
                wind_upper,
                remnant_pressure
            );
            Err(EquilibriumError::RootBracket {
                lower,
                upper,
                wind_lower,
                wind_upper,
                remnant: remnant_pressure,
            })
        }
        Err(RootFindError::MaxIterations { iterations, residual, .. }) => {
            Err(EquilibriumError::Convergence {
                iterations,
                lower: bracket.lower_au(),
                upper: bracket.upper_au(),
                residual,
            })
        }
    }
}

/// Stand-off radius around a star of known radius.
///
/// # Arguments
/// * `age_gyr` - Stellar age in Gyr
/// * `mass` - Stellar mass in solar masses
/// * `radius` - Stellar radius in solar radii
/// * `energy_erg` - Explosion energy in erg
/// * `distance_pc` - Distance from the explosion in parsecs
/// * `ambient_density` - Ambient hydrogen number density in cm⁻³
/// * `kind` - Explosion type
/// * `bracket` - Search interval in AU, searched as given
///
/// # Returns
/// The distance from the star in AU where wind and remnant pressures
/// balance. Fails with `RootBracket` when they do not cross inside
/// `bracket`, and with `Convergence` when the default iteration budget runs
/// out.
#[allow(clippy::too_many_arguments)]
pub fn equilibrium_radius(
    age_gyr: f64,
    mass: f64,
    radius: f64,
    energy_erg: f64,
    distance_pc: f64,
    ambient_density: f64,
    kind: SupernovaType,
    bracket: Bracket,
) -> Result<f64> {
    let wind = StellarWind::new(age_gyr, mass, radius)?;
    let remnant = SupernovaRemnant::new(energy_erg, distance_pc, ambient_density, kind)?;
    let settings = SolverSettings::default().with_bracket(bracket);
    Ok(find_equilibrium_radius(&wind, &remnant, &settings)?.radius.to_au())
}

/// Stand-off radius around a main-sequence star of given mass and
/// metallicity.
///
/// # Arguments
/// * `metallicity` - Metal mass fraction Z; the stellar radius is read off
///   the main-sequence track at `age_gyr`
/// * the rest as for [`equilibrium_radius`]
///
/// # Returns
/// The balance distance in AU, or the first error from the main-sequence
/// fits, the wind, the remnant or the search.
#[allow(clippy::too_many_arguments)]
pub fn equilibrium_radius_from_mass(
    age_gyr: f64,
    mass: f64,
    metallicity: f64,
    energy_erg: f64,
    distance_pc: f64,
    ambient_density: f64,
    kind: SupernovaType,
    bracket: Bracket,
) -> Result<f64> {
    let radius = stellar::radius(age_gyr * 1000.0, mass, metallicity)?;
    equilibrium_radius(age_gyr, mass, radius, energy_erg, distance_pc, ambient_density, kind, bracket)
}
