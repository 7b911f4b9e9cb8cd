//! Sedov-Taylor blast wave of a single supernova.
//!
//! The shock front sits at the observer's distance d from the explosion.
//! Behind it lies a thin shell of swept-up gas compressed by the strong-shock
//! factor (γ+1)/(γ−1). Close to the explosion the swept-up mass is smaller
//! than the ejecta, so the shell mass is floored at a type-dependent ejecta
//! mass and its density re-derived over the same shell volume.
//!
//! # References
//! - Sedov, L. I. (1959). Similarity and Dimensional Methods in Mechanics.
//! - Taylor, G. I. (1950). Proc. R. Soc. Lond. A, 201, 159.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use units::{Energy, Length, Mass, Pressure, Time, Velocity, VolumeDensity};

use crate::error::{RemnantError, Result, require_positive};

/// Adiabatic index of the shocked gas
pub const ADIABATIC_INDEX: f64 = 5.0 / 3.0;

/// Sedov similarity constant ξ for γ = 5/3
pub const SEDOV_BETA: f64 = 1.1517;

/// Ceiling on the shock speed (km/s)
pub const MAX_SHOCK_SPEED_KM_S: f64 = 10_000.0;

/// Ambient hydrogen number density (cm⁻³) of the warm interstellar medium
pub const DEFAULT_AMBIENT_DENSITY: f64 = 0.1;

/// Explosion mechanism, which fixes the minimum mass of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SupernovaType {
    /// Thermonuclear disruption of a white dwarf
    #[default]
    Ia,
    /// Core collapse of a massive star
    II,
}

impl SupernovaType {
    /// Ejecta mass the shell can never fall below.
    pub fn minimum_shell_mass(self) -> Mass {
        match self {
            SupernovaType::Ia => Mass::from_solar_masses(1.4),
            SupernovaType::II => Mass::from_solar_masses(5.0),
        }
    }
}

/// Snapshot of the remnant as it passes the observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemnantState {
    pub shell_thickness: Length,
    pub shell_density: VolumeDensity,
    pub shock_speed: Velocity,
    /// Ram plus thermal pressure
    pub pressure: Pressure,
    pub crossing_time: Time,
}

/// Remnant inputs in plain numbers, the form a remnant is stored and loaded
/// in. Loading goes through [`SupernovaRemnant::new`], so the domain checks
/// apply to deserialized values too.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemnantParameters {
    /// Explosion energy (erg)
    pub energy: f64,
    /// Distance from the explosion (pc)
    pub distance: f64,
    /// Ambient hydrogen number density (cm⁻³)
    #[serde(default = "default_ambient_density")]
    pub ambient_density: f64,
    #[serde(default)]
    pub kind: SupernovaType,
}

fn default_ambient_density() -> f64 {
    DEFAULT_AMBIENT_DENSITY
}

/// Supernova remnant as seen from a fixed distance.
///
/// # Examples
/// ```
/// use supernova::{SupernovaRemnant, SupernovaType};
///
/// let remnant = SupernovaRemnant::new(1e51, 10.0, 0.1, SupernovaType::Ia).unwrap();
/// assert!(remnant.shock_speed().to_km_per_sec() < 10_000.0);
/// assert!(remnant.pressure().to_pascals() > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RemnantParameters", into = "RemnantParameters")]
pub struct SupernovaRemnant {
    energy: Energy,
    distance: Length,
    ambient_density: VolumeDensity,
    kind: SupernovaType,
}

impl SupernovaRemnant {
    /// Energy in erg, distance in parsecs, ambient density in cm⁻³.
    pub fn new(energy_erg: f64, distance_pc: f64, ambient_density: f64, kind: SupernovaType) -> Result<Self> {
        Ok(Self {
            energy: Energy::from_ergs(require_positive("energy", energy_erg)?),
            distance: Length::from_parsecs(require_positive("distance", distance_pc)?),
            ambient_density: ambient_medium(ambient_density)?,
            kind,
        })
    }

    /// Type Ia remnant in the default ambient medium.
    pub fn type_ia(energy_erg: f64, distance_pc: f64) -> Result<Self> {
        Self::new(energy_erg, distance_pc, DEFAULT_AMBIENT_DENSITY, SupernovaType::Ia)
    }

    pub fn energy(&self) -> Energy {
        self.energy
    }

    pub fn distance(&self) -> Length {
        self.distance
    }

    /// Mass density of the ambient medium
    pub fn ambient_density(&self) -> VolumeDensity {
        self.ambient_density
    }

    pub fn kind(&self) -> SupernovaType {
        self.kind
    }

    /// ΔR = (γ−1)d / (3(γ+1))
    pub fn shell_thickness(&self) -> Length {
        thickness(self.distance)
    }

    /// Volume (m³) of the shell centred on the observer's distance.
    pub fn shell_volume(&self) -> f64 {
        shell_volume(self.distance)
    }

    /// Shell mass before the ejecta floor is applied.
    pub fn swept_up_mass(&self) -> Mass {
        Mass::from_kg(compressed(self.ambient_density).to_kg_per_m3() * self.shell_volume())
    }

    pub fn shell_mass(&self) -> Mass {
        Mass::from_kg(self.shell_density().to_kg_per_m3() * self.shell_volume())
    }

    /// Density of the shell, raised where needed so it holds the ejecta mass.
    pub fn shell_density(&self) -> VolumeDensity {
        floored_shell_density(self.distance, self.ambient_density, self.kind)
    }

    /// Sedov-Taylor shock speed, capped at 10,000 km/s.
    pub fn shock_speed(&self) -> Velocity {
        sedov_speed(self.energy, self.distance, self.ambient_density)
    }

    /// ρ_shell v²
    pub fn ram_pressure(&self) -> Pressure {
        let v = self.shock_speed().to_meters_per_sec();
        Pressure::from_pascals(self.shell_density().to_kg_per_m3() * v.powi(2))
    }

    /// (γ+1)/2 ρ_ISM v²
    pub fn thermal_pressure(&self) -> Pressure {
        let v = self.shock_speed().to_meters_per_sec();
        let rho = self.ambient_density.to_kg_per_m3();
        Pressure::from_pascals((ADIABATIC_INDEX + 1.0) / 2.0 * rho * v.powi(2))
    }

    pub fn pressure(&self) -> Pressure {
        self.ram_pressure() + self.thermal_pressure()
    }

    /// Time the shell takes to sweep past a fixed point.
    pub fn crossing_time(&self) -> Time {
        let thickness_m = self.shell_thickness().to_meters();
        Time::from_seconds(thickness_m / self.shock_speed().to_meters_per_sec())
    }

    pub fn state(&self) -> RemnantState {
        RemnantState {
            shell_thickness: self.shell_thickness(),
            shell_density: self.shell_density(),
            shock_speed: self.shock_speed(),
            pressure: self.pressure(),
            crossing_time: self.crossing_time(),
        }
    }
}

impl TryFrom<RemnantParameters> for SupernovaRemnant {
    type Error = RemnantError;

    fn try_from(parameters: RemnantParameters) -> Result<Self> {
        Self::new(
            parameters.energy,
            parameters.distance,
            parameters.ambient_density,
            parameters.kind,
        )
    }
}

impl From<SupernovaRemnant> for RemnantParameters {
    fn from(remnant: SupernovaRemnant) -> Self {
        Self {
            energy: remnant.energy.to_ergs(),
            distance: remnant.distance.to_parsecs(),
            ambient_density: remnant.ambient_density.to_hydrogen_number_density(),
            kind: remnant.kind,
        }
    }
}

fn ambient_medium(number_density: f64) -> Result<VolumeDensity> {
    Ok(VolumeDensity::from_hydrogen_number_density(require_positive(
        "ambient density",
        number_density,
    )?))
}

fn thickness(distance: Length) -> Length {
    distance * ((ADIABATIC_INDEX - 1.0) / (3.0 * (ADIABATIC_INDEX + 1.0)))
}

fn shell_volume(distance: Length) -> f64 {
    let r = distance.to_meters();
    let dr = thickness(distance).to_meters();
    4.0 / 3.0 * PI * ((r + dr / 2.0).powi(3) - (r - dr / 2.0).powi(3))
}

/// Strong-shock compression of the ambient gas.
fn compressed(ambient: VolumeDensity) -> VolumeDensity {
    ambient * ((ADIABATIC_INDEX + 1.0) / (ADIABATIC_INDEX - 1.0))
}

fn floored_shell_density(distance: Length, ambient: VolumeDensity, kind: SupernovaType) -> VolumeDensity {
    let volume = shell_volume(distance);
    let shell = compressed(ambient);
    let floor = kind.minimum_shell_mass();
    if Mass::from_kg(shell.to_kg_per_m3() * volume) < floor {
        VolumeDensity::from_kg_per_m3(floor.to_kg() / volume)
    } else {
        shell
    }
}

fn sedov_speed(energy: Energy, distance: Length, ambient: VolumeDensity) -> Velocity {
    let d = distance.to_meters();
    let speed = 0.8 * SEDOV_BETA.powf(2.5) / (ADIABATIC_INDEX + 1.0)
        * (energy.to_joules() / (ambient.to_kg_per_m3() * d.powi(3))).sqrt();
    Velocity::from_meters_per_sec(speed).min(Velocity::from_km_per_sec(MAX_SHOCK_SPEED_KM_S))
}

/// Shell thickness (pc) at `distance_pc` from the explosion.
pub fn shell_thickness(distance_pc: f64) -> Result<f64> {
    let distance = Length::from_parsecs(require_positive("distance", distance_pc)?);
    Ok(thickness(distance).to_parsecs())
}

/// Shell density (kg/m³) at `distance_pc` in a medium of `ambient_density`
/// hydrogen atoms per cm³.
pub fn shell_density(distance_pc: f64, ambient_density: f64, kind: SupernovaType) -> Result<f64> {
    let distance = Length::from_parsecs(require_positive("distance", distance_pc)?);
    Ok(floored_shell_density(distance, ambient_medium(ambient_density)?, kind).to_kg_per_m3())
}

/// Shock speed (km/s) of a blast of `energy_erg` at `distance_pc`.
pub fn shock_speed(energy_erg: f64, distance_pc: f64, ambient_density: f64) -> Result<f64> {
    let energy = Energy::from_ergs(require_positive("energy", energy_erg)?);
    let distance = Length::from_parsecs(require_positive("distance", distance_pc)?);
    Ok(sedov_speed(energy, distance, ambient_medium(ambient_density)?).to_km_per_sec())
}

/// Total pressure a remnant exerts where its shell passes.
///
/// # Arguments
/// * `energy_erg` - Explosion energy in erg
/// * `distance_pc` - Distance from the explosion in parsecs
/// * `ambient_density` - Ambient hydrogen number density in cm⁻³
/// * `kind` - Explosion type, which sets the minimum shell mass
///
/// # Returns
/// Ram plus thermal pressure in pascals, or a domain error when any input
/// is not finite and positive.
pub fn remnant_pressure(
    energy_erg: f64,
    distance_pc: f64,
    ambient_density: f64,
    kind: SupernovaType,
) -> Result<f64> {
    Ok(SupernovaRemnant::new(energy_erg, distance_pc, ambient_density, kind)?
        .pressure()
        .to_pascals())
}
