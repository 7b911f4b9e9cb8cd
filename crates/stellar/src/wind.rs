//! Stellar wind driven by a thermally heated corona.
//!
//! The coronal base temperature follows from the surface escape speed and a
//! fixed sonic-to-escape speed ratio. The wind speed at 1 AU and its radial
//! gradient are cubic fits in that temperature. The mass-loss rate scales
//! with the stellar spin, which decays with age.
//!
//! # References
//! - Johnstone, C. P. et al. (2015). Stellar winds on the main-sequence II.
//!   A&A, 577, A28.

use serde::{Deserialize, Serialize};
use units::length::SOLAR_RADIUS_M;
use units::volume_density::PROTON_MASS_KG;
use units::{
    Length, Mass, MassRate, Pressure, SOLAR_MASS_KG, Temperature, Time, Velocity, VolumeDensity,
};

use crate::error::{Result, StellarError, require_positive};

/// Gravitational constant (m³/(kg·s²))
const G: f64 = 6.6743e-11;

/// Boltzmann constant (J/K)
const K_B: f64 = 1.380649e-23;

/// Mean mass per particle in units of the proton mass
const MU: f64 = 0.6;

/// Adiabatic index of the coronal gas
const ADIABATIC_INDEX: f64 = 5.0 / 3.0;

/// Solar radius in AU, for converting the speed gradient
const SOLAR_RADIUS_AU: f64 = 0.00465247;

/// Present-day solar mass-loss rate (kg/yr)
const SOLAR_MASS_LOSS_KG_PER_YEAR: f64 = 2.783773818e16;

/// Which coronal sonic-to-escape speed ratio sets the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WindRegime {
    /// c_s / v_esc = 0.329
    Slow,
    /// c_s / v_esc = 0.478
    Fast,
    /// Average of the slow and fast temperatures
    #[default]
    Mean,
}

impl WindRegime {
    fn sonic_ratio(self) -> Option<f64> {
        match self {
            WindRegime::Slow => Some(0.329),
            WindRegime::Fast => Some(0.478),
            WindRegime::Mean => None,
        }
    }
}

/// Coronal base temperature (MK) of a star of `mass` M☉ and `radius` R☉.
pub fn base_temperature(mass: f64, radius: f64, regime: WindRegime) -> f64 {
    let surface = mass * SOLAR_MASS_KG / (radius * SOLAR_RADIUS_M);
    let scale = 2.0 * G * MU * PROTON_MASS_KG / (ADIABATIC_INDEX * K_B) * surface * 1e-6;
    match regime.sonic_ratio() {
        Some(ratio) => scale * ratio.powi(2),
        None => {
            let slow = base_temperature(mass, radius, WindRegime::Slow);
            let fast = base_temperature(mass, radius, WindRegime::Fast);
            (slow + fast) / 2.0
        }
    }
}

/// Snapshot of the wind at one distance from the star.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindState {
    pub distance: Length,
    pub base_temperature: Temperature,
    pub speed: Velocity,
    pub mass_loss_rate: MassRate,
    pub density: VolumeDensity,
    /// Ram pressure ρv²
    pub pressure: Pressure,
}

/// Wind inputs in plain numbers, the form a wind is stored and loaded in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindParameters {
    /// Age (Gyr)
    pub age: f64,
    /// Mass (M☉)
    pub mass: f64,
    /// Radius (R☉)
    pub radius: f64,
    #[serde(default)]
    pub regime: WindRegime,
}

/// Wind of a main-sequence star of given age, mass and radius.
///
/// # Examples
/// ```
/// use stellar::StellarWind;
/// use units::Length;
///
/// let sun = StellarWind::new(4.5, 1.0, 1.0).unwrap();
/// let pressure = sun.pressure_at(Length::from_au(1.0)).unwrap();
/// assert!(pressure.to_pascals() > 1e-9 && pressure.to_pascals() < 1e-8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WindParameters", into = "WindParameters")]
pub struct StellarWind {
    age: Time,
    mass: Mass,
    radius: Length,
    regime: WindRegime,
}

impl StellarWind {
    /// Age in Gyr, mass in M☉, radius in R☉.
    pub fn new(age_gyr: f64, mass: f64, radius: f64) -> Result<Self> {
        Ok(Self {
            age: Time::from_gyr(require_positive("age", age_gyr)?),
            mass: Mass::from_solar_masses(require_positive("mass", mass)?),
            radius: Length::from_solar_radii(require_positive("radius", radius)?),
            regime: WindRegime::default(),
        })
    }

    pub fn with_regime(mut self, regime: WindRegime) -> Self {
        self.regime = regime;
        self
    }

    pub fn regime(&self) -> WindRegime {
        self.regime
    }

    pub fn age(&self) -> Time {
        self.age
    }

    pub fn mass(&self) -> Mass {
        self.mass
    }

    pub fn radius(&self) -> Length {
        self.radius
    }

    fn temperature_mk(&self) -> f64 {
        base_temperature(self.mass.to_solar_masses(), self.radius.to_solar_radii(), self.regime)
    }

    pub fn base_temperature(&self) -> Temperature {
        Temperature::from_megakelvin(self.temperature_mk())
    }

    pub fn speed_at_1au(&self) -> Velocity {
        let t = self.temperature_mk();
        Velocity::from_km_per_sec(73.39 + 224.14 * t - 11.28 * t.powi(2) + 0.28 * t.powi(3))
    }

    /// dv/dr in km/s per solar radius.
    pub fn speed_gradient(&self) -> f64 {
        let t = self.temperature_mk();
        0.19 + 0.066 * t - 0.0035 * t.powi(2) + 9.97e-5 * t.powi(3)
    }

    /// Linear extrapolation from the 1 AU speed.
    pub fn speed_at(&self, distance: Length) -> Velocity {
        let per_au = self.speed_gradient() / SOLAR_RADIUS_AU;
        self.speed_at_1au() + Velocity::from_km_per_sec((distance.to_au() - 1.0) * per_au)
    }

    /// Rotation rate in units of the present solar rate.
    pub fn angular_spin(&self) -> f64 {
        1.667 * self.mass.to_solar_masses().powf(0.652) * (self.age.to_gyr() / 2.0).powf(-0.566)
    }

    /// Mass-loss rate in units of the present solar rate.
    pub fn relative_mass_loss_rate(&self) -> f64 {
        self.radius.to_solar_radii().powi(2) * self.angular_spin().powf(1.33) * self.mass.to_solar_masses().powf(-3.36)
    }

    pub fn mass_loss_rate(&self) -> MassRate {
        MassRate::from_kg_per_year(self.relative_mass_loss_rate() * SOLAR_MASS_LOSS_KG_PER_YEAR)
    }

    /// Density of a spherically symmetric outflow at `distance`.
    pub fn density_at(&self, distance: Length) -> Result<VolumeDensity> {
        require_positive("distance", distance.to_au())?;
        let r = distance.to_meters();
        let v = self.speed_at(distance).to_meters_per_sec();
        let mdot = self.mass_loss_rate().to_kg_per_sec();
        Ok(VolumeDensity::from_kg_per_m3(
            mdot / (4.0 * std::f64::consts::PI * v * r.powi(2)),
        ))
    }

    /// Ram pressure ρv² at `distance`. Winds carry no thermal term.
    pub fn pressure_at(&self, distance: Length) -> Result<Pressure> {
        let rho = self.density_at(distance)?.to_kg_per_m3();
        let v = self.speed_at(distance).to_meters_per_sec();
        Ok(Pressure::from_pascals(rho * v.powi(2)))
    }

    pub fn state_at(&self, distance: Length) -> Result<WindState> {
        Ok(WindState {
            distance,
            base_temperature: self.base_temperature(),
            speed: self.speed_at(distance),
            mass_loss_rate: self.mass_loss_rate(),
            density: self.density_at(distance)?,
            pressure: self.pressure_at(distance)?,
        })
    }
}

impl TryFrom<WindParameters> for StellarWind {
    type Error = StellarError;

    fn try_from(parameters: WindParameters) -> Result<Self> {
        Ok(Self::new(parameters.age, parameters.mass, parameters.radius)?.with_regime(parameters.regime))
    }
}

impl From<StellarWind> for WindParameters {
    fn from(wind: StellarWind) -> Self {
        Self {
            age: wind.age.to_gyr(),
            mass: wind.mass.to_solar_masses(),
            radius: wind.radius.to_solar_radii(),
            regime: wind.regime,
        }
    }
}

/// Ram pressure of a stellar wind at a given distance from the star.
///
/// # Arguments
/// * `age_gyr` - Stellar age in Gyr
/// * `distance_au` - Distance from the star in AU
/// * `mass` - Stellar mass in solar masses
/// * `radius` - Stellar radius in solar radii
///
/// # Returns
/// The wind pressure ρv² in pascals, or a domain error when any input is
/// not finite and positive.
pub fn wind_pressure(age_gyr: f64, distance_au: f64, mass: f64, radius: f64) -> Result<f64> {
    let wind = StellarWind::new(age_gyr, mass, radius)?;
    Ok(wind.pressure_at(Length::from_au(distance_au))?.to_pascals())
}
