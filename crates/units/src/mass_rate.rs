use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

use crate::mass::{Mass, SOLAR_MASS_KG};
use crate::time::{SECONDS_PER_YEAR, Time};

/// A physical mass rate (mass per time) quantity using f64 precision.
///
/// The `MassRate` struct represents mass flow rates with solar masses per year as the base unit.
/// Stellar wind mass-loss rates are typically 10⁻¹⁴ M☉/yr for Sun-like stars.
///
/// # Examples
///
/// ```rust
/// use units::mass_rate::MassRate;
/// use units::time::Time;
///
/// let solar_wind = MassRate::from_solar_masses_per_year(1.4e-14);
/// let lost = solar_wind.integrate(Time::from_gyr(1.0));
/// assert!((lost.to_solar_masses() - 1.4e-5).abs() < 1e-15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: Solar Masses per year

impl MassRate {
    /// Creates a new `MassRate` from a value in solar masses per year.
    pub fn from_solar_masses_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassRate` from a value in kilograms per year.
    pub fn from_kg_per_year(value: f64) -> Self {
        Self(value / SOLAR_MASS_KG)
    }

    /// Creates a new `MassRate` from a value in kilograms per second.
    pub fn from_kg_per_sec(value: f64) -> Self {
        Self::from_kg_per_year(value * SECONDS_PER_YEAR)
    }

    /// Returns the mass rate in solar masses per year.
    pub fn to_solar_masses_per_year(&self) -> f64 {
        self.0
    }

    /// Converts the mass rate to kilograms per year.
    pub fn to_kg_per_year(&self) -> f64 {
        self.0 * SOLAR_MASS_KG
    }

    /// Converts the mass rate to kilograms per second.
    pub fn to_kg_per_sec(&self) -> f64 {
        self.to_kg_per_year() / SECONDS_PER_YEAR
    }

    /// Total mass moved at this constant rate over `duration`.
    pub fn integrate(&self, duration: Time) -> Mass {
        Mass::from_solar_masses(self.0 * duration.to_years())
    }
}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}
