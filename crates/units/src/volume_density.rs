use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Proton mass in kilograms
pub const PROTON_MASS_KG: f64 = 1.67262192e-27;

/// A physical volume density (mass per volume) quantity using f64 precision.
///
/// The `VolumeDensity` struct represents mass density with grams per cubic centimeter
/// as the base unit, following the CGS convention used in astrophysics.
///
/// Typical densities met in wind/remnant interaction:
/// - Solar wind at 1 AU: ~5 × 10⁻²⁴ g/cm³
/// - Warm interstellar medium (n ≈ 0.1 cm⁻³): ~1.7 × 10⁻²⁵ g/cm³
/// - Sedov-Taylor shell (4× the ambient medium): ~7 × 10⁻²⁵ g/cm³
///
/// # Examples
///
/// ```rust
/// use units::volume_density::VolumeDensity;
///
/// // Hydrogen number density of 0.1 per cm³
/// let ism = VolumeDensity::from_hydrogen_number_density(0.1);
/// assert!((ism.to_kg_per_m3() - 1.67262192e-22).abs() < 1e-30);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VolumeDensity(f64); // Base unit: g/cm³

impl VolumeDensity {
    /// Creates a new `VolumeDensity` from a value in grams per cubic centimeter.
    pub fn from_grams_per_cm3(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `VolumeDensity` from a value in kilograms per cubic meter.
    ///
    /// 1 kg/m³ = 0.001 g/cm³
    pub fn from_kg_per_m3(value: f64) -> Self {
        Self(value * 0.001)
    }

    /// Mass density of a pure-hydrogen gas with `n` particles per cm³.
    pub fn from_hydrogen_number_density(n_per_cm3: f64) -> Self {
        Self::from_kg_per_m3(n_per_cm3 * PROTON_MASS_KG * 1.0e6)
    }

    /// Number of hydrogen atoms per cm³ needed for this mass density.
    pub fn to_hydrogen_number_density(&self) -> f64 {
        self.to_kg_per_m3() / (PROTON_MASS_KG * 1.0e6)
    }

    /// Returns the volume density value in grams per cubic centimeter.
    pub fn to_grams_per_cm3(&self) -> f64 {
        self.0
    }

    /// Converts the volume density to kilograms per cubic meter.
    pub fn to_kg_per_m3(&self) -> f64 {
        self.0 * 1000.0
    }
}

impl Add for VolumeDensity {
    type Output = VolumeDensity;

    fn add(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 + rhs.0)
    }
}

impl Sub for VolumeDensity {
    type Output = VolumeDensity;

    fn sub(self, rhs: VolumeDensity) -> VolumeDensity {
        VolumeDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for VolumeDensity {
    type Output = VolumeDensity;

    fn mul(self, rhs: f64) -> VolumeDensity {
        VolumeDensity(self.0 * rhs)
    }
}

/// Division of VolumeDensity by VolumeDensity returns a dimensionless ratio
impl Div for VolumeDensity {
    type Output = f64;

    fn div(self, rhs: VolumeDensity) -> f64 {
        self.0 / rhs.0
    }
}
