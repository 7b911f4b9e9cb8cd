use serde::{Deserialize, Serialize};

/// A physical temperature quantity using f64 precision.
///
/// Base unit is Kelvin. Coronal wind base temperatures are of order 10⁶ K and
/// are usually quoted in megakelvin (MK).
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let corona = Temperature::from_megakelvin(1.5);
/// assert_eq!(corona.to_kelvin(), 1.5e6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Creates a new `Temperature` from a value in Kelvin.
    pub fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Temperature` from a value in megakelvin.
    pub fn from_megakelvin(value: f64) -> Self {
        Self(value * 1.0e6)
    }

    /// Returns the temperature in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Returns the temperature in megakelvin.
    pub fn to_megakelvin(&self) -> f64 {
        self.0 / 1.0e6
    }
}
