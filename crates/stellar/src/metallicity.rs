//! Metallicity and the dimensionless index every fit is expanded in.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StellarError, require_positive};

/// Reference metallicity of the fits (Z☉ = 0.02)
pub const SOLAR_METALLICITY: f64 = 0.02;

/// ζ = log₁₀(Z / 0.02)
pub fn metallicity_index(z: f64) -> f64 {
    (z / SOLAR_METALLICITY).log10()
}

/// Heavy-element mass fraction Z, validated and paired with its fit index ζ.
///
/// Serializes as the bare Z value; deserializing re-validates it.
///
/// # Examples
/// ```
/// use stellar::Metallicity;
///
/// let solar = Metallicity::new(0.02).unwrap();
/// assert_eq!(solar.index(), 0.0);
/// assert!(Metallicity::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Metallicity {
    z: f64,
    index: f64,
}

impl Metallicity {
    pub fn new(z: f64) -> Result<Self> {
        let z = require_positive("metallicity", z)?;
        Ok(Self {
            z,
            index: metallicity_index(z),
        })
    }

    /// Z = 0.02
    pub fn solar() -> Self {
        Self {
            z: SOLAR_METALLICITY,
            index: 0.0,
        }
    }

    /// Mass fraction Z
    pub fn z(&self) -> f64 {
        self.z
    }

    /// ζ = log₁₀(Z / 0.02)
    pub fn index(&self) -> f64 {
        self.index
    }

    /// log₁₀ Z, used by the terminal-radius break mass
    pub fn log_z(&self) -> f64 {
        self.z.log10()
    }
}

impl TryFrom<f64> for Metallicity {
    type Error = StellarError;

    fn try_from(z: f64) -> Result<Self> {
        Self::new(z)
    }
}

impl From<Metallicity> for f64 {
    fn from(metallicity: Metallicity) -> f64 {
        metallicity.z
    }
}
