use serde::{Deserialize, Serialize};

/// Joules per erg
pub const ERG_TO_J: f64 = 1.0e-7;

/// An energy quantity, base unit erg.
///
/// Supernova explosion energies are conventionally quoted in erg
/// (the canonical value is 10⁵¹ erg, one "foe").
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Energy(f64); // Base unit: erg

impl Energy {
    pub fn from_ergs(value: f64) -> Self {
        Self(value)
    }

    pub fn from_joules(value: f64) -> Self {
        Self(value / ERG_TO_J)
    }

    pub fn to_ergs(&self) -> f64 {
        self.0
    }

    pub fn to_joules(&self) -> f64 {
        self.0 * ERG_TO_J
    }
}
