use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

/// Pressure in pascals (N/m²)
///
/// Wind ram pressure and remnant ram + thermal pressure are both evaluated in
/// SI, so the pascal is the base unit. CGS callers can use the dyn/cm²
/// conversions (1 Pa = 10 dyn/cm²).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pressure(f64);

impl Pressure {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_pascals(value: f64) -> Self {
        Self(value)
    }

    pub fn from_dyn_per_cm2(value: f64) -> Self {
        Self(value / 10.0)
    }

    pub fn to_pascals(&self) -> f64 {
        self.0
    }

    pub fn to_dyn_per_cm2(&self) -> f64 {
        self.0 * 10.0
    }
}

impl Add for Pressure {
    type Output = Pressure;

    fn add(self, rhs: Pressure) -> Pressure {
        Pressure(self.0 + rhs.0)
    }
}

impl Sub for Pressure {
    type Output = Pressure;

    fn sub(self, rhs: Pressure) -> Pressure {
        Pressure(self.0 - rhs.0)
    }
}
