use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A flow or shock speed using f64 precision.
///
/// Base unit is km/s, the unit both stellar-wind fits and Sedov-Taylor shock
/// speeds are quoted in.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// let solar_wind = Velocity::from_km_per_sec(400.0);
/// assert_eq!(solar_wind.to_meters_per_sec(), 400_000.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: km/s

impl Velocity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_meters_per_sec(value: f64) -> Self {
        Self(value / 1_000.0)
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_meters_per_sec(&self) -> f64 {
        self.0 * 1_000.0
    }

    /// Returns the smaller of two speeds.
    pub fn min(self, other: Self) -> Self {
        if self.0 < other.0 { self } else { other }
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}
