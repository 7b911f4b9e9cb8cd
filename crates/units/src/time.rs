use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

pub const SECONDS_PER_YEAR: f64 = 31_557_600.0; // 365.25 days per year

const MYR_TO_YEARS: f64 = 1.0e6;
const GYR_TO_YEARS: f64 = 1.0e9;

/// A physical time quantity using f64 precision.
///
/// The `Time` struct represents time with years as the base unit. Main-sequence
/// fits are calibrated in Myr while wind spin-down laws use Gyr, so both
/// conversions are first-class.
///
/// # Examples
///
/// ```rust
/// use units::Time;
///
/// let solar_age = Time::from_myr(4567.0);
/// assert!((solar_age.to_gyr() - 4.567).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(f64); // Base unit: Years

impl Time {
    /// Creates a zero time value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Time` from a value in years.
    pub fn from_years(value: f64) -> Self {
        Self(value)
    }

    /// Creates a time from a value in million years (Myr)
    pub fn from_myr(value: f64) -> Self {
        Self(value * MYR_TO_YEARS)
    }

    /// Creates a time from a value in billion years (Gyr)
    pub fn from_gyr(value: f64) -> Self {
        Self(value * GYR_TO_YEARS)
    }

    /// Creates a new `Time` from a value in seconds.
    pub fn from_seconds(value: f64) -> Self {
        Self(value / SECONDS_PER_YEAR)
    }

    /// Returns the time in years.
    pub fn to_years(&self) -> f64 {
        self.0
    }

    /// Returns the time in million years
    pub fn to_myr(&self) -> f64 {
        self.0 / MYR_TO_YEARS
    }

    /// Returns the time in billion years
    pub fn to_gyr(&self) -> f64 {
        self.0 / GYR_TO_YEARS
    }

    /// Converts the time to seconds.
    pub fn to_seconds(&self) -> f64 {
        self.0 * SECONDS_PER_YEAR
    }
}

impl Add for Time {
    type Output = Time;

    fn add(self, rhs: Time) -> Time {
        Time(self.0 + rhs.0)
    }
}

impl Sub for Time {
    type Output = Time;

    fn sub(self, rhs: Time) -> Time {
        Time(self.0 - rhs.0)
    }
}

impl Mul<f64> for Time {
    type Output = Time;

    fn mul(self, rhs: f64) -> Time {
        Time(self.0 * rhs)
    }
}

/// Division of Time by Time returns a dimensionless ratio
impl Div for Time {
    type Output = f64;

    fn div(self, rhs: Time) -> f64 {
        self.0 / rhs.0
    }
}
