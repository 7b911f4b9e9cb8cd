//! Shape parameters of the main-sequence luminosity track.
//!
//! log₁₀(L/L_ZAMS) = α_L·τ + β_L·τ^η + (log₁₀(L_TMS/L_ZAMS) − α_L − β_L)·τ²
//! − ΔL·(τ₁² − τ₂²).
//!
//! # References
//! - Hurley, Pols & Tout (2000), equations 12 to 19.

use serde::Serialize;

use crate::fit::{PiecewiseFit, interpolate, polynomial};
use crate::metallicity::Metallicity;
use crate::timescales::hook_mass;

/// Metallicity at or below which η ramps up to 20 for M > 1.
const LOW_METALLICITY_ETA: f64 = 0.0009;

/// Mass where β_L starts fading out and ΔL switches to its power-law form.
fn luminosity_break_mass(x: f64) -> f64 {
    let a = 1.4_f64.min(1.5135 + 0.3769 * x);
    (0.6355 - 0.4192 * x).max(1.25_f64.max(a))
}

/// α_L, weight of the linear term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminosityAlpha {
    a45: f64,
    a46: f64,
    a47: f64,
    a48: f64,
    a49: f64,
    a50: f64,
    a51: f64,
    a52: f64,
    a53: f64,
}

impl LuminosityAlpha {
    pub fn new(metallicity: &Metallicity) -> Self {
        let x = metallicity.index();
        let metal_rich = metallicity.z() > 0.01;

        let mut a52 = polynomial(x, &[1.1064, 4.1500e-1, 1.8000e-1]).max(0.9);
        if metal_rich {
            a52 = a52.min(1.0);
        }
        let mut a53 = polynomial(x, &[1.1900, 3.7700e-1, 1.7600e-1]).max(1.0);
        if metal_rich {
            a53 = a53.min(1.1);
        }

        Self {
            a45: polynomial(x, &[2.321400e-1, 1.828075e-3, -2.232007e-2, -3.378734e-3]),
            a46: polynomial(x, &[1.163659e-2, 3.427682e-3, 1.421393e-3, -3.710666e-3]),
            a47: polynomial(x, &[1.048020e-2, -1.231921e-2, -1.686860e-2, -4.234354e-3]),
            a48: polynomial(x, &[1.555590, -3.223927e-1, -5.197429e-1, -1.066441e-1]),
            a49: polynomial(x, &[9.7700e-2, -2.3100e-1, -7.5300e-2]).max(0.145),
            a50: polynomial(x, &[2.4000e-1, 1.8000e-1, 5.9500e-1]).min(0.306 + 0.053 * x),
            a51: polynomial(x, &[3.3000e-1, 1.3200e-1, 2.1800e-1]).min(0.3625 + 0.062 * x),
            a52,
            a53,
        }
    }

    fn rational(&self, mass: f64) -> f64 {
        (self.a45 + self.a46 * mass.powf(self.a48)) / (mass.powf(0.4) + self.a47 * mass.powf(1.9))
    }
}

impl PiecewiseFit for LuminosityAlpha {
    fn value(&self, mass: f64) -> f64 {
        if mass < 0.5 {
            self.a49
        } else if mass < 0.7 {
            self.a49 + 5.0 * (0.3 - self.a49) * (mass - 0.5)
        } else if mass < self.a52 {
            interpolate(mass, 0.7, 0.3, self.a52, self.a50)
        } else if mass < self.a53 {
            interpolate(mass, self.a52, self.a50, self.a53, self.a51)
        } else if mass < 2.0 {
            interpolate(mass, self.a53, self.a51, 2.0, self.rational(2.0))
        } else {
            self.rational(mass)
        }
    }

    fn seams(&self) -> Vec<f64> {
        vec![0.5, 0.7, self.a52, self.a53, 2.0]
    }
}

/// β_L, weight of the τ^η term. Never negative; fades to zero above `a57`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminosityBeta {
    a54: f64,
    a55: f64,
    a56: f64,
    a57: f64,
}

impl LuminosityBeta {
    pub fn new(metallicity: &Metallicity) -> Self {
        let x = metallicity.index();
        Self {
            a54: polynomial(x, &[3.855707e-1, -6.104166e-1, 5.676742, 1.060894e1, 5.284014]),
            a55: polynomial(x, &[3.579064e-1, -6.442936e-1, 5.494644, 1.054952e1, 5.280991]),
            a56: polynomial(x, &[9.587587e-1, 8.777464e-1, 2.017321e-1]),
            a57: luminosity_break_mass(x),
        }
    }

    fn power_law(&self, mass: f64) -> f64 {
        (self.a54 - self.a55 * mass.powf(self.a56)).max(0.0)
    }
}

impl PiecewiseFit for LuminosityBeta {
    fn value(&self, mass: f64) -> f64 {
        let beta = self.power_law(mass);
        if mass > self.a57 && beta > 0.0 {
            let at_break = self.power_law(self.a57);
            (at_break - 10.0 * (mass - self.a57) * at_break).max(0.0)
        } else {
            beta
        }
    }

    fn seams(&self) -> Vec<f64> {
        vec![self.a57]
    }
}

/// ΔL, depth of the luminosity hook. Zero at and below the hook mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LuminosityDelta {
    hook_mass: f64,
    a33: f64,
    a34: f64,
    a35: f64,
    a36: f64,
    a37: f64,
}

impl LuminosityDelta {
    pub fn new(metallicity: &Metallicity) -> Self {
        let x = metallicity.index();
        Self {
            hook_mass: hook_mass(metallicity),
            a33: luminosity_break_mass(x),
            a34: polynomial(x, &[1.910302e-1, 1.158624e-1, 3.348990e-2, 2.599706e-3]),
            a35: polynomial(x, &[3.931056e-1, 7.277637e-2, -1.366593e-1, -4.508946e-2]),
            a36: polynomial(x, &[3.267776e-1, 1.204424e-1, 9.988332e-2, 2.455361e-2]),
            a37: polynomial(x, &[5.990212e-1, 5.570264e-2, 6.207626e-2, 1.777283e-2]),
        }
    }

    fn power_law(&self, mass: f64) -> f64 {
        (self.a34 / mass.powf(self.a35)).min(self.a36 / mass.powf(self.a37))
    }
}

impl PiecewiseFit for LuminosityDelta {
    fn value(&self, mass: f64) -> f64 {
        if mass <= self.hook_mass {
            0.0
        } else if mass < self.a33 {
            self.power_law(self.a33) * ((mass - self.hook_mass) / (self.a33 - self.hook_mass)).powf(0.4)
        } else {
            self.power_law(mass)
        }
    }

    fn seams(&self) -> Vec<f64> {
        vec![self.hook_mass, self.a33]
    }
}

/// η, the exponent of the β_L term.
///
/// 10 everywhere except at Z ≤ 0.0009, where it ramps linearly from 10 at
/// M = 1 to 20 at M = 1.1 and stays at 20 above. The switch in Z is a step.
pub fn luminosity_eta(mass: f64, metallicity: &Metallicity) -> f64 {
    if metallicity.z() > LOW_METALLICITY_ETA || mass <= 1.0 {
        10.0
    } else if mass < 1.1 {
        100.0 * mass - 90.0
    } else {
        20.0
    }
}
