//! Shape parameters of the main-sequence radius track.
//!
//! log₁₀(R/R_ZAMS) is a polynomial in the age fraction τ whose weights α, β
//! and γ on τ, τ¹⁰ and τ⁴⁰ are fitted here, together with the hook depth
//! ΔR. Each fit clamps a handful of its coefficients before selecting a mass
//! branch; the clamp order matters because later clamps read earlier ones.
//!
//! # References
//! - Hurley, Pols & Tout (2000), equations 15 to 20.

use serde::Serialize;

use crate::fit::{PiecewiseFit, interpolate, polynomial};
use crate::metallicity::Metallicity;
use crate::timescales::hook_mass;

/// α_R, weight of the linear term.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusAlpha {
    a58: f64,
    a59: f64,
    a60: f64,
    a61: f64,
    a62: f64,
    a63: f64,
    a64: f64,
    a65: f64,
    a66: f64,
    a67: f64,
    a68: f64,
}

impl RadiusAlpha {
    pub fn new(metallicity: &Metallicity) -> Self {
        let x = metallicity.index();
        let a58 = polynomial(x, &[4.907546e-1, -1.683928e-1, -3.108742e-1, -7.202918e-2]);
        let a59 = polynomial(x, &[4.537070, -4.465455, -1.612690, -1.623246]);
        let a60 = polynomial(x, &[1.796220, 2.814020e-1, 1.423325, 3.421036e-1]);
        let a61 = polynomial(x, &[2.256216, 3.773400e-1, 1.537867, 4.396373e-1]);
        let a65 = polynomial(x, &[1.564231e-3, 1.653042e-3, -4.439786e-3, -4.951011e-3, -1.216530e-3]);
        let a67 = polynomial(x, &[5.210157, -4.143695, -2.120870]);

        let a62 = polynomial(x, &[8.4300e-2, -4.7500e-2, -3.5200e-2]).max(0.065);
        let mut a63 = polynomial(x, &[7.3600e-2, 7.4900e-2, 4.4260e-2]);
        if metallicity.z() < 0.004 {
            a63 = a63.min(0.055);
        }
        let mut a64 = polynomial(x, &[1.3600e-1, 3.5200e-2]).clamp(0.091, 0.121);
        let mut a66 = polynomial(x, &[1.4770, 2.9600e-1]);
        a66 = a66.max(1.6_f64.min(-0.308 - 1.046 * x));
        a66 = 0.8_f64.max((0.8 - 2.0 * x).min(a66));
        let mut a68 = polynomial(x, &[1.1160, 1.6600e-1]).min(1.0).max(0.9);

        let mut fit = Self { a58, a59, a60, a61, a62, a63, a64, a65, a66, a67, a68 };
        if a68 > a66 {
            a64 = fit.rational(a66);
        }
        a68 = a68.min(a66);
        fit.a64 = a64;
        fit.a68 = a68;
        fit
    }

    fn rational(&self, mass: f64) -> f64 {
        self.a58 * mass.powf(self.a60) / (self.a59 + mass.powf(self.a61))
    }
}

impl PiecewiseFit for RadiusAlpha {
    fn value(&self, mass: f64) -> f64 {
        if mass < 0.5 {
            self.a62
        } else if mass < 0.65 {
            interpolate(mass, 0.5, self.a62, 0.65, self.a63)
        } else if mass < self.a68 {
            interpolate(mass, 0.65, self.a63, self.a68, self.a64)
        } else if mass < self.a66 {
            interpolate(mass, self.a68, self.a64, self.a66, self.rational(self.a66))
        } else if mass <= self.a67 {
            self.rational(mass)
        } else {
            self.rational(self.a67) + self.a65 * (mass - self.a67)
        }
    }

    fn seams(&self) -> Vec<f64> {
        vec![0.5, 0.65, self.a68, self.a66, self.a67]
    }
}

/// β_R, weight of the τ¹⁰ term.
///
/// The fitted quantity is β_R + 1; [`PiecewiseFit::value`] returns β_R.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusBeta {
    a69: f64,
    a70: f64,
    a71: f64,
    a72: f64,
    a73: f64,
    a74: f64,
}

impl RadiusBeta {
    pub fn new(metallicity: &Metallicity) -> Self {
        let x = metallicity.index();
        let mut a72 = polynomial(x, &[9.132108e-1, -1.653695e-1, 0.0, 3.636784e-2]);
        if metallicity.z() > 0.01 {
            a72 = a72.max(0.95);
        }
        Self {
            a69: polynomial(x, &[1.071489, -1.164852e-1, -8.623831e-2, -1.582349e-2]),
            a70: polynomial(x, &[7.108492e-1, 7.935927e-1, 3.926983e-1, 3.622146e-2]),
            a71: polynomial(x, &[3.478514, -2.585474e-2, -1.512955e-2, -2.833691e-3]),
            a72,
            a73: polynomial(x, &[3.969331e-3, 4.539076e-3, 1.720906e-3, 1.897857e-4]),
            a74: polynomial(x, &[1.600, 7.640e-1, 3.322e-1]).clamp(1.4, 1.6),
        }
    }

    /// Mass at which the published fit steps between its two linear pieces.
    ///
    /// The first piece is normalised by `a74 - 1.06` rather than `a74 - 1`, so
    /// it does not reach `a72` at `a74`.
    pub fn step_mass(&self) -> f64 {
        self.a74
    }

    fn rational(&self, mass: f64) -> f64 {
        self.a69 * mass.powf(3.5) / (self.a70 + mass.powf(self.a71))
    }

    fn shifted(&self, mass: f64) -> f64 {
        if mass <= 1.0 {
            1.06
        } else if mass < self.a74 {
            1.06 + (self.a72 - 1.06) * (mass - 1.0) / (self.a74 - 1.06)
        } else if mass < 2.0 {
            interpolate(mass, self.a74, self.a72, 2.0, self.rational(2.0))
        } else if mass <= 16.0 {
            self.rational(mass)
        } else {
            self.rational(16.0) + self.a73 * (mass - 16.0)
        }
    }
}

impl PiecewiseFit for RadiusBeta {
    fn value(&self, mass: f64) -> f64 {
        self.shifted(mass) - 1.0
    }

    fn seams(&self) -> Vec<f64> {
        vec![1.0, self.a74, 2.0, 16.0]
    }
}

/// γ_R, weight of the τ⁴⁰ term. Vanishes above `a75 + 0.1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusGamma {
    a75: f64,
    a76: f64,
    a77: f64,
    a78: f64,
    a79: f64,
    a80: f64,
    a81: f64,
}

impl RadiusGamma {
    pub fn new(metallicity: &Metallicity) -> Self {
        let x = metallicity.index();
        let a75 = polynomial(x, &[8.109e-1, -6.282e-1])
            .min(1.27)
            .max(1.0)
            .max(0.6355 - 0.4192 * x);
        let a76 = polynomial(x, &[1.192334e-2, 1.083057e-2, 1.230969, 1.551656])
            .max(polynomial(x, &[-0.1015564, -0.2161264, -0.05182516]));
        let a77 = polynomial(x, &[-1.668868e-1, 5.818123e-1, -1.105027e1, -1.668070e1])
            .min(0.0)
            .max(polynomial(x, &[-0.3868776, -0.5457078, -0.1463472]));
        let a78 = polynomial(x, &[7.615495e-1, 1.068243e-1, -2.011333e-1, -9.371415e-2])
            .min(7.454 + 9.046 * x)
            .max(0.0);
        let a79 = polynomial(x, &[9.409838, 1.522928]).min(2.0_f64.max(-13.3 - 18.6 * x));
        let a80 = polynomial(x, &[-2.7110e-1, -5.7560e-1, -8.3800e-2]).max(0.0585542);
        let a81 = polynomial(x, &[2.4930, 1.1475]).clamp(0.4, 1.5);
        Self { a75, a76, a77, a78, a79, a80, a81 }
    }

    fn low_mass(&self, mass: f64) -> f64 {
        self.a76 + self.a77 * (mass - self.a78).powf(self.a79)
    }

    /// Value at the top of the fading branch, just above `a75`.
    fn fade_start(&self) -> f64 {
        if self.a75 == 1.0 { self.low_mass(1.0) } else { self.a80 }
    }
}

impl PiecewiseFit for RadiusGamma {
    fn value(&self, mass: f64) -> f64 {
        if mass <= 1.0 {
            self.low_mass(mass)
        } else if mass <= self.a75 {
            let at_one = self.low_mass(1.0);
            at_one + (self.a80 - at_one) * ((mass - 1.0) / (self.a75 - 1.0)).powf(self.a81)
        } else if mass < self.a75 + 0.1 {
            let start = self.fade_start();
            start - 10.0 * (mass - self.a75) * start
        } else {
            0.0
        }
    }

    fn seams(&self) -> Vec<f64> {
        vec![1.0, self.a75, self.a75 + 0.1]
    }
}

/// ΔR, depth of the radius hook. Zero at and below the hook mass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RadiusDelta {
    hook_mass: f64,
    a38: f64,
    a39: f64,
    a40: f64,
    a41: f64,
    a42: f64,
    a43: f64,
    a44: f64,
}

impl RadiusDelta {
    pub fn new(metallicity: &Metallicity) -> Self {
        let x = metallicity.index();
        Self {
            hook_mass: hook_mass(metallicity),
            a38: polynomial(x, &[7.330122e-1, 5.192827e-1, 2.316416e-1, 8.346941e-3]),
            a39: polynomial(x, &[1.172768, -1.209262e-1, -1.193023e-1, -2.859837e-2]),
            a40: polynomial(x, &[3.982622e-1, -2.296279e-1, -2.262539e-1, -5.219837e-2]),
            a41: polynomial(x, &[3.571038, -2.223625e-2, -2.611794e-2, -6.359648e-3]),
            a42: polynomial(x, &[1.9848, 1.1386, 3.5640e-1]).clamp(1.10, 1.25),
            a43: polynomial(x, &[6.300e-2, 4.810e-2, 9.840e-3]),
            a44: polynomial(x, &[1.200, 2.450]).clamp(0.45, 1.30),
        }
    }

    fn rational(&self, mass: f64) -> f64 {
        (self.a38 + self.a39 * mass.powf(3.5)) / (self.a40 * mass.powi(3) + mass.powf(self.a41)) - 1.0
    }
}

impl PiecewiseFit for RadiusDelta {
    fn value(&self, mass: f64) -> f64 {
        if mass <= self.hook_mass {
            0.0
        } else if mass <= self.a42 {
            self.a43 * ((mass - self.hook_mass) / (self.a42 - self.hook_mass)).sqrt()
        } else if mass < 2.0 {
            let at_two = self.rational(2.0);
            self.a43 + (at_two - self.a43) * ((mass - self.a42) / (2.0 - self.a42)).powf(self.a44)
        } else {
            self.rational(mass)
        }
    }

    fn seams(&self) -> Vec<f64> {
        vec![self.hook_mass, self.a42, 2.0]
    }
}
