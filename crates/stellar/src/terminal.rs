//! Terminal-age main-sequence (TMS) radius and luminosity.
//!
//! # References
//! - Hurley, Pols & Tout (2000), equations 8 and 9.

use serde::Serialize;

use crate::fit::{PiecewiseFit, interpolate, polynomial};
use crate::metallicity::Metallicity;
use crate::zero_age::zero_age_radius;

/// Width (M☉) of the linear bridge between the low- and high-mass TMS radius branches.
const BRIDGE_WIDTH: f64 = 0.1;

const C1: f64 = -8.672073e-2;

/// TMS radius fit at one metallicity.
///
/// Below `a17` a low-mass rational form applies (never less than 1.5 R_ZAMS
/// for M < 0.5); from `a17 + 0.1` upward a high-mass form applies; in
/// between the two boundary values are joined by a straight line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TerminalRadiusFit {
    metallicity: Metallicity,
    a17: f64,
    a18: f64,
    a19: f64,
    a20: f64,
    a21: f64,
    a22: f64,
    a23: f64,
    a24: f64,
    a25: f64,
    a26: f64,
}

impl TerminalRadiusFit {
    pub fn new(metallicity: Metallicity) -> Self {
        let x = metallicity.index();
        let sigma = metallicity.log_z();

        let a17 = 10f64.powf(
            (0.097 - 0.1072 * (sigma + 3.0))
                .max(0.097_f64.max(0.1461_f64.min(0.1461 + 0.1237 * (sigma + 2.0)))),
        );
        let a20 = polynomial(x, &[2.652091e1, 8.178458e1, 1.156058e2, 7.633811e1, 1.950698e1]);
        let a18 = a20 * polynomial(x, &[2.187715e-1, -2.154437, -3.768678, -1.975518, -3.021475e-1]);
        let a19 = a20 * polynomial(x, &[1.466440, 1.839725, 6.442199, 4.023635, 6.957529e-1]);

        Self {
            metallicity,
            a17,
            a18,
            a19,
            a20,
            a21: polynomial(x, &[1.472103, -2.947609, -3.312828, -9.945065e-1]),
            a22: polynomial(x, &[3.071048, -5.679941, -9.745523, -3.594543]),
            a23: polynomial(x, &[2.617890, 1.019135, -3.292551e-2, -7.445123e-2]),
            a24: polynomial(x, &[1.075567e-2, 1.773287e-2, 9.610479e-3, 1.732469e-3]),
            a25: polynomial(x, &[1.476246, 1.899331, 1.195010, 3.035051e-1]),
            a26: polynomial(x, &[5.502535, -6.601663e-2, 9.968707e-2, 3.599801e-2]),
        }
    }

    /// Upper edge of the low-mass branch.
    pub fn low_mass_limit(&self) -> f64 {
        self.a17
    }

    /// Lower edge of the high-mass branch, `a17 + 0.1`.
    pub fn high_mass_limit(&self) -> f64 {
        self.a17 + BRIDGE_WIDTH
    }

    /// Low-mass rational form, without the 1.5 R_ZAMS floor.
    pub fn low_mass_branch(&self, mass: f64) -> f64 {
        (self.a18 + self.a19 * mass.powf(self.a21)) / (self.a20 + mass.powf(self.a22))
    }

    pub fn high_mass_branch(&self, mass: f64) -> f64 {
        (C1 * mass.powi(3) + self.a23 * mass.powf(self.a26) + self.a24 * mass.powf(self.a26 + 1.5))
            / (self.a25 + mass.powi(5))
    }
}

impl PiecewiseFit for TerminalRadiusFit {
    fn value(&self, mass: f64) -> f64 {
        let low = self.low_mass_limit();
        let high = self.high_mass_limit();
        if mass <= low {
            let radius = self.low_mass_branch(mass);
            if mass < 0.5 {
                radius.max(1.5 * zero_age_radius(mass, &self.metallicity))
            } else {
                radius
            }
        } else if mass < high {
            interpolate(
                mass,
                low,
                self.low_mass_branch(low),
                high,
                self.high_mass_branch(high),
            )
        } else {
            self.high_mass_branch(mass)
        }
    }

    fn seams(&self) -> Vec<f64> {
        vec![0.5, self.low_mass_limit(), self.high_mass_limit()]
    }
}

/// TMS radius (R☉).
pub fn terminal_radius(mass: f64, metallicity: &Metallicity) -> f64 {
    TerminalRadiusFit::new(*metallicity).value(mass)
}

/// TMS luminosity (L☉). A single rational form over the whole mass range.
pub fn terminal_luminosity(mass: f64, metallicity: &Metallicity) -> f64 {
    let x = metallicity.index();
    let a14 = polynomial(x, &[3.858911e3, 2.459681e3, -7.630093e1, -3.486057e2, -4.861703e1]);
    let a11 = a14 * polynomial(x, &[1.031538, -2.434480e-1, 7.732821, 6.460705, 1.374484]);
    let a12 = a14 * polynomial(x, &[1.043715, -1.577474, -5.168234, -5.596506, -1.299394]);
    let a13 = polynomial(x, &[7.859573e2, -8.542048, -2.642511e1, -9.585707]);
    let a15 = polynomial(x, &[2.888720e2, 2.952979e2, 1.850341e2, 3.797254e1]);
    let a16 = polynomial(x, &[7.196580, 5.613746e-1, 3.805871e-1, 8.398728e-2]);

    let m = mass;
    (a11 * m.powi(3) + a12 * m.powi(4) + a13 * m.powf(a16 + 1.8)) / (a14 + a15 * m.powi(5) + m.powf(a16))
}
