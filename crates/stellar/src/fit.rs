//! Building blocks shared by the piecewise mass fits.
//!
//! Every fitted quantity expands its coefficients as polynomials in the
//! metallicity index ζ, clamps some of them, and then selects one closed-form
//! branch by mass. Neighbouring branches are joined either because the
//! closed forms agree at the seam or through a straight line between the
//! two boundary values.

/// Evaluates `c[0] + c[1]·x + c[2]·x² + …`.
pub(crate) fn polynomial(x: f64, coefficients: &[f64]) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
}

/// Straight line through `(x0, y0)` and `(x1, y1)`, evaluated at `x`.
pub(crate) fn interpolate(x: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    y0 + (y1 - y0) * (x - x0) / (x1 - x0)
}

/// A quantity defined piecewise in stellar mass at a fixed metallicity.
pub trait PiecewiseFit {
    /// Value of the fit at `mass` (M☉).
    fn value(&self, mass: f64) -> f64;

    /// Masses (M☉) at which the fit switches branch, in ascending order.
    fn seams(&self) -> Vec<f64>;
}
