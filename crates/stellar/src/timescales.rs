//! Main-sequence timescales and the normalised age fractions built on them.
//!
//! All times are in Myr.
//!
//! # References
//! - Hurley, J. R., Pols, O. R., & Tout, C. A. (2000). Comprehensive analytic
//!   formulae for stellar evolution as a function of mass and metallicity.
//!   MNRAS, 315, 543. Section 5.1.

use crate::fit::polynomial;
use crate::metallicity::Metallicity;

/// Fraction of the hook time over which the hook transition completes.
const HOOK_WINDOW: f64 = 0.01;

/// Mass (M☉) above which main-sequence tracks develop a hook.
pub fn hook_mass(metallicity: &Metallicity) -> f64 {
    polynomial(metallicity.index(), &[1.0185, 0.16015, 0.0892])
}

/// Time to reach the base of the giant branch.
pub fn base_giant_branch_time(mass: f64, metallicity: &Metallicity) -> f64 {
    let x = metallicity.index();
    let a1 = polynomial(x, &[1.593890e3, 2.053038e3, 1.231226e3, 2.327785e2]);
    let a2 = polynomial(x, &[2.706708e3, 1.483131e3, 5.772723e2, 7.411230e1]);
    let a3 = polynomial(x, &[1.466143e2, -1.048442e2, -6.795374e1, -1.391127e1]);
    let a4 = polynomial(x, &[4.141960e-2, 4.564888e-2, 2.958542e-2, 5.571483e-3]);
    let a5 = 3.426349e-1;

    let m = mass;
    (a1 + a2 * m.powi(4) + a3 * m.powf(5.5) + m.powi(7)) / (a4 * m.powi(2) + a5 * m.powi(7))
}

/// μ, the hook time in units of the base-of-giant-branch time.
///
/// Never drops below 0.5: stars whose correction term exceeds 50 reach the
/// hook halfway to the giant branch.
pub fn hook_time_factor(mass: f64, metallicity: &Metallicity) -> f64 {
    let x = metallicity.index();
    let a6 = polynomial(x, &[1.949814e1, 1.758178, -6.008212, -4.470533]);
    let a7 = 4.903830;
    let a8 = polynomial(x, &[5.212154e-2, 3.166411e-2, -2.750074e-3, -2.271549e-3]);
    let a9 = polynomial(x, &[1.312179, -3.294936e-1, 9.231860e-2, 2.610989e-2]);
    let a10 = 8.073972e-1;

    let correction = (a6 / mass.powf(a7)).max(a8 + a9 / mass.powf(a10));
    (1.0 - 0.01 * correction).max(0.5)
}

/// Age at which the hook appears.
pub fn hook_time(mass: f64, metallicity: &Metallicity) -> f64 {
    hook_time_factor(mass, metallicity) * base_giant_branch_time(mass, metallicity)
}

/// X, the main-sequence lifetime in units of the base-of-giant-branch time,
/// kept within [0.95, 0.99].
pub fn lifetime_factor(metallicity: &Metallicity) -> f64 {
    (0.95 - 0.03 * (metallicity.index() + 0.30103)).clamp(0.95, 0.99)
}

/// Main-sequence lifetime: the later of the hook time and X·t_BGB.
pub fn main_sequence_lifetime(mass: f64, metallicity: &Metallicity) -> f64 {
    hook_time(mass, metallicity).max(lifetime_factor(metallicity) * base_giant_branch_time(mass, metallicity))
}

/// τ = t / t_MS
pub fn age_fraction(age_myr: f64, lifetime: f64) -> f64 {
    age_myr / lifetime
}

/// (τ₁, τ₂), the two gates of the hook transition.
///
/// τ₁ rises linearly to 1 at the hook time. τ₂ stays at 0 until 99% of the
/// hook time and ramps to 1 over the remaining 1%.
pub fn hook_fractions(age_myr: f64, hook_time: f64) -> (f64, f64) {
    let tau1 = (age_myr / hook_time).min(1.0);
    let tau2 = ((age_myr - (1.0 - HOOK_WINDOW) * hook_time) / (HOOK_WINDOW * hook_time))
        .clamp(0.0, 1.0);
    (tau1, tau2)
}
