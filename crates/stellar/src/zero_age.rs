//! Zero-age main-sequence radius and luminosity.
//!
//! # References
//! - Tout, C. A., Pols, O. R., Eggleton, P. P., & Han, Z. (1996). Zero-age
//!   main-sequence radii and luminosities as analytic functions of mass and
//!   metallicity. MNRAS, 281, 257.

use crate::fit::polynomial;
use crate::metallicity::Metallicity;

/// ZAMS radius (R☉): a rational function of M with ζ-dependent coefficients.
pub fn zero_age_radius(mass: f64, metallicity: &Metallicity) -> f64 {
    let x = metallicity.index();
    let theta = polynomial(x, &[1.71535900, 0.62246212, -0.92557761, -1.16996966, -0.30631491]);
    let iota = polynomial(x, &[6.59778800, -0.42450044, -12.13339427, -10.73509484, -2.51487077]);
    let kappa = polynomial(x, &[10.08855000, -7.11727086, -31.67119479, -24.24848322, -5.33608972]);
    let lambda = polynomial(x, &[1.01249500, 0.32699690, -0.00923418, -0.03876858, -0.00412750]);
    let mu = polynomial(x, &[0.07490166, 0.02410413, 0.07233664, 0.03040467, 0.00197741]);
    let nu = 0.01077422;
    let xi = polynomial(x, &[3.08223400, 0.94472050, -2.15200882, -2.49219496, -0.63848738]);
    let omicron = polynomial(x, &[17.84778000, -7.45345690, -48.96066856, -40.05386135, -9.09331816]);
    let pi = polynomial(x, &[0.00022582, -0.00186899, 0.00388783, 0.00142402, -0.00007671]);

    let m = mass;
    (theta * m.powf(2.5) + iota * m.powf(6.5) + kappa * m.powi(11) + lambda * m.powi(19)
        + mu * m.powf(19.5))
        / (nu + xi * m.powi(2) + omicron * m.powf(8.5) + m.powf(18.5) + pi * m.powf(19.5))
}

/// ZAMS luminosity (L☉).
pub fn zero_age_luminosity(mass: f64, metallicity: &Metallicity) -> f64 {
    let x = metallicity.index();
    let alpha = polynomial(x, &[0.39704170, -0.32913574, 0.34776688, 0.37470851, 0.09011915]);
    let beta = polynomial(x, &[8.52762600, -24.41225973, 56.43597107, 37.06152575, 5.45624060]);
    let gamma = polynomial(x, &[0.00025546, -0.00123461, -0.00023246, 0.00045519, 0.00016176]);
    let delta = polynomial(x, &[5.43288900, -8.62157806, 13.44202049, 14.51584135, 3.39793084]);
    let epsilon = polynomial(x, &[5.56357900, -10.32345224, 19.44322980, 18.97361347, 4.16903097]);
    let zeta = polynomial(x, &[0.78866060, -2.90870942, 6.54713531, 4.05606657, 0.53287322]);
    let eta = polynomial(x, &[0.00586685, -0.01704237, 0.03872348, 0.02570041, 0.00383376]);

    let m = mass;
    (alpha * m.powf(5.5) + beta * m.powi(11))
        / (gamma + m.powi(3) + delta * m.powi(5) + epsilon * m.powi(7) + zeta * m.powi(8)
            + eta * m.powf(9.5))
}
