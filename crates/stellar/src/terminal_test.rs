use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::fit::PiecewiseFit;
use crate::metallicity::Metallicity;
use crate::sampling::sample_metallicity;
use crate::terminal::{TerminalRadiusFit, terminal_luminosity, terminal_radius};
use crate::zero_age::{zero_age_luminosity, zero_age_radius};

#[test]
fn zero_age_values_for_the_sun() {
    let solar = Metallicity::solar();
    assert_relative_eq!(zero_age_radius(1.0, &solar), 0.8882494502975121, max_relative = 1e-12);
    assert_relative_eq!(zero_age_luminosity(1.0, &solar), 0.6977165691451518, max_relative = 1e-12);
    assert_relative_eq!(zero_age_radius(0.5, &solar), 0.4587577620747617, max_relative = 1e-12);
    assert_relative_eq!(zero_age_luminosity(10.0, &solar), 5551.88592961293, max_relative = 1e-12);
}

#[test]
fn zero_age_radius_at_low_metallicity() {
    let metal_poor = Metallicity::new(0.001).unwrap();
    assert_relative_eq!(zero_age_radius(10.0, &metal_poor), 2.9150558969563822, max_relative = 1e-12);
}

#[test]
fn terminal_radius_branches() {
    let solar = Metallicity::solar();
    let fit = TerminalRadiusFit::new(solar);
    // a17 = 10^0.1461 at Z = 0.02
    assert_relative_eq!(fit.low_mass_limit(), 10f64.powf(0.1461), max_relative = 1e-12);
    assert_relative_eq!(fit.high_mass_limit(), fit.low_mass_limit() + 0.1);

    assert_relative_eq!(terminal_radius(1.0, &solar), 1.6239776418172582, max_relative = 1e-10);
    assert_relative_eq!(terminal_radius(1.3, &solar), 2.1915542408156026, max_relative = 1e-10);
    assert_relative_eq!(terminal_radius(1.45, &solar), 2.5245157445376476, max_relative = 1e-10);
    assert_relative_eq!(terminal_radius(3.0, &solar), 4.60641507395883, max_relative = 1e-10);
    assert_relative_eq!(terminal_radius(0.3, &solar), 0.46752588065793127, max_relative = 1e-10);
}

#[test]
fn terminal_radius_of_low_mass_stars_exceeds_half_again_zero_age() {
    let solar = Metallicity::solar();
    for mass in [0.1, 0.15, 0.2, 0.25, 0.3, 0.4, 0.45] {
        let terminal = terminal_radius(mass, &solar);
        assert!(
            terminal >= 1.5 * zero_age_radius(mass, &solar),
            "R_TMS({}) = {} below 1.5 R_ZAMS",
            mass,
            terminal
        );
    }
}

#[test]
fn terminal_luminosity_values() {
    let solar = Metallicity::solar();
    assert_relative_eq!(terminal_luminosity(1.0, &solar), 2.119699663608099, max_relative = 1e-10);
    assert_relative_eq!(terminal_luminosity(3.0, &solar), 206.40745088079623, max_relative = 1e-10);
}

#[test]
fn terminal_radius_is_continuous_across_the_bridge() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..200 {
        let fit = TerminalRadiusFit::new(Metallicity::new(sample_metallicity(&mut rng)).unwrap());
        for seam in fit.seams() {
            let below = fit.value(seam * (1.0 - 1e-15));
            let above = fit.value(seam * (1.0 + 1e-15));
            assert_relative_eq!(below, above, max_relative = 1e-6);
        }
        let low = fit.low_mass_limit();
        let high = fit.high_mass_limit();
        assert_relative_eq!(fit.value(low), fit.low_mass_branch(low));
        assert_relative_eq!(fit.value(high), fit.high_mass_branch(high));
    }
}
