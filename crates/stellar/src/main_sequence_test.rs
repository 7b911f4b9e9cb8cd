use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use crate::error::StellarError;
use crate::fit::PiecewiseFit;
use crate::main_sequence::{MainSequenceTrack, StellarParameters, evaluate, luminosity, radius};
use crate::metallicity::Metallicity;
use crate::sampling::{sample_log_uniform, sample_metallicity};
use crate::terminal::TerminalRadiusFit;

#[test]
fn sun_at_solar_age_matches_calibration() {
    let r = radius(4567.0, 1.0, 0.02).unwrap();
    let l = luminosity(4567.0, 1.0, 0.02).unwrap();

    assert!((r - 1.0).abs() < 0.05, "R = {}", r);
    assert!((l - 1.0).abs() < 0.1, "L = {}", l);
    assert_relative_eq!(r, 0.9846167557581667, max_relative = 1e-10);
    assert_relative_eq!(l, 0.9557105488646466, max_relative = 1e-10);
}

#[test]
fn zero_age_identity_for_the_sun() {
    let track = MainSequenceTrack::new(1.0, 0.02).unwrap();
    assert_relative_eq!(track.radius_at(0.0).unwrap(), 0.8882494502975121, max_relative = 1e-12);
    assert_relative_eq!(track.luminosity_at(0.0).unwrap(), 0.6977165691451518, max_relative = 1e-12);
}

#[test]
fn intermediate_mass_star() {
    assert_relative_eq!(radius(50.0, 5.0, 0.02).unwrap(), 3.449638389113408, max_relative = 1e-10);
    assert_relative_eq!(luminosity(50.0, 5.0, 0.02).unwrap(), 707.702460224749, max_relative = 1e-10);

    let track = MainSequenceTrack::new(5.0, 0.02).unwrap();
    let late = 0.8 * track.lifetime();
    assert_relative_eq!(track.radius_at(late).unwrap(), 4.731079144418369, max_relative = 1e-10);
    assert_relative_eq!(track.luminosity_at(late).unwrap(), 951.3544587796694, max_relative = 1e-10);
}

#[test]
fn massive_and_metal_poor_stars() {
    assert_relative_eq!(radius(3.0, 20.0, 0.02).unwrap(), 7.317541979583327, max_relative = 1e-10);
    assert_relative_eq!(luminosity(3.0, 20.0, 0.02).unwrap(), 53924.1706603181, max_relative = 1e-10);

    assert_relative_eq!(radius(1000.0, 0.8, 1e-4).unwrap(), 0.7176615580727074, max_relative = 1e-10);
    assert_relative_eq!(luminosity(1000.0, 0.8, 1e-4).unwrap(), 0.589861974247812, max_relative = 1e-10);
}

#[test]
fn end_of_main_sequence_reaches_terminal_values() {
    let track = MainSequenceTrack::new(2.0, 0.02).unwrap();
    let end = track.lifetime();
    assert_relative_eq!(track.radius_at(end).unwrap(), track.terminal_radius(), max_relative = 1e-12);
    assert_relative_eq!(track.luminosity_at(end).unwrap(), track.terminal_luminosity(), max_relative = 1e-12);
    assert_relative_eq!(track.terminal_radius(), 3.5656899011468033, max_relative = 1e-10);
    assert_relative_eq!(track.terminal_luminosity(), 37.566993369922606, max_relative = 1e-10);
}

#[test]
fn state_collects_radius_luminosity_and_age_fraction() {
    let state = evaluate(4567.0, 1.0, 0.02).unwrap();
    assert_relative_eq!(state.age.to_myr(), 4567.0, max_relative = 1e-12);
    assert_relative_eq!(state.age_fraction, 4567.0 / 11003.130245837505, max_relative = 1e-10);
    assert_relative_eq!(state.radius, 0.9846167557581667, max_relative = 1e-10);
    assert_relative_eq!(state.luminosity, 0.9557105488646466, max_relative = 1e-10);

    let from_parameters = StellarParameters::new(1.0, 0.02, 4567.0).unwrap().evaluate().unwrap();
    assert_relative_eq!(from_parameters.radius, state.radius, max_relative = 1e-12);
}

#[test]
fn invalid_inputs_are_domain_errors() {
    assert!(matches!(
        radius(100.0, 0.0, 0.02),
        Err(StellarError::Domain { quantity: "mass", .. })
    ));
    assert!(matches!(
        luminosity(100.0, 1.0, -0.02),
        Err(StellarError::Domain { quantity: "metallicity", .. })
    ));
    assert!(matches!(
        radius(-1.0, 1.0, 0.02),
        Err(StellarError::Domain { quantity: "age", .. })
    ));
    assert!(StellarParameters::new(1.0, 0.02, f64::NAN).is_err());
}

#[test]
fn zero_age_identity_holds_across_sampled_stars() {
    let mut rng = ChaChaRng::seed_from_u64(42);

    for _ in 0..300 {
        let mass = sample_log_uniform(&mut rng, 0.8, 100.0);
        let metallicity = sample_metallicity(&mut rng);
        let track = MainSequenceTrack::new(mass, metallicity).unwrap();

        assert_relative_eq!(
            track.radius_at(0.0).unwrap(),
            track.zero_age_radius(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            track.luminosity_at(0.0).unwrap(),
            track.zero_age_luminosity(),
            max_relative = 1e-12
        );
        assert!(track.lifetime() >= track.hook_time());
    }
}

#[test]
fn radius_is_continuous_across_terminal_radius_seams() {
    let mut rng = ChaChaRng::seed_from_u64(7);

    for _ in 0..100 {
        let metallicity = Metallicity::new(sample_metallicity(&mut rng)).unwrap();
        for seam in TerminalRadiusFit::new(metallicity).seams() {
            let below = MainSequenceTrack::with_metallicity(seam * (1.0 - 1e-12), metallicity).unwrap();
            let above = MainSequenceTrack::with_metallicity(seam * (1.0 + 1e-12), metallicity).unwrap();
            assert_relative_eq!(below.terminal_radius(), above.terminal_radius(), max_relative = 1e-6);
        }
    }
}

#[test]
fn sampled_states_are_real_and_positive() {
    let mut rng = ChaChaRng::seed_from_u64(11);

    for _ in 0..300 {
        let star = crate::sampling::sample_main_sequence_star(&mut rng, 0.8, 100.0).unwrap();
        let state = star.evaluate().unwrap();
        assert!(state.radius.is_finite() && state.radius > 0.0);
        assert!(state.luminosity.is_finite() && state.luminosity > 0.0);
        assert!((0.0..=1.0).contains(&state.age_fraction));
    }
}

#[test]
fn track_serializes_with_camel_case_fields() {
    let state = evaluate(100.0, 1.0, 0.02).unwrap();
    let json = serde_json::to_string(&state).unwrap();
    assert!(json.contains("\"ageFraction\""));
    assert!(json.contains("\"luminosity\""));
}

#[test]
fn loaded_parameters_are_checked_when_evaluated() {
    let star: StellarParameters =
        serde_json::from_str(r#"{"mass":1.0,"metallicity":0.02,"age":4.567e9}"#).unwrap();
    assert_relative_eq!(star.evaluate().unwrap().radius, radius(4567.0, 1.0, 0.02).unwrap(), max_relative = 1e-12);

    assert!(serde_json::from_str::<StellarParameters>(r#"{"mass":1.0,"metallicity":0.0,"age":1e9}"#).is_err());

    let negative: StellarParameters =
        serde_json::from_str(r#"{"mass":-1.0,"metallicity":0.02,"age":1e9}"#).unwrap();
    assert!(matches!(negative.evaluate(), Err(StellarError::Domain { quantity: "mass", .. })));

    let before_birth: StellarParameters =
        serde_json::from_str(r#"{"mass":1.0,"metallicity":0.02,"age":-1e9}"#).unwrap();
    assert!(matches!(before_birth.evaluate(), Err(StellarError::Domain { quantity: "age", .. })));
}
