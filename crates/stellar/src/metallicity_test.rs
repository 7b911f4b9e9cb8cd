use approx::assert_relative_eq;

use crate::error::StellarError;
use crate::metallicity::{Metallicity, metallicity_index};

#[test]
fn solar_metallicity_has_zero_index() {
    assert_eq!(metallicity_index(0.02), 0.0);
    assert_eq!(Metallicity::solar().index(), 0.0);
    assert_eq!(Metallicity::solar(), Metallicity::new(0.02).unwrap());
}

#[test]
fn index_is_decimal_log_of_ratio_to_solar() {
    assert_relative_eq!(metallicity_index(0.002), -1.0, epsilon = 1e-12);
    assert_relative_eq!(metallicity_index(0.0002), -2.0, epsilon = 1e-12);
    assert_relative_eq!(Metallicity::new(0.001).unwrap().log_z(), -3.0, epsilon = 1e-12);
}

#[test]
fn non_positive_metallicity_is_a_domain_error() {
    for z in [0.0, -0.01, f64::NAN, f64::INFINITY] {
        let err = Metallicity::new(z).unwrap_err();
        assert!(matches!(err, StellarError::Domain { quantity: "metallicity", .. }));
    }
}

#[test]
fn metallicity_serializes_as_bare_value() {
    let json = serde_json::to_string(&Metallicity::new(0.004).unwrap()).unwrap();
    assert_eq!(json, "0.004");

    let parsed: Metallicity = serde_json::from_str("0.004").unwrap();
    assert_relative_eq!(parsed.index(), metallicity_index(0.004));

    assert!(serde_json::from_str::<Metallicity>("-1.0").is_err());
}
