use approx::assert_relative_eq;
use units::Length;

use crate::error::StellarError;
use crate::wind::{StellarWind, WindRegime, base_temperature, wind_pressure};

#[test]
fn base_temperature_by_regime() {
    assert_relative_eq!(base_temperature(1.0, 1.0, WindRegime::Slow), 1.8010610082771996, max_relative = 1e-12);
    assert_relative_eq!(base_temperature(1.0, 1.0, WindRegime::Fast), 3.8018276199888, max_relative = 1e-12);
    assert_relative_eq!(base_temperature(1.0, 1.0, WindRegime::Mean), 2.8014443141329997, max_relative = 1e-12);
}

#[test]
fn base_temperature_scales_with_surface_gravity_potential() {
    let sun = base_temperature(1.0, 1.0, WindRegime::Mean);
    assert_relative_eq!(base_temperature(2.0, 1.0, WindRegime::Mean), 2.0 * sun, max_relative = 1e-12);
    assert_relative_eq!(base_temperature(1.0, 2.0, WindRegime::Mean), 0.5 * sun, max_relative = 1e-12);
}

#[test]
fn default_regime_is_mean() {
    let wind = StellarWind::new(4.5, 1.0, 1.0).unwrap();
    assert_eq!(wind.regime(), WindRegime::Mean);
    assert_relative_eq!(wind.base_temperature().to_megakelvin(), 2.8014443141329997, max_relative = 1e-12);

    let slow = wind.with_regime(WindRegime::Slow);
    assert_relative_eq!(slow.base_temperature().to_megakelvin(), 1.8010610082771996, max_relative = 1e-12);
    assert!(slow.speed_at_1au().to_km_per_sec() < wind.speed_at_1au().to_km_per_sec());
}

#[test]
fn speed_profile_of_a_sun_like_star() {
    let wind = StellarWind::new(4.5, 1.0, 1.0).unwrap();
    assert_relative_eq!(wind.speed_at_1au().to_km_per_sec(), 618.9353471864204, max_relative = 1e-12);
    assert_relative_eq!(wind.speed_gradient(), 0.34961901185769984, max_relative = 1e-12);
    assert_relative_eq!(
        wind.speed_at(Length::from_au(1.0)).to_km_per_sec(),
        618.9353471864204,
        max_relative = 1e-12
    );

    let at_two = wind.speed_at(Length::from_au(2.0)).to_km_per_sec();
    assert_relative_eq!(at_two - 618.9353471864204, 0.34961901185769984 / 0.00465247, max_relative = 1e-9);
}

#[test]
fn spin_and_mass_loss() {
    let wind = StellarWind::new(4.5, 1.0, 1.0).unwrap();
    assert_relative_eq!(wind.angular_spin(), 1.0534169317745892, max_relative = 1e-12);
    assert_relative_eq!(wind.relative_mass_loss_rate(), 1.0716633829001823, max_relative = 1e-12);
    assert_relative_eq!(
        wind.mass_loss_rate().to_kg_per_year(),
        1.0716633829001823 * 2.783773818e16,
        max_relative = 1e-12
    );

    let younger = StellarWind::new(1.0, 1.0, 1.0).unwrap();
    assert!(younger.angular_spin() > wind.angular_spin());
    assert!(younger.relative_mass_loss_rate() > wind.relative_mass_loss_rate());
}

#[test]
fn density_and_pressure_at_one_au() {
    let wind = StellarWind::new(4.5, 1.0, 1.0).unwrap();
    let one_au = Length::from_au(1.0);
    assert_relative_eq!(
        wind.density_at(one_au).unwrap().to_kg_per_m3(),
        5.4310324373449375e-21,
        max_relative = 1e-10
    );
    assert_relative_eq!(
        wind.pressure_at(one_au).unwrap().to_pascals(),
        2.0805251415958518e-09,
        max_relative = 1e-10
    );
    assert_relative_eq!(wind_pressure(4.5, 1.0, 1.0, 1.0).unwrap(), 2.0805251415958518e-09, max_relative = 1e-10);
}

#[test]
fn pressure_falls_with_distance() {
    let wind = StellarWind::new(4.5, 1.0, 1.0).unwrap();
    let mut previous = f64::INFINITY;
    for r in [1e-4, 1e-2, 1.0, 10.0, 100.0, 1000.0] {
        let p = wind.pressure_at(Length::from_au(r)).unwrap().to_pascals();
        assert!(p < previous, "pressure {} at {} AU did not fall", p, r);
        previous = p;
    }
}

#[test]
fn state_gathers_every_wind_quantity() {
    let wind = StellarWind::new(4.5, 1.0, 1.0).unwrap();
    let state = wind.state_at(Length::from_au(1.0)).unwrap();
    assert_relative_eq!(state.speed.to_km_per_sec(), 618.9353471864204, max_relative = 1e-12);
    assert_relative_eq!(state.pressure.to_pascals(), 2.0805251415958518e-09, max_relative = 1e-10);
    assert_relative_eq!(state.base_temperature.to_megakelvin(), 2.8014443141329997, max_relative = 1e-12);
}

#[test]
fn non_physical_inputs_are_rejected() {
    assert!(matches!(
        StellarWind::new(0.0, 1.0, 1.0),
        Err(StellarError::Domain { quantity: "age", .. })
    ));
    assert!(matches!(
        StellarWind::new(4.5, -1.0, 1.0),
        Err(StellarError::Domain { quantity: "mass", .. })
    ));
    assert!(matches!(
        StellarWind::new(4.5, 1.0, 0.0),
        Err(StellarError::Domain { quantity: "radius", .. })
    ));

    let wind = StellarWind::new(4.5, 1.0, 1.0).unwrap();
    assert!(matches!(
        wind.pressure_at(Length::from_au(0.0)),
        Err(StellarError::Domain { quantity: "distance", .. })
    ));
}

#[test]
fn loaded_winds_go_through_the_domain_checks() {
    let wind: StellarWind =
        serde_json::from_str(r#"{"age":4.5,"mass":1.0,"radius":1.0,"regime":"fast"}"#).unwrap();
    assert_eq!(wind.regime(), WindRegime::Fast);
    assert_relative_eq!(wind.radius().to_solar_radii(), 1.0, max_relative = 1e-14);

    let mean: StellarWind = serde_json::from_str(r#"{"age":4.5,"mass":1.0,"radius":1.0}"#).unwrap();
    assert_relative_eq!(
        mean.pressure_at(Length::from_au(1.0)).unwrap().to_pascals(),
        2.0805251415958518e-09,
        max_relative = 1e-10
    );

    for json in [
        r#"{"age":0.0,"mass":1.0,"radius":-1.0,"regime":"mean"}"#,
        r#"{"age":4.5,"mass":0.0,"radius":1.0}"#,
        r#"{"age":4.5,"mass":1.0,"radius":-1.0}"#,
    ] {
        let err = serde_json::from_str::<StellarWind>(json).unwrap_err();
        assert!(err.to_string().contains("outside the valid domain"), "{}", err);
    }
}

#[test]
fn winds_serialize_as_their_inputs() {
    let wind = StellarWind::new(2.0, 0.8, 0.75).unwrap().with_regime(WindRegime::Slow);
    let json = serde_json::to_string(&wind).unwrap();
    assert!(json.contains("\"regime\":\"slow\""), "{}", json);

    let reloaded: StellarWind = serde_json::from_str(&json).unwrap();
    assert_eq!(reloaded.regime(), WindRegime::Slow);
    assert_relative_eq!(reloaded.age().to_gyr(), 2.0, max_relative = 1e-14);
    assert_relative_eq!(
        reloaded.pressure_at(Length::from_au(3.0)).unwrap().to_pascals(),
        wind.pressure_at(Length::from_au(3.0)).unwrap().to_pascals(),
        max_relative = 1e-12
    );
}
