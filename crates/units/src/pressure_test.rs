use approx::assert_relative_eq;

use crate::pressure::Pressure;

#[test]
fn pascal_is_ten_dyn_per_cm2() {
    let p = Pressure::from_pascals(3.3e-9);
    assert_relative_eq!(p.to_dyn_per_cm2(), 3.3e-8);
    assert_relative_eq!(Pressure::from_dyn_per_cm2(1.0).to_pascals(), 0.1);
}

#[test]
fn ram_and_thermal_pressures_add() {
    let ram = Pressure::from_pascals(2.0e-9);
    let thermal = Pressure::from_pascals(1.0e-9);
    assert_relative_eq!((ram + thermal).to_pascals(), 3.0e-9);
    assert_relative_eq!((ram - thermal).to_pascals(), 1.0e-9);
    assert!(ram > thermal);
}
