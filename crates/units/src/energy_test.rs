use approx::assert_relative_eq;

use crate::energy::Energy;

#[test]
fn canonical_supernova_energy_in_joules() {
    let foe = Energy::from_ergs(1.0e51);
    assert_relative_eq!(foe.to_joules(), 1.0e44);
    assert_relative_eq!(Energy::from_joules(1.0e44).to_ergs(), 1.0e51);
}
