use crate::roster::{FireUnit, VehicleRoster};
use rand::Rng;
use std::collections::BTreeMap;

/// Selects a response vehicle uniformly at random.
///
/// The roster is static reference data and never empty.
pub fn pick_vehicle<'a, R: Rng>(rng: &mut R, roster: &'a VehicleRoster) -> &'a FireUnit {
    let index = rng.gen_range(0..roster.len());
    &roster.units()[index]
}

/// Assigns a fabricated usage count in [1, 3] to every selected label.
///
/// The output key set always equals the selection exactly; an empty
/// selection yields an empty mapping.
pub fn allocate_equipment<R: Rng>(rng: &mut R, selection: &[String]) -> BTreeMap<String, u32> {
    selection
        .iter()
        .map(|label| (label.clone(), rng.gen_range(1u32..=3)))
        .collect()
}
