use rand::seq::IteratorRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::domain::types::{Coordinate, Placement};
use crate::error::SolverError;

/// Random initial placement: `num_units` distinct incidents chosen
/// uniformly without replacement, coordinates taken by value.
pub fn initial_placement(
    incidents: &[Coordinate],
    num_units: usize,
    rng: &mut ChaCha8Rng,
) -> Result<Placement, SolverError> {
    if incidents.is_empty() {
        return Err(SolverError::EmptyIncidentSet);
    }
    if num_units > incidents.len() {
        return Err(SolverError::UnitCountExceedsIncidents {
            requested: num_units,
            available: incidents.len(),
        });
    }

    let chosen_indices = (0..incidents.len()).choose_multiple(rng, num_units);
    Ok(Placement {
        units: chosen_indices.into_iter().map(|i| incidents[i]).collect(),
    })
}

/// One neighbor per unit slot: slot `k` is re-drawn uniformly (with
/// replacement) from the full incident set, all other slots are kept.
/// A neighbor may be degenerate: identical to `current`, or with two
/// slots on the same incident. Both are valid.
pub fn generate_neighbors(
    current: &Placement,
    incidents: &[Coordinate],
    rng: &mut ChaCha8Rng,
) -> Vec<Placement> {
    (0..current.units.len())
        .map(|slot| {
            let mut neighbor = current.clone();
            neighbor.units[slot] = incidents[rng.gen_range(0..incidents.len())];
            neighbor
        })
        .collect()
}
