use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::types::Coordinate;

// Rough center of the service area covered by the upstream dataset.
const CENTER_LAT: f64 = 21.88;
const CENTER_LON: f64 = -102.29;

const CLUSTER_COUNT: usize = 5;

/// Deterministic synthetic incident set for runs without a CSV and for
/// tests: a few dense clusters plus uniform background noise over a
/// city-sized box. The same seed always yields the same set.
pub fn generate_incidents(count: usize, seed: u64) -> Vec<Coordinate> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let cluster_centers: Vec<Coordinate> = (0..CLUSTER_COUNT)
        .map(|_| Coordinate {
            lat: CENTER_LAT + rng.gen_range(-0.08..0.08),
            lon: CENTER_LON + rng.gen_range(-0.08..0.08),
        })
        .collect();

    let mut incidents = Vec::with_capacity(count);
    for _ in 0..count {
        if rng.gen::<f64>() < 0.8 {
            let center = cluster_centers[rng.gen_range(0..cluster_centers.len())];
            incidents.push(Coordinate {
                lat: center.lat + rng.gen_range(-0.015..0.015),
                lon: center.lon + rng.gen_range(-0.015..0.015),
            });
        } else {
            incidents.push(Coordinate {
                lat: CENTER_LAT + rng.gen_range(-0.1..0.1),
                lon: CENTER_LON + rng.gen_range(-0.1..0.1),
            });
        }
    }

    info!(
        "generated {} synthetic incidents around ({:.2}, {:.2})",
        incidents.len(),
        CENTER_LAT,
        CENTER_LON
    );

    incidents
}
