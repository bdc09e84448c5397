use crate::distance::matrix::build_matrix;
use crate::domain::types::{Coordinate, Placement};

/// Number of incidents with at least one unit within the coverage radius
/// (inclusive). Builds its own distance matrix; this runs once per run
/// for the final report, never inside the search loop.
pub fn count_covered(
    incidents: &[Coordinate],
    placement: &Placement,
    coverage_radius_km: f64,
) -> usize {
    let dm = build_matrix(incidents, placement);

    dm.iter()
        .filter(|row| row.iter().any(|d| *d <= coverage_radius_km))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    #[test]
    fn counts_incidents_with_any_unit_in_range() {
        let incidents = vec![coord(0.0, 0.0), coord(0.0, 0.01), coord(10.0, 10.0)];
        let placement = Placement {
            units: vec![coord(0.0, 0.0)],
        };

        assert_eq!(count_covered(&incidents, &placement, 2.0), 2);
    }

    #[test]
    fn coverage_is_monotone_in_the_radius() {
        let incidents = vec![
            coord(0.0, 0.0),
            coord(0.0, 0.05),
            coord(0.0, 0.2),
            coord(2.0, 2.0),
        ];
        let placement = Placement {
            units: vec![coord(0.0, 0.0)],
        };

        let mut previous = 0;
        for radius in [0.0, 1.0, 5.0, 25.0, 500.0] {
            let covered = count_covered(&incidents, &placement, radius);
            assert!(covered >= previous);
            previous = covered;
        }
        assert_eq!(previous, incidents.len());
    }

    #[test]
    fn duplicate_incidents_are_counted_independently() {
        let incidents = vec![coord(1.0, 1.0), coord(1.0, 1.0)];
        let placement = Placement {
            units: vec![coord(1.0, 1.0)],
        };

        assert_eq!(count_covered(&incidents, &placement, 4.0), 2);
    }
}
