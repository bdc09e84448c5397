use crate::domain::types::{Coordinate, Placement};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometers between two coordinates, via the
/// haversine formula on a spherical Earth. The only place curvature is
/// modeled; callers never reimplement it.
pub fn haversine(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance from every incident to every unit of a placement. Entry
/// `(i, j)` is incident `i` to unit `j`. Rebuilt in full whenever the
/// placement changes; no caching across calls.
pub fn build_matrix(incidents: &[Coordinate], placement: &Placement) -> Vec<Vec<f64>> {
    incidents
        .iter()
        .map(|incident| {
            placement
                .units
                .iter()
                .map(|unit| haversine(*incident, *unit))
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate { lat, lon }
    }

    #[test]
    fn distance_to_self_is_zero() {
        let a = coord(21.88, -102.29);
        assert_eq!(haversine(a, a), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = coord(21.88, -102.29);
        let b = coord(19.43, -99.13);
        assert!((haversine(a, b) - haversine(b, a)).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_longitude_at_the_equator() {
        // 6371 * pi / 180
        let d = haversine(coord(0.0, 0.0), coord(0.0, 1.0));
        assert!((d - 111.195).abs() < 0.01);
    }

    #[test]
    fn matrix_has_incident_by_unit_shape() {
        let incidents = vec![coord(0.0, 0.0), coord(0.0, 1.0), coord(1.0, 0.0)];
        let placement = Placement {
            units: vec![coord(0.0, 0.0), coord(0.5, 0.5)],
        };

        let dm = build_matrix(&incidents, &placement);
        assert_eq!(dm.len(), 3);
        assert!(dm.iter().all(|row| row.len() == 2));
        assert_eq!(dm[0][0], 0.0);
    }

    #[test]
    fn rebuilding_an_unchanged_placement_is_identical() {
        let incidents = vec![coord(21.88, -102.29), coord(21.91, -102.25)];
        let placement = Placement {
            units: vec![coord(21.86, -102.28)],
        };

        assert_eq!(
            build_matrix(&incidents, &placement),
            build_matrix(&incidents, &placement)
        );
    }
}
