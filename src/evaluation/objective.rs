use crate::config::constant::UNCOVERED_PENALTY;

/// Total response cost of the placement a distance matrix was built for.
///
/// Each incident contributes the minimum distance among units within the
/// coverage radius (inclusive), or the fixed uncovered penalty when no
/// unit is in range. Soft coverage: covered incidents still pay their
/// actual distance, so closer coverage keeps being rewarded.
pub fn total_cost(dm: &[Vec<f64>], coverage_radius_km: f64) -> f64 {
    let mut total = 0.0;

    for row in dm {
        let closest_in_range = row
            .iter()
            .copied()
            .filter(|d| *d <= coverage_radius_km)
            .fold(f64::INFINITY, f64::min);

        if closest_in_range.is_finite() {
            total += closest_in_range;
        } else {
            total += UNCOVERED_PENALTY;
        }
    }

    total
}
