pub mod constant {
    pub(crate) const COVERAGE_RADIUS_KM: f64 = 4.0;
    pub(crate) const NUM_UNITS: usize = 4;
    pub(crate) const ITERATIONS: usize = 100;
    pub(crate) const TABU_CAPACITY: usize = 10;
    pub(crate) const SEED: u64 = 64;

    // Cost charged per incident with no unit in range. Large enough to
    // dominate any in-radius distance.
    pub(crate) const UNCOVERED_PENALTY: f64 = 1000.0;

    pub(crate) const INCIDENT_CSV_PATH: &str = "incidents.csv";
    pub(crate) const FIXTURE_INCIDENT_COUNT: usize = 250;

    pub(crate) const UNIT_LOCATIONS_CSV: &str = "unit_locations.csv";
    pub(crate) const BEST_COST_TRACE_CSV: &str = "best_cost_trace.csv";
    pub(crate) const SUMMARY_JSON_PATH: &str = "placement_summary.json";
}

/// Parameters for one optimization run.
///
/// Passed into the driver by reference; runs with different parameters
/// never share state.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Maximum distance (km) at which a unit covers an incident.
    pub coverage_radius_km: f64,
    /// Number of unit slots in every placement. Must not exceed the
    /// incident count.
    pub num_units: usize,
    /// Fixed iteration budget, the only bound on runtime.
    pub iterations: usize,
    /// Maximum number of recently adopted placements kept tabu.
    pub tabu_capacity: usize,
    /// Seed for the search RNG; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            coverage_radius_km: constant::COVERAGE_RADIUS_KM,
            num_units: constant::NUM_UNITS,
            iterations: constant::ITERATIONS,
            tabu_capacity: constant::TABU_CAPACITY,
            seed: Some(constant::SEED),
        }
    }
}
