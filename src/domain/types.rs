/// A latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// One candidate solution: a unit location per slot, each taken by value
/// from the incident set. Two slots may hold the same coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub units: Vec<Coordinate>,
}

/// State carried across search iterations. `best` and `best_cost` only
/// ever improve; `current` is allowed to worsen.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub current: Placement,
    pub current_cost: f64,
    pub best: Placement,
    pub best_cost: f64,
    pub best_iteration: usize,
    /// Improvement trace `(iteration, new_best_cost)` for export.
    pub best_updates: Vec<(usize, f64)>,
}

impl SearchState {
    pub fn new(initial: Placement, initial_cost: f64) -> Self {
        Self {
            current: initial.clone(),
            current_cost: initial_cost,
            best: initial,
            best_cost: initial_cost,
            best_iteration: 0,
            best_updates: vec![],
        }
    }
}

/// Outcome of one driver run, consumed by reporting and the downstream
/// visualization collaborator.
#[derive(Debug, Clone)]
pub struct OptimizationReport {
    pub best: Placement,
    pub best_cost: f64,
    pub covered: usize,
    pub uncovered: usize,
    pub total_incidents: usize,
    pub best_updates: Vec<(usize, f64)>,
}
