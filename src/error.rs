use std::error::Error;
use std::fmt;

/// Input-shape failures detected before any search iteration runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// More unit slots requested than there are incidents to draw from.
    UnitCountExceedsIncidents { requested: usize, available: usize },
    /// The incident dataset contained zero usable rows.
    EmptyIncidentSet,
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::UnitCountExceedsIncidents {
                requested,
                available,
            } => write!(
                f,
                "requested {} units but only {} incidents are available",
                requested, available
            ),
            SolverError::EmptyIncidentSet => write!(f, "incident set has no usable rows"),
        }
    }
}

impl Error for SolverError {}
