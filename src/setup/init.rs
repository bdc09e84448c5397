use std::error::Error;

use itertools::{Itertools, MinMaxResult};
use serde::Deserialize;
use tracing::debug;

use crate::domain::types::Coordinate;
use crate::error::SolverError;

/// One row of the incident dataset. The upstream export carries Spanish
/// uppercase headers; both spellings are accepted.
#[derive(Debug, Deserialize)]
struct IncidentRecord {
    #[serde(alias = "LATITUD")]
    latitude: f64,
    #[serde(alias = "LONGITUD")]
    longitude: f64,
}

/// Load incident coordinates from a CSV export.
///
/// Any row with a missing or non-numeric coordinate fails the whole load;
/// there is no per-row recovery. A file with zero usable rows is an
/// input-shape failure.
pub fn load_incidents(csv_path: &str) -> Result<Vec<Coordinate>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(csv_path)?;

    let mut incidents = Vec::new();
    for row in reader.deserialize() {
        let record: IncidentRecord = row?;
        incidents.push(Coordinate {
            lat: record.latitude,
            lon: record.longitude,
        });
    }

    if incidents.is_empty() {
        return Err(Box::new(SolverError::EmptyIncidentSet));
    }

    if let (MinMaxResult::MinMax(south, north), MinMaxResult::MinMax(west, east)) = (
        incidents.iter().map(|c| c.lat).minmax(),
        incidents.iter().map(|c| c.lon).minmax(),
    ) {
        debug!(
            "incident bounding box: lat {:.4}..{:.4}, lon {:.4}..{:.4}",
            south, north, west, east
        );
    }

    Ok(incidents)
}
