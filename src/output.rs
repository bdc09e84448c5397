use std::error::Error;
use std::fs;

use csv::Writer;
use serde::Serialize;
use tracing::info;

use crate::domain::types::OptimizationReport;

#[derive(Debug, Serialize)]
struct UnitLocation {
    latitude: f64,
    longitude: f64,
}

#[derive(Debug, Serialize)]
struct PlacementSummary {
    units: Vec<UnitLocation>,
    cost: f64,
    covered: usize,
    uncovered: usize,
    total_incidents: usize,
}

/// Chosen unit coordinates for the downstream map renderer, one row per
/// unit in slot order.
pub fn write_unit_locations(
    report: &OptimizationReport,
    filename: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["latitude", "longitude"])?;
    for unit in &report.best.units {
        wtr.write_record([unit.lat.to_string(), unit.lon.to_string()])?;
    }

    wtr.flush()?;
    info!("wrote unit locations to {}", filename);
    Ok(())
}

/// Best-cost improvements over the run, one row per new best.
pub fn write_best_cost_trace(
    report: &OptimizationReport,
    filename: &str,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(filename)?;

    wtr.write_record(["iteration", "best_cost"])?;
    for (iteration, cost) in &report.best_updates {
        wtr.write_record([iteration.to_string(), cost.to_string()])?;
    }

    wtr.flush()?;
    info!("wrote best-cost trace to {}", filename);
    Ok(())
}

/// Full run summary as JSON for the visualization collaborator.
pub fn write_summary_json(
    report: &OptimizationReport,
    filename: &str,
) -> Result<(), Box<dyn Error>> {
    let summary = PlacementSummary {
        units: report
            .best
            .units
            .iter()
            .map(|unit| UnitLocation {
                latitude: unit.lat,
                longitude: unit.lon,
            })
            .collect(),
        cost: report.best_cost,
        covered: report.covered,
        uncovered: report.uncovered,
        total_incidents: report.total_incidents,
    };

    fs::write(filename, serde_json::to_string_pretty(&summary)?)?;
    info!("wrote placement summary to {}", filename);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::{Coordinate, Placement};

    fn sample_report() -> OptimizationReport {
        OptimizationReport {
            best: Placement {
                units: vec![
                    Coordinate {
                        lat: 21.88,
                        lon: -102.29,
                    },
                    Coordinate {
                        lat: 21.91,
                        lon: -102.25,
                    },
                ],
            },
            best_cost: 321.5,
            covered: 9,
            uncovered: 1,
            total_incidents: 10,
            best_updates: vec![(3, 500.0), (17, 321.5)],
        }
    }

    #[test]
    fn unit_locations_csv_has_one_row_per_unit() {
        let path = std::env::temp_dir().join("ems_placement_units.csv");
        write_unit_locations(&sample_report(), path.to_str().unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("latitude,longitude"));
        assert_eq!(lines.next(), Some("21.88,-102.29"));
        assert_eq!(lines.next(), Some("21.91,-102.25"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn trace_csv_records_each_improvement() {
        let path = std::env::temp_dir().join("ems_placement_trace.csv");
        write_best_cost_trace(&sample_report(), path.to_str().unwrap()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 3);
        assert!(contents.contains("17,321.5"));
    }

    #[test]
    fn summary_json_round_trips_the_counts() {
        let path = std::env::temp_dir().join("ems_placement_summary.json");
        write_summary_json(&sample_report(), path.to_str().unwrap()).unwrap();

        let parsed: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["covered"], 9);
        assert_eq!(parsed["uncovered"], 1);
        assert_eq!(parsed["units"].as_array().unwrap().len(), 2);
        assert_eq!(parsed["cost"], 321.5);
    }
}
