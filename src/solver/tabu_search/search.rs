use std::error::Error;
use std::path::Path;

use colored::Colorize;
use itertools::Itertools;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::constant::{
    BEST_COST_TRACE_CSV, FIXTURE_INCIDENT_COUNT, INCIDENT_CSV_PATH, SEED, SUMMARY_JSON_PATH,
    UNIT_LOCATIONS_CSV,
};
use crate::config::SearchConfig;
use crate::distance::matrix::build_matrix;
use crate::domain::types::{Coordinate, OptimizationReport, SearchState};
use crate::error::SolverError;
use crate::evaluation::coverage::count_covered;
use crate::evaluation::objective::total_cost;
use crate::fixtures::data_generator::generate_incidents;
use crate::output::{write_best_cost_trace, write_summary_json, write_unit_locations};
use crate::setup::init::load_incidents;

use super::neighborhood::{generate_neighbors, initial_placement};
use super::tabu::TabuList;

/// Initialize tracing from the environment
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(
            fmt::layer()
                .with_span_events(fmt::format::FmtSpan::NEW | fmt::format::FmtSpan::CLOSE)
                .pretty(),
        )
        .init();
}

/// Perform a single tabu search iteration
fn perform_iteration(
    iteration: usize,
    state: &mut SearchState,
    incidents: &[Coordinate],
    tabu_list: &mut TabuList,
    config: &SearchConfig,
    rng: &mut ChaCha8Rng,
) {
    let iter_span = span!(Level::DEBUG, "iteration", iter = iteration);
    let _iter_guard = iter_span.enter();

    let neighbors = generate_neighbors(&state.current, incidents, rng);
    let candidates = neighbors
        .into_iter()
        .filter(|neighbor| !tabu_list.contains(neighbor))
        .collect_vec();

    // All neighbors tabu: the iteration still consumes budget but changes
    // nothing, not even the tabu list.
    if candidates.is_empty() {
        debug!("all {} neighbors tabu, skipping", config.num_units);
        return;
    }

    // Each candidate is scored against its own freshly built matrix.
    // Ties go to the first candidate in generation order.
    let costs = candidates
        .iter()
        .map(|candidate| total_cost(&build_matrix(incidents, candidate), config.coverage_radius_km))
        .collect_vec();
    let best_index = costs
        .iter()
        .copied()
        .position_min_by(|a, b| a.total_cmp(b))
        .unwrap_or(0);
    let chosen = candidates[best_index].clone();

    debug!("chosen neighbor cost: {:.2}", costs[best_index]);

    // Always-move policy: the best neighbor is adopted and made tabu even
    // when it is worse than the current solution.
    tabu_list.insert(&chosen);

    let dm = build_matrix(incidents, &chosen);
    let cost = total_cost(&dm, config.coverage_radius_km);
    state.current = chosen;
    state.current_cost = cost;

    if cost < state.best_cost {
        state.best = state.current.clone();
        state.best_cost = cost;
        state.best_iteration = iteration;
        state.best_updates.push((iteration, cost));
        info!("new best at iteration {}: cost = {:.2}", iteration, cost);
    }
}

/// Run the tabu search loop for the configured iteration budget. No early
/// stop: the budget is the only termination criterion.
pub fn tabu_search(
    incidents: &[Coordinate],
    config: &SearchConfig,
    rng: &mut ChaCha8Rng,
) -> Result<SearchState, SolverError> {
    let initial = initial_placement(incidents, config.num_units, rng)?;
    let initial_cost = total_cost(
        &build_matrix(incidents, &initial),
        config.coverage_radius_km,
    );

    let mut state = SearchState::new(initial, initial_cost);
    let mut tabu_list = TabuList::new(config.tabu_capacity);

    let loop_span = span!(Level::INFO, "search_loop", total_iterations = config.iterations);
    let _loop_guard = loop_span.enter();
    info!("initial placement cost: {:.2}", initial_cost);

    for iteration in 1..=config.iterations {
        perform_iteration(
            iteration,
            &mut state,
            incidents,
            &mut tabu_list,
            config,
            rng,
        );
    }

    Ok(state)
}

/// Run one search with a fixed unit count and attach coverage statistics.
/// Single pass, no retries; input-shape failures surface before any
/// iteration runs.
pub fn optimize(
    incidents: &[Coordinate],
    config: &SearchConfig,
) -> Result<OptimizationReport, SolverError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let state = tabu_search(incidents, config, &mut rng)?;

    let covered = count_covered(incidents, &state.best, config.coverage_radius_km);
    let total_incidents = incidents.len();

    Ok(OptimizationReport {
        best: state.best,
        best_cost: state.best_cost,
        covered,
        uncovered: total_incidents - covered,
        total_incidents,
        best_updates: state.best_updates,
    })
}

fn load_or_generate_incidents(csv_path: &str) -> Result<Vec<Coordinate>, Box<dyn Error>> {
    if Path::new(csv_path).exists() {
        let incidents = load_incidents(csv_path)?;
        info!("loaded {} incidents from {}", incidents.len(), csv_path);
        Ok(incidents)
    } else {
        warn!(
            "incident CSV not found at {}, generating synthetic incidents",
            csv_path
        );
        Ok(generate_incidents(FIXTURE_INCIDENT_COUNT, SEED))
    }
}

fn print_summary(report: &OptimizationReport, config: &SearchConfig) {
    let uncovered = if report.uncovered > 0 {
        report.uncovered.to_string().red()
    } else {
        report.uncovered.to_string().green()
    };

    println!("{}", "=".repeat(50));
    println!("{:<30} {}", "Units:", config.num_units);
    println!("{:<30} {}", "Incidents total:", report.total_incidents);
    println!(
        "{:<30} {}",
        "Incidents covered:",
        report.covered.to_string().green()
    );
    println!("{:<30} {}", "Incidents uncovered:", uncovered);
    println!("{:<30} {:.2}", "Best cost:", report.best_cost);
    println!("{:<30}", "Unit locations:");
    for (idx, unit) in report.best.units.iter().enumerate() {
        println!("  unit {}: ({:.5}, {:.5})", idx + 1, unit.lat, unit.lon);
    }
    println!("{}", "=".repeat(50));
}

pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = SearchConfig::default();
    let incidents = {
        let setup_span = span!(Level::INFO, "setup");
        let _guard = setup_span.enter();
        load_or_generate_incidents(INCIDENT_CSV_PATH)?
    };

    info!(
        "starting placement search: {} incidents, {} units, {} iterations",
        incidents.len(),
        config.num_units,
        config.iterations
    );

    let report = optimize(&incidents, &config)?;

    info!(
        "search finished: best cost {:.2}, {} of {} incidents covered",
        report.best_cost, report.covered, report.total_incidents
    );

    print_summary(&report, &config);

    write_unit_locations(&report, UNIT_LOCATIONS_CSV)?;
    write_best_cost_trace(&report, BEST_COST_TRACE_CSV)?;
    write_summary_json(&report, SUMMARY_JSON_PATH)?;

    Ok(())
}
