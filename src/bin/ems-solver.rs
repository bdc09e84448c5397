use ems_placement::solver::tabu_search::search;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    search::run()
}
