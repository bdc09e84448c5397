pub mod tabu_search;
