pub mod neighborhood;
pub mod search;
pub mod tabu;

pub use neighborhood::*;
pub use search::*;
pub use tabu::*;
