pub mod coverage;
pub mod objective;
