mod conflict_analysis;
mod unit_propagate;

pub mod cdcl;

pub use cdcl::{solve, Outcome};
