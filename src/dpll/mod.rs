mod unit_propagate;

pub mod dpll;

pub use dpll::{solve, Outcome};
