/*
Recursive DPLL: unit-propagate, eliminate pure literals, then branch on the
variable with the highest polarity count, trying true before false.
*/

use crate::data_structures::{Clause, Literal};
use crate::dpll::unit_propagate::{condition, unit_propagate};
use crate::pure_literal_deletion::{polarity_counts, pure_literals};

pub enum Outcome {
    Sat(Vec<bool>),
    Unsat,
}

/// Runs DPLL over `cnf` to completion and builds the final model.
pub fn solve(cnf: Vec<Clause>, num_vars: usize) -> Outcome {
    match search(cnf, Vec::new(), num_vars) {
        Some(assignment) => Outcome::Sat(assignment_to_model(&assignment, num_vars)),
        None => Outcome::Unsat,
    }
}

fn assignment_to_model(assignment: &[Literal], num_vars: usize) -> Vec<bool> {
    let mut model = vec![false; num_vars];
    for &literal in assignment {
        let index = literal.unsigned_abs() as usize - 1;
        model[index] = literal > 0;
    }
    model
}

fn search(cnf: Vec<Clause>, mut assignment: Vec<Literal>, num_vars: usize) -> Option<Vec<Literal>> {
    let mut cnf = unit_propagate(cnf, &mut assignment);
    if cnf.is_empty() {
        return Some(assignment);
    }
    if cnf.iter().any(Vec::is_empty) {
        return None;
    }

    loop {
        let pures = pure_literals(&cnf, num_vars);
        if pures.is_empty() {
            break;
        }
        for &literal in &pures {
            assignment.push(literal);
            cnf = condition(&cnf, literal);
        }
        if cnf.is_empty() {
            return Some(assignment);
        }
        if cnf.iter().any(Vec::is_empty) {
            return None;
        }
    }

    let branch_variable = max_count_variable(&cnf, num_vars)?;

    let mut true_assignment = assignment.clone();
    true_assignment.push(branch_variable);
    if let Some(model) = search(condition(&cnf, branch_variable), true_assignment, num_vars) {
        return Some(model);
    }

    assignment.push(-branch_variable);
    search(condition(&cnf, -branch_variable), assignment, num_vars)
}

/// Picks the variable still present in `cnf` with the highest single-polarity
/// occurrence count, ties broken by lowest variable index.
fn max_count_variable(cnf: &[Clause], num_vars: usize) -> Option<Literal> {
    let (pos, neg) = polarity_counts(cnf, num_vars);
    let mut best_variable = None;
    let mut best_count = 0;
    for variable in 1..=num_vars {
        let count = pos[variable].max(neg[variable]);
        if count > best_count {
            best_count = count;
            best_variable = Some(variable as Literal);
        }
    }
    best_variable
}
