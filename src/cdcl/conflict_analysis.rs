/*
First-UIP conflict analysis and nonchronological backjumping. Resolves the
falsified clause against propagation antecedents until exactly one literal
of the current decision level remains, then learns that clause and
backjumps to the second-highest level it mentions.
*/

use crate::data_structures::{AssignmentStore, Clause, ClauseDatabase, Literal, Statistics};
use crate::resolution::resolve;

fn decision_level_of(store: &AssignmentStore, literal: Literal) -> usize {
    store.variable(literal.unsigned_abs() as usize).decision_level
}

/// Analyzes the conflict at clause `conflict_clause`, appends the learnt
/// clause, unassigns everything above the computed backjump level, and
/// returns that level.
pub fn analyze_and_backjump(
    db: &mut ClauseDatabase,
    store: &mut AssignmentStore,
    conflict_clause: usize,
    dl: usize,
    stats: &mut Statistics,
) -> usize {
    let mut current: Clause = db.get(conflict_clause).clone();

    loop {
        let current_level_literals: Vec<Literal> = current
            .iter()
            .copied()
            .filter(|&literal| decision_level_of(store, literal) == dl)
            .collect();
        if current_level_literals.len() <= 1 {
            break;
        }
        let pivot = current_level_literals
            .into_iter()
            .find(|&literal| {
                store
                    .variable(literal.unsigned_abs() as usize)
                    .antecedent
                    .is_some()
            })
            .expect("a first-UIP must exist among propagated literals of the current level");
        let antecedent_index = store
            .variable(pivot.unsigned_abs() as usize)
            .antecedent
            .unwrap();
        let antecedent_clause = db.get(antecedent_index).clone();
        current = resolve(&current, &antecedent_clause, pivot);
    }

    let bj_level = current
        .iter()
        .map(|&literal| decision_level_of(store, literal))
        .filter(|&level| level != dl)
        .max()
        .unwrap_or(0);

    store.record_clause_frequencies(&current);
    stats.increment_conflicts();
    stats.increment_learned_clauses();
    db.append(current);
    store.unassign_above(bj_level);
    bj_level
}
