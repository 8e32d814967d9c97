/*
The CDCL driver loop: decide, propagate, and on conflict analyze and
backjump, until every variable is assigned (SAT) or a conflict survives at
decision level 0 (UNSAT).
*/

use rand::Rng;

use crate::cdcl::conflict_analysis::analyze_and_backjump;
use crate::cdcl::unit_propagate::propagate;
use crate::data_structures::{AssignmentStore, ClauseDatabase, Statistics};
use crate::literal_selection::pick_branch;

pub enum Outcome {
    Sat(Vec<bool>),
    Unsat,
}

/// Runs CDCL to completion over `db`/`store`, which must already hold the
/// input clauses with no assignments made. `rng` drives the branching
/// heuristic's random component.
pub fn solve(
    db: &mut ClauseDatabase,
    store: &mut AssignmentStore,
    rng: &mut impl Rng,
    stats: &mut Statistics,
) -> Outcome {
    if propagate(db, store, 0, stats).is_some() {
        return Outcome::Unsat;
    }

    let mut dl = 0;
    while store.num_assigned() < store.num_vars() {
        let literal = pick_branch(store, rng);
        dl += 1;
        store.assign(literal, dl, None);
        stats.increment_decisions();
        log::debug!("decision {literal} at level {dl}");

        loop {
            let Some(conflict) = propagate(db, store, dl, stats) else {
                break;
            };
            if dl == 0 {
                return Outcome::Unsat;
            }
            dl = analyze_and_backjump(db, store, conflict, dl, stats);
            log::debug!("conflict, backjumped to level {dl}");
        }
    }

    Outcome::Sat(store.model())
}
