/*
The CDCL branching heuristic: mostly pick the unassigned variable with the
highest occurrence frequency, occasionally pick one at random to avoid
getting stuck favouring the same region of the search space. Stateful only
through the frequency counters carried in the assignment store; no decay.
*/

use rand::Rng;

use crate::data_structures::{AssignmentStore, Literal};

/// Chooses the next decision literal. `rng` is threaded through explicitly
/// (rather than read from global state) so callers can seed it deterministically.
pub fn pick_branch(store: &AssignmentStore, rng: &mut impl Rng) -> Literal {
    let r = rng.gen_range(0..10000);
    if r % 20 != 7 {
        return max_frequency_branch(store);
    }
    if store.num_assigned() < store.num_vars() / 3 {
        let mut tries = 0;
        while tries < store.num_vars() / 2 {
            let candidate = rng.gen_range(0..store.num_vars()) + 1;
            if store.is_unassigned_var(candidate) {
                let variable = store.variable(candidate);
                return if variable.pos_frequency > variable.neg_frequency {
                    candidate as Literal
                } else {
                    -(candidate as Literal)
                };
            }
            tries += 1;
        }
    }
    max_frequency_branch(store)
}

/// Returns the unassigned variable/polarity with the highest frequency,
/// ties broken by lowest variable index and, on an exact tie between a
/// variable's own polarities, by preferring the positive literal.
fn max_frequency_branch(store: &AssignmentStore) -> Literal {
    let mut best_literal: Literal = 1;
    let mut best_frequency: i64 = -1;
    for index in 1..=store.num_vars() {
        if !store.is_unassigned_var(index) {
            continue;
        }
        let variable = store.variable(index);
        if variable.pos_frequency as i64 > best_frequency {
            best_frequency = variable.pos_frequency as i64;
            best_literal = index as Literal;
        }
        if variable.neg_frequency as i64 > best_frequency {
            best_frequency = variable.neg_frequency as i64;
            best_literal = -(index as Literal);
        }
    }
    best_literal
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn max_frequency_branch_prefers_highest_count() {
        let mut store = AssignmentStore::new(3);
        store.record_clause_frequencies(&[1, 1, 2]);
        store.record_clause_frequencies(&[-3, -3, -3]);
        assert_eq!(max_frequency_branch(&store), -3);
    }

    #[test]
    fn exact_tie_prefers_positive_polarity() {
        let mut store = AssignmentStore::new(1);
        store.record_clause_frequencies(&[1, -1]);
        assert_eq!(max_frequency_branch(&store), 1);
    }

    #[test]
    fn skips_assigned_variables() {
        let mut store = AssignmentStore::new(2);
        store.record_clause_frequencies(&[1, 1, 1, -2]);
        store.assign(1, 1, None);
        assert_eq!(max_frequency_branch(&store), -2);
    }

    #[test]
    fn pick_branch_returns_unassigned_literal() {
        let mut store = AssignmentStore::new(4);
        store.record_clause_frequencies(&[1, 2, -3, 4]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let literal = pick_branch(&store, &mut rng);
            assert!(store.is_unassigned(literal));
        }
    }
}
