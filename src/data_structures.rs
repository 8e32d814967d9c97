/*
Core data structures shared by the CDCL and DPLL solvers: the clause database,
the per-variable assignment store, and the frequency counters that feed the
branching heuristic. Both solvers build on these; CDCL additionally threads
decision levels and antecedents through the assignment store, while DPLL only
needs the clause list and a model vector (see dpll::dpll).
*/

/// A literal is a nonzero signed integer; its magnitude names a variable
/// numbered `1..=num_vars`, its sign names the polarity.
pub type Literal = i32;

/// A clause is a nonempty ordered list of literals, semantically a set (no
/// variable appears both positively and negatively; duplicates are collapsed
/// when a clause is produced by resolution).
pub type Clause = Vec<Literal>;

/// Append-only sequence of clauses. Original clauses occupy indices
/// `0..num_original`; everything appended afterwards is a learnt clause.
/// Indices are never invalidated, so they double as stable antecedent handles.
#[derive(Debug, Clone, Default)]
pub struct ClauseDatabase {
    clauses: Vec<Clause>,
}

impl ClauseDatabase {
    pub fn new() -> Self {
        ClauseDatabase {
            clauses: Vec::new(),
        }
    }

    /// Appends `clause` to the database and returns its stable index.
    pub fn append(&mut self, clause: Clause) -> usize {
        self.clauses.push(clause);
        self.clauses.len() - 1
    }

    pub fn get(&self, index: usize) -> &Clause {
        &self.clauses[index]
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Clause)> {
        self.clauses.iter().enumerate()
    }
}

/// Per-variable state. `decision_level` and `antecedent` are meaningful only
/// while `value` is `Some`; see the open question in the design notes about
/// why the backtracker is allowed to leave a stale `decision_level` behind on
/// an unassigned variable (it is re-checked before use).
#[derive(Debug, Clone, Copy)]
pub struct Variable {
    pub value: Option<bool>,
    pub decision_level: usize,
    /// `None` for an unassigned variable or a decision; `Some(index)` for a
    /// propagated variable, naming the clause that forced it.
    pub antecedent: Option<usize>,
    pub pos_frequency: u32,
    pub neg_frequency: u32,
}

impl Variable {
    fn unassigned() -> Self {
        Variable {
            value: None,
            decision_level: 0,
            antecedent: None,
            pos_frequency: 0,
            neg_frequency: 0,
        }
    }
}

/// The per-variable assignment store plus the running count of assigned
/// variables. Indexed by variable number `1..=num_vars` (index 0 is unused).
#[derive(Debug, Clone)]
pub struct AssignmentStore {
    variables: Vec<Variable>,
    num_assigned: usize,
}

impl AssignmentStore {
    pub fn new(num_vars: usize) -> Self {
        AssignmentStore {
            variables: vec![Variable::unassigned(); num_vars + 1],
            num_assigned: 0,
        }
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len() - 1
    }

    pub fn num_assigned(&self) -> usize {
        self.num_assigned
    }

    pub fn is_complete(&self) -> bool {
        self.num_assigned == self.num_vars()
    }

    pub fn variable(&self, index: usize) -> &Variable {
        &self.variables[index]
    }

    pub fn is_unassigned_var(&self, index: usize) -> bool {
        self.variables[index].value.is_none()
    }

    /// Assigns `literal`'s variable to match its sign at `decision_level`,
    /// recording `antecedent` (`None` for a decision). Precondition: the
    /// variable is currently unassigned.
    pub fn assign(&mut self, literal: Literal, decision_level: usize, antecedent: Option<usize>) {
        let index = literal.unsigned_abs() as usize;
        debug_assert!(
            self.variables[index].value.is_none(),
            "assign called on an already-assigned variable"
        );
        self.variables[index].value = Some(literal > 0);
        self.variables[index].decision_level = decision_level;
        self.variables[index].antecedent = antecedent;
        self.num_assigned += 1;
    }

    /// Unassigns every variable whose decision level exceeds `level`.
    pub fn unassign_above(&mut self, level: usize) {
        for variable in self.variables.iter_mut() {
            if variable.value.is_some() && variable.decision_level > level {
                variable.value = None;
                variable.antecedent = None;
                // See design notes: `decision_level` is left at 0 rather than an
                // explicit "undefined" sentinel. Safe because every read site
                // first checks `value`.
                variable.decision_level = 0;
                self.num_assigned -= 1;
            }
        }
    }

    pub fn is_satisfied(&self, literal: Literal) -> bool {
        let index = literal.unsigned_abs() as usize;
        match self.variables[index].value {
            Some(value) => value == (literal > 0),
            None => false,
        }
    }

    pub fn is_falsified(&self, literal: Literal) -> bool {
        let index = literal.unsigned_abs() as usize;
        match self.variables[index].value {
            Some(value) => value != (literal > 0),
            None => false,
        }
    }

    pub fn is_unassigned(&self, literal: Literal) -> bool {
        self.is_unassigned_var(literal.unsigned_abs() as usize)
    }

    /// Increments the polarity frequency counters for every literal of a
    /// clause being added to the database. Called for both original and
    /// learnt clauses so the totals stay conserved against the occurrences
    /// actually present in the database.
    pub fn record_clause_frequencies(&mut self, clause: &[Literal]) {
        for &literal in clause {
            let index = literal.unsigned_abs() as usize;
            if literal > 0 {
                self.variables[index].pos_frequency += 1;
            } else {
                self.variables[index].neg_frequency += 1;
            }
        }
    }

    /// Returns the current model as `value[i]` for variable `i + 1`. Only
    /// meaningful once every variable is assigned.
    pub fn model(&self) -> Vec<bool> {
        self.variables[1..]
            .iter()
            .map(|v| v.value.unwrap_or(false))
            .collect()
    }
}

/// Running counters for a single solve, logged at the end of the driver loop.
#[derive(Debug, Clone, Default)]
pub struct Statistics {
    pub decisions: u64,
    pub propagations: u64,
    pub conflicts: u64,
    pub learned_clauses: u64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    pub fn increment_decisions(&mut self) {
        self.decisions += 1;
    }

    pub fn increment_propagations(&mut self) {
        self.propagations += 1;
    }

    pub fn increment_conflicts(&mut self) {
        self.conflicts += 1;
    }

    pub fn increment_learned_clauses(&mut self) {
        self.learned_clauses += 1;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn assign_and_unassign_above() {
        let mut store = AssignmentStore::new(3);
        store.assign(1, 1, None);
        store.assign(-2, 1, Some(0));
        store.assign(3, 2, None);
        assert_eq!(store.num_assigned(), 3);

        store.unassign_above(1);
        assert_eq!(store.num_assigned(), 2);
        assert!(store.is_unassigned_var(3));
        assert!(!store.is_unassigned_var(1));
    }

    #[test]
    fn satisfied_falsified_unassigned() {
        let mut store = AssignmentStore::new(1);
        assert!(store.is_unassigned(1));
        store.assign(1, 0, None);
        assert!(store.is_satisfied(1));
        assert!(store.is_falsified(-1));
        assert!(!store.is_unassigned(1));
    }

    #[test]
    fn frequency_conservation() {
        let mut store = AssignmentStore::new(2);
        store.record_clause_frequencies(&[1, -2, 1]);
        store.record_clause_frequencies(&[-1, 2]);
        let v1 = store.variable(1);
        let v2 = store.variable(2);
        assert_eq!(v1.pos_frequency + v1.neg_frequency, 3);
        assert_eq!(v2.pos_frequency + v2.neg_frequency, 2);
    }

    #[test]
    fn clause_database_append_preserves_indices() {
        let mut db = ClauseDatabase::new();
        let first = db.append(vec![1, 2]);
        let second = db.append(vec![-1, 3]);
        assert_eq!(first, 0);
        assert_eq!(second, 1);
        assert_eq!(db.get(first), &vec![1, 2]);
        assert_eq!(db.len(), 2);
    }
}
