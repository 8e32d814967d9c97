use thiserror::Error;

/// Fatal errors produced while reading a DIMACS CNF problem.
///
/// These are the only error conditions the front-end can raise; everything else
/// that happens during a solve (SAT/UNSAT) is a normal return value, not an error.
#[derive(Debug, Error)]
pub enum DimacsError {
    #[error("missing or unparseable 'p cnf <vars> <clauses>' header")]
    MalformedHeader,
    #[error("literal {literal} out of range for {vars} variables")]
    LiteralOutOfRange { literal: i32, vars: usize },
    #[error("expected {expected} clauses but input ended after {found}")]
    UnexpectedEof { expected: usize, found: usize },
}
