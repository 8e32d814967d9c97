use std::io::{self, BufRead};

use crate::error::DimacsError;

/// A CNF problem in its normalized, parsed form: a variable count and an
/// ordered list of clauses, each clause a nonempty list of nonzero signed
/// literals with magnitude in `[1, num_vars]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub num_vars: usize,
    pub clauses: Vec<Vec<i32>>,
}

/// Parses a DIMACS CNF problem from `input`.
///
/// Comment lines (first non-whitespace token `c`) and blank lines are skipped
/// wherever they occur. The header `p cnf <vars> <clauses>` must appear before
/// any clause data. Clauses are a whitespace/newline-separated run of nonzero
/// signed integers terminated by `0`; a clause may span several lines.
pub fn parse(input: impl io::Read) -> Result<Problem, DimacsError> {
    let reader = io::BufReader::new(input);
    let mut content_lines = reader
        .lines()
        .map_while(|l| l.ok())
        .filter(|line| !is_blank_or_comment(line));

    let header = content_lines.next().ok_or(DimacsError::MalformedHeader)?;
    let (num_vars, num_clauses) = parse_header(&header)?;

    let mut tokens = content_lines.flat_map(|line| {
        line.split_whitespace()
            .map(str::to_owned)
            .collect::<Vec<_>>()
            .into_iter()
    });

    let mut clauses = Vec::with_capacity(num_clauses);
    let mut clause = Vec::new();

    while clauses.len() < num_clauses {
        let Some(tok) = tokens.next() else {
            return Err(DimacsError::UnexpectedEof {
                expected: num_clauses,
                found: clauses.len(),
            });
        };
        let literal: i32 = tok.parse().map_err(|_| DimacsError::MalformedHeader)?;
        if literal == 0 {
            clauses.push(std::mem::take(&mut clause));
            continue;
        }
        if literal.unsigned_abs() as usize > num_vars {
            return Err(DimacsError::LiteralOutOfRange {
                literal,
                vars: num_vars,
            });
        }
        clause.push(literal);
    }

    Ok(Problem { num_vars, clauses })
}

fn is_blank_or_comment(line: &str) -> bool {
    match line.split_whitespace().next() {
        None => true,
        Some(first) => first == "c",
    }
}

fn parse_header(line: &str) -> Result<(usize, usize), DimacsError> {
    let mut fields = line.split_whitespace();
    if fields.next() != Some("p") || fields.next() != Some("cnf") {
        return Err(DimacsError::MalformedHeader);
    }
    let num_vars = fields.next().and_then(|f| f.parse().ok());
    let num_clauses = fields.next().and_then(|f| f.parse().ok());
    if fields.next().is_some() {
        return Err(DimacsError::MalformedHeader);
    }
    match (num_vars, num_clauses) {
        (Some(v), Some(c)) => Ok((v, c)),
        _ => Err(DimacsError::MalformedHeader),
    }
}

/// Writes the `SAT`/`UNSAT` verdict and, for a satisfiable instance, the
/// signed-literal model to `out`, per the conventional DIMACS solver contract.
pub fn write_verdict(out: &mut impl io::Write, model: Option<&[bool]>) -> io::Result<()> {
    match model {
        Some(values) => {
            write!(out, "SAT")?;
            if !values.is_empty() {
                writeln!(out)?;
                for (index, &value) in values.iter().enumerate() {
                    let variable = index as i32 + 1;
                    if index > 0 {
                        write!(out, " ")?;
                    }
                    write!(out, "{}", if value { variable } else { -variable })?;
                }
            }
            Ok(())
        }
        None => write!(out, "UNSAT"),
    }
}
