use assert_cmd::Command;
use predicates::prelude::*;

fn solver() -> Command {
    Command::cargo_bin("satsuite").unwrap()
}

#[test]
fn unit_clause_is_sat_under_both_algorithms() {
    for algorithm in ["cdcl", "dpll"] {
        solver()
            .args(["--algorithm", algorithm])
            .write_stdin("p cnf 1 1\n1 0\n")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("SAT"));
    }
}

#[test]
fn contradictory_units_are_unsat() {
    for algorithm in ["cdcl", "dpll"] {
        solver()
            .args(["--algorithm", algorithm])
            .write_stdin("p cnf 1 2\n1 0\n-1 0\n")
            .assert()
            .success()
            .stdout(predicate::eq("UNSAT"));
    }
}

#[test]
fn three_clause_formula_is_sat_with_a_validating_model() {
    let assert = solver()
        .args(["--algorithm", "cdcl", "--seed", "1"])
        .write_stdin("p cnf 3 3\n1 2 0\n-1 3 0\n-2 3 0\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("SAT"));

    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let model: Vec<i32> = output
        .lines()
        .nth(1)
        .unwrap()
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    let satisfied = |literal: i32| model.contains(&literal);
    assert!(satisfied(1) || satisfied(2));
    assert!(satisfied(-1) || satisfied(3));
    assert!(satisfied(-2) || satisfied(3));
}

#[test]
fn pigeonhole_two_into_one_is_unsat() {
    solver()
        .args(["--algorithm", "dpll"])
        .write_stdin("p cnf 2 3\n1 0\n2 0\n-1 -2 0\n")
        .assert()
        .success()
        .stdout(predicate::eq("UNSAT"));
}

#[test]
fn zero_variables_zero_clauses_is_sat_with_no_model_line() {
    solver()
        .args(["--algorithm", "cdcl"])
        .write_stdin("p cnf 0 0\n")
        .assert()
        .success()
        .stdout(predicate::eq("SAT"));
}

#[test]
fn variables_with_no_clauses_are_still_sat() {
    solver()
        .args(["--algorithm", "cdcl"])
        .write_stdin("p cnf 3 0\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("SAT"));
}

#[test]
fn malformed_header_exits_nonzero_with_no_verdict() {
    solver()
        .write_stdin("not a header\n1 0\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn out_of_range_literal_exits_nonzero() {
    solver()
        .write_stdin("p cnf 1 1\n2 0\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn truncated_clause_list_exits_nonzero() {
    solver()
        .write_stdin("p cnf 1 2\n1 0\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}
