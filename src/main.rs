use std::io;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;

mod cdcl;
mod data_structures;
mod dimacs;
mod dpll;
mod error;
mod literal_selection;
mod pure_literal_deletion;
mod resolution;

use data_structures::{AssignmentStore, ClauseDatabase, Statistics};

/// A DIMACS CNF satisfiability solver.
///
/// Reads a CNF problem from standard input and reports `SAT` (with a model)
/// or `UNSAT` on standard output.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Which solver to run.
    #[arg(long, value_enum, default_value_t = Algorithm::Cdcl)]
    algorithm: Algorithm,

    /// Seed the branching RNG deterministically instead of from OS entropy.
    #[arg(long)]
    seed: Option<u64>,

    /// Raise log verbosity; repeat for more (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, ValueEnum)]
enum Algorithm {
    Cdcl,
    Dpll,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<()> {
    let problem = dimacs::parse(io::stdin().lock())?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let model = match args.algorithm {
        Algorithm::Cdcl => run_cdcl(&problem, &mut rng),
        Algorithm::Dpll => run_dpll(&problem),
    };

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    dimacs::write_verdict(&mut handle, model.as_deref())?;
    Ok(())
}

fn run_cdcl(problem: &dimacs::Problem, rng: &mut StdRng) -> Option<Vec<bool>> {
    let mut db = ClauseDatabase::new();
    let mut store = AssignmentStore::new(problem.num_vars);
    for clause in &problem.clauses {
        db.append(clause.clone());
        store.record_clause_frequencies(clause);
    }
    let mut stats = Statistics::new();
    match cdcl::solve(&mut db, &mut store, rng, &mut stats) {
        cdcl::Outcome::Sat(model) => {
            log::debug!(
                "decisions={} propagations={} conflicts={} learned={}",
                stats.decisions,
                stats.propagations,
                stats.conflicts,
                stats.learned_clauses
            );
            Some(model)
        }
        cdcl::Outcome::Unsat => None,
    }
}

fn run_dpll(problem: &dimacs::Problem) -> Option<Vec<bool>> {
    match dpll::solve(problem.clauses.clone(), problem.num_vars) {
        dpll::Outcome::Sat(model) => Some(model),
        dpll::Outcome::Unsat => None,
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Error,
        1 => log::LevelFilter::Warn,
        2 => log::LevelFilter::Info,
        3 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();
}
