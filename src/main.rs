use clap::{Parser, Subcommand};
use serde::Serialize;

mod dataset;
mod solver;

use solver::checker::Checker;
use solver::error::SolverError;
use solver::nut::{labels, Nut};
use solver::RingSolver;

#[derive(Parser)]
#[command(name = "hexnut-ring", version, about = "Solver for the seven-nut hexagon matching puzzle")]
struct Cli {
    /// Raise narration verbosity (-v: debug, -vv: trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the feasible (center, second) starting pairs with their one-step candidates
    Pairs {
        /// Emit the pairs as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Search every ordered starting pair for arrangements that close the ring
    Solve {
        /// Emit the solutions as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Check an arrangement given as comma-separated nut names, center first
    Check { ring: String },
}

#[derive(Serialize)]
struct PairReport {
    center: String,
    second: String,
    left: Vec<String>,
    right: Vec<String>,
}

fn main() {
    let cli = Cli::parse();
    let default_filter = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let solver = RingSolver::new(dataset::canonical_nuts());

    let result = match cli.command {
        Command::Pairs { json } => run_pairs(&solver, json),
        Command::Solve { json } => run_solve(&solver, json),
        Command::Check { ring } => run_check(&solver, &ring),
    };

    if let Err(error) = result {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

fn run_pairs(solver: &RingSolver, json: bool) -> Result<(), SolverError> {
    let pairs = solver.starting_pairs()?;
    if json {
        let report: Vec<PairReport> = pairs
            .iter()
            .map(|pair| PairReport {
                center: pair.center.name().to_string(),
                second: pair.second.name().to_string(),
                left: pair.left_options.iter().map(|nut| nut.name().to_string()).collect(),
                right: pair.right_options.iter().map(|nut| nut.name().to_string()).collect(),
            })
            .collect();
        println!("{}", serde_json::to_string(&report).unwrap());
        return Ok(());
    }
    println!("Found {} possible starting pairs.", pairs.len());
    for pair in &pairs {
        println!(
            "\tPair: ({}, {}), Left: [{}], Right: [{}]",
            pair.center,
            pair.second,
            labels(&pair.left_options),
            labels(&pair.right_options)
        );
    }
    Ok(())
}

fn run_solve(solver: &RingSolver, json: bool) -> Result<(), SolverError> {
    let solutions = solver.solve()?;
    if json {
        let report: Vec<Vec<String>> = solutions
            .iter()
            .map(|path| path.iter().map(|nut| nut.name().to_string()).collect())
            .collect();
        println!("{}", serde_json::to_string(&report).unwrap());
        return Ok(());
    }
    if solutions.is_empty() {
        println!("No arrangement closes the ring.");
    } else {
        println!("Found {} closed ring(s):", solutions.len());
        for path in &solutions {
            println!("\t[{}]", labels(path));
        }
    }
    Ok(())
}

fn run_check(solver: &RingSolver, ring: &str) -> Result<(), SolverError> {
    let path = parse_ring(solver.nuts(), ring);
    let checker = Checker::new(solver.nuts().to_vec());
    if checker.check(&path)? {
        println!("This ring is closed!");
    } else {
        println!("This ring is not closed.");
    }
    Ok(())
}

fn parse_ring(nuts: &[Nut], ring: &str) -> Vec<Nut> {
    let mut path = vec![];
    for name in ring.split(',') {
        let name = name.trim();
        match nuts.iter().find(|nut| nut.name() == name) {
            Some(nut) => path.push(nut.clone()),
            None => {
                eprintln!("error: no nut named {name:?} in the built-in set");
                std::process::exit(2);
            }
        }
    }
    path
}
