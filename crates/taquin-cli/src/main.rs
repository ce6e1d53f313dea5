//! Terminal front end for the Taquin 8-puzzle solver.
//!
//! Reads a start configuration (nine row-major values, 0 for the blank)
//! from the command line or stdin, reports the solvability analysis, and
//! prints either the optimal move transcript or the failure classification.

use std::io::{self, Read as _};
use std::process::ExitCode;

use clap::Parser;
use taquin_core::{Board, parity};
use taquin_solver::{AStarSolver, DEFAULT_MAX_ITERATIONS, SearchError, Solution};

/// Solve a 3×3 sliding-tile puzzle with A* search.
#[derive(Debug, Parser)]
#[command(name = "taquin", version, about)]
struct Args {
    /// Start board as 9 row-major cell values, 0 for the blank.
    /// Read from stdin when omitted.
    #[arg(value_name = "CELL", num_args = 0..=9)]
    cells: Vec<u8>,

    /// Cap on frontier pops before the search gives up.
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let start = read_start_board(args)?;
    let goal = Board::GOAL;

    println!("Start board:");
    print!("{start}");
    println!();
    println!("Goal board:");
    print!("{goal}");
    println!();

    let start_inversions = parity::inversion_count(&start);
    let goal_inversions = parity::inversion_count(&goal);
    println!(
        "Inversions: start {} ({}), goal {} ({})",
        start_inversions,
        parity_name(start_inversions),
        goal_inversions,
        parity_name(goal_inversions),
    );

    let solver = AStarSolver::with_max_iterations(args.max_iterations);
    log::info!("solving with a cap of {} iterations", args.max_iterations);

    match solver.solve(&start, &goal) {
        Ok(solution) => {
            print_transcript(&solution);
            Ok(())
        }
        Err(err @ SearchError::Unsolvable { .. }) => {
            println!("No solution exists: {err}");
            Err(err.into())
        }
        Err(err) => {
            println!("Search gave up without a proof of unsolvability: {err}");
            Err(err.into())
        }
    }
}

fn read_start_board(args: &Args) -> Result<Board, Box<dyn std::error::Error>> {
    let values = if args.cells.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        input
            .split_whitespace()
            .map(|token| token.parse::<u8>().map_err(Into::into))
            .collect::<Result<Vec<u8>, Box<dyn std::error::Error>>>()?
    } else {
        args.cells.clone()
    };

    Board::from_values(&values).map_err(Into::into)
}

fn parity_name(inversions: u32) -> &'static str {
    if inversions % 2 == 0 { "even" } else { "odd" }
}

fn print_transcript(solution: &Solution) {
    println!("Solved in {} moves.", solution.len());
    if solution.is_empty() {
        println!("The start board already matches the goal.");
        return;
    }

    let transcript = solution
        .moves()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("{transcript}");

    log::debug!(
        "search expanded {} boards over {} iterations",
        solution.stats().expanded(),
        solution.stats().iterations()
    );
}
