//! Command-line front end for the gridlock Sudoku solver.
//!
//! Reads puzzle text from a file or stdin, solves it, and prints the
//! completed grid as a bordered block with the usual 3x3 grouping. Puzzle
//! text is 81 cells of digits with `.`, `_`, or `0` for empty cells;
//! whitespace is ignored.
//!
//! # Usage
//!
//! ```sh
//! gridlock puzzle.txt
//! cat puzzle.txt | gridlock
//! ```
//!
//! Cap the search effort (useful for screening pathological inputs):
//!
//! ```sh
//! gridlock --budget 100000 puzzle.txt
//! ```
//!
//! Solve by raw search only, skipping the logical prefilter:
//!
//! ```sh
//! gridlock --no-deduce puzzle.txt
//! ```
//!
//! Exit status is 0 on success, 1 when the puzzle has no solution, and 2
//! for unreadable input or an exhausted search budget.

use std::{
    fs,
    io::{self, Read as _},
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use gridlock_core::DigitGrid;
use gridlock_solver::{SolveError, Solver};
use log::debug;

mod render;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle file to solve. Reads stdin when absent or `-`.
    puzzle: Option<PathBuf>,

    /// Abort the search after this many tentative assignments.
    #[arg(long, value_name = "NODES")]
    budget: Option<u64>,

    /// Skip the logical prefilter and run the search directly.
    #[arg(long)]
    no_deduce: bool,

    /// Print only the solved grid, without the solve report.
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = match read_puzzle(args.puzzle.as_deref()) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("Error: cannot read puzzle: {err}");
            process::exit(2);
        }
    };

    let mut grid: DigitGrid = match text.parse() {
        Ok(grid) => grid,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    };

    let mut solver = Solver::new();
    if let Some(nodes) = args.budget {
        solver = solver.with_node_budget(nodes);
    }
    if args.no_deduce {
        solver = solver.without_deduction();
    }

    match solver.solve(&mut grid) {
        Ok(report) => {
            println!("{}", render::bordered(&grid));
            if !args.quiet {
                eprintln!(
                    "deduced {} cells, searched {} nodes",
                    report.deduced, report.nodes
                );
            }
        }
        Err(err @ SolveError::Unsolvable) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
        Err(err @ SolveError::BudgetExhausted) => {
            eprintln!("Error: {err}");
            process::exit(2);
        }
    }
}

fn read_puzzle(path: Option<&Path>) -> io::Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            debug!("reading puzzle from {}", path.display());
            fs::read_to_string(path)
        }
        _ => {
            debug!("reading puzzle from stdin");
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
