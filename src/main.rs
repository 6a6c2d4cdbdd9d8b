//! CLI entry point for the water-sort solver.
//!
//! Usage:
//!   water-sort-solver solve <puzzle.json>
//!   water-sort-solver solve --stdin
//!
//! A puzzle is a JSON array of tubes, each an array of color ids from
//! bottom to top, e.g. `[[0,1,1,1],[1,0,0,0],[]]`. The report is JSON
//! on stdout; the exit code is 0 when a solution was found and 1
//! otherwise.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use water_sort_solver::{solve, Move, SolverResult, State};

#[derive(Parser)]
#[command(name = "water-sort-solver")]
#[command(about = "Exhaustive backtracking solver for water-sort puzzles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and print the move sequence
    Solve {
        /// Path to puzzle JSON file (use --stdin to read from stdin)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Read puzzle from stdin instead of file
        #[arg(long)]
        stdin: bool,
    },
}

/// Output format for a solve run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solved: bool,
    move_count: usize,
    moves: Vec<Move>,
    states_explored: usize,
    time_elapsed_ms: u64,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve { file, stdin } => {
            let json_content = if stdin {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .expect("Failed to read from stdin");
                buffer
            } else if let Some(path) = file {
                fs::read_to_string(&path)
                    .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
            } else {
                eprintln!("Error: Must provide either a file path or --stdin");
                std::process::exit(1);
            };

            let puzzle: State = match serde_json::from_str(&json_content) {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error parsing puzzle JSON: {}", e);
                    std::process::exit(1);
                }
            };

            let result = solve(&puzzle);

            let output = format_result(result);
            println!("{}", serde_json::to_string_pretty(&output).unwrap());

            if output.solved {
                std::process::exit(0);
            } else {
                std::process::exit(1);
            }
        }
    }
}

fn format_result(result: SolverResult) -> SolveOutput {
    let solved = result.solution.is_some();
    let moves = result.solution.unwrap_or_default();
    SolveOutput {
        solved,
        move_count: moves.len(),
        moves,
        states_explored: result.states_explored,
        time_elapsed_ms: result.time_elapsed_ms,
    }
}
